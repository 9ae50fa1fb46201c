use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::{HealthStatus, ProviderAvailability},
        ports::HealthCheckService,
    },
    skin_analysis::{entities::ProviderKind, ports::LLMClient},
};

impl<OA, GM> HealthCheckService for Service<OA, GM>
where
    OA: LLMClient,
    GM: LLMClient,
{
    async fn health(&self) -> Result<HealthStatus, CoreError> {
        Ok(HealthStatus {
            status: "ok".to_string(),
            providers: ProviderAvailability {
                openai: self.is_configured(ProviderKind::OpenAi),
                gemini: self.is_configured(ProviderKind::Gemini),
            },
            default_provider: self.default_provider,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::skin_analysis::ports::MockLLMClient;

    #[tokio::test]
    async fn test_health_reports_configured_providers() {
        let service: Service<MockLLMClient, MockLLMClient> =
            Service::new(None, Some(MockLLMClient::new()), ProviderKind::Gemini);

        let status = service.health().await.unwrap();

        assert_eq!(status.status, "ok");
        assert!(!status.providers.openai);
        assert!(status.providers.gemini);
        assert_eq!(status.default_provider, ProviderKind::Gemini);
    }
}
