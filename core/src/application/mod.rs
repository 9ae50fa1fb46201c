use tracing::{info, warn};

use crate::{
    domain::common::{BeautyAiConfig, services::Service},
    infrastructure::llm::{
        GeminiLLMClient, OpenAiLLMClient, openai_client::sanitize_api_key,
    },
};

pub type BeautyAiService = Service<OpenAiLLMClient, GeminiLLMClient>;

/// Builds the service and its provider clients. Providers without an API
/// key are left out and skipped at request time.
pub fn create_service(config: BeautyAiConfig) -> BeautyAiService {
    let llm = config.llm;

    let openai_client = sanitize_api_key(llm.openai_api_key.as_deref()).map(|api_key| {
        info!(model = %llm.openai_model, base_url = %llm.openai_base_url, "OpenAI client initialized");
        OpenAiLLMClient::new(api_key, llm.openai_model.clone(), llm.openai_base_url.clone())
    });

    let gemini_client = llm
        .gemini_api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|api_key| {
            info!(model = %llm.gemini_model, "Gemini client initialized");
            GeminiLLMClient::new(
                api_key.to_string(),
                llm.gemini_model.clone(),
                llm.gemini_base_url.clone(),
            )
        });

    if openai_client.is_none() && gemini_client.is_none() {
        warn!("No LLM API key configured, every analysis will use default recommendations");
    }

    Service::new(openai_client, gemini_client, llm.default_provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            common::LLMConfig,
            health::ports::HealthCheckService,
            skin_analysis::entities::ProviderKind,
        },
        infrastructure::llm::{
            gemini_client::DEFAULT_GEMINI_BASE_URL, openai_client::DEFAULT_OPENAI_BASE_URL,
        },
    };

    fn config(openai_api_key: Option<&str>, gemini_api_key: Option<&str>) -> BeautyAiConfig {
        BeautyAiConfig {
            llm: LLMConfig {
                openai_api_key: openai_api_key.map(str::to_string),
                openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
                openai_model: "gpt-4o".to_string(),
                gemini_api_key: gemini_api_key.map(str::to_string),
                gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
                gemini_model: "gemini-2.0-flash".to_string(),
                default_provider: ProviderKind::Gemini,
            },
        }
    }

    #[tokio::test]
    async fn test_blank_keys_leave_providers_unconfigured() {
        let service = create_service(config(Some("  "), None));

        let status = service.health().await.unwrap();
        assert!(!status.providers.openai);
        assert!(!status.providers.gemini);
        assert_eq!(service.default_provider(), ProviderKind::Gemini);
    }

    #[tokio::test]
    async fn test_keys_configure_providers() {
        let service = create_service(config(Some("sk-abc"), Some("AIza-key")));

        assert!(service.is_configured(ProviderKind::OpenAi));
        assert!(service.is_configured(ProviderKind::Gemini));
    }
}
