use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    skin_analysis::{
        entities::{
            AnalysisResult, ProviderError, ProviderFailure, ProviderKind, RecommendationPayload,
        },
        fallback::{ALL_PROVIDERS_FAILED_MESSAGE, NO_PROVIDER_MESSAGE, fallback_recommendations},
        ports::{LLMClient, SkinAnalysisService},
        schema::parse_recommendations,
        value_objects::{AnalyzeSkinInput, LLMRequest},
    },
};

impl<OA, GM> SkinAnalysisService for Service<OA, GM>
where
    OA: LLMClient,
    GM: LLMClient,
{
    #[instrument(skip(self, input), fields(images = input.images.len()))]
    async fn analyze_skin(&self, input: AnalyzeSkinInput) -> Result<AnalysisResult, CoreError> {
        // 1. Validate input
        let validated = input.validate()?;

        // 2. Nothing to call without credentials
        if self.openai_client.is_none() && self.gemini_client.is_none() {
            warn!("No LLM provider configured, serving default recommendations");
            return Ok(AnalysisResult::fallback(
                fallback_recommendations(),
                NO_PROVIDER_MESSAGE.to_string(),
                None,
            ));
        }

        // 3. Preferred provider first, then the other one, one attempt each
        let preferred = input.provider_preference.unwrap_or(self.default_provider);
        let request = LLMRequest::for_analysis(&validated);
        let mut failures: Vec<ProviderFailure> = Vec::new();

        for provider in [preferred, preferred.other()] {
            match self.request_recommendations(provider, request.clone()).await {
                Ok(recommendations) => {
                    let (message, error_details) = match failures.first() {
                        None => (
                            format!("Recommendations generated by {}.", provider),
                            None,
                        ),
                        Some(primary) => (
                            format!(
                                "Recommendations generated by {} after {} was unavailable.",
                                provider, primary.provider
                            ),
                            Some(ProviderFailure::join(&failures)),
                        ),
                    };

                    info!(%provider, fallback = false, "Skin analysis completed");
                    return Ok(AnalysisResult::generated(
                        recommendations,
                        provider,
                        message,
                        error_details,
                    ));
                }
                Err(error) => {
                    warn!(%provider, %error, "Provider failed to generate recommendations");
                    failures.push(ProviderFailure::new(provider, error));
                }
            }
        }

        // 4. Both failed
        let error_details = ProviderFailure::join(&failures);
        info!(fallback = true, %error_details, "Skin analysis served default recommendations");

        Ok(AnalysisResult::fallback(
            fallback_recommendations(),
            ALL_PROVIDERS_FAILED_MESSAGE.to_string(),
            Some(error_details),
        ))
    }
}

impl<OA, GM> Service<OA, GM>
where
    OA: LLMClient,
    GM: LLMClient,
{
    async fn request_recommendations(
        &self,
        provider: ProviderKind,
        request: LLMRequest,
    ) -> Result<RecommendationPayload, ProviderError> {
        let raw_response = match provider {
            ProviderKind::OpenAi => {
                let client = self
                    .openai_client
                    .as_ref()
                    .ok_or(ProviderError::NotConfigured)?;
                client.generate_recommendations(request).await?
            }
            ProviderKind::Gemini => {
                let client = self
                    .gemini_client
                    .as_ref()
                    .ok_or(ProviderError::NotConfigured)?;
                client.generate_recommendations(request).await?
            }
        };

        parse_recommendations(&raw_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::skin_analysis::ports::MockLLMClient;
    use serde_json::json;

    fn valid_response(title: &str) -> String {
        json!({
            "concernAnalysis": { "title": title, "description": "Uneven tone around the cheeks." },
            "potentialSolutions": { "title": "Brightening", "description": "Laser toning sessions." },
            "recommendedProducts": {
                "title": "Products",
                "products": [{
                    "name": "Vitamin C Serum",
                    "description": "Antioxidant serum.",
                    "benefits": ["Brightens skin"]
                }]
            },
            "nextSteps": { "title": "Consultation", "description": "Book at Dr. Bashar Clinic." }
        })
        .to_string()
    }

    fn succeeding(title: &'static str) -> MockLLMClient {
        let mut client = MockLLMClient::new();
        client
            .expect_generate_recommendations()
            .times(1)
            .returning(move |_| Box::pin(async move { Ok(valid_response(title)) }));
        client
    }

    fn failing(error: ProviderError) -> MockLLMClient {
        let mut client = MockLLMClient::new();
        client
            .expect_generate_recommendations()
            .times(1)
            .returning(move |_| {
                let error = error.clone();
                Box::pin(async move { Err(error) })
            });
        client
    }

    fn returning_raw(raw: &'static str) -> MockLLMClient {
        let mut client = MockLLMClient::new();
        client
            .expect_generate_recommendations()
            .times(1)
            .returning(move |_| Box::pin(async move { Ok(raw.to_string()) }));
        client
    }

    fn unused() -> MockLLMClient {
        let mut client = MockLLMClient::new();
        client.expect_generate_recommendations().never();
        client
    }

    fn input(preference: Option<ProviderKind>) -> AnalyzeSkinInput {
        AnalyzeSkinInput {
            description: Some("Redness and dry patches on both cheeks".to_string()),
            images: vec![],
            provider_preference: preference,
        }
    }

    #[tokio::test]
    async fn test_preferred_provider_success() {
        let service = Service::new(Some(succeeding("OpenAI analysis")), Some(unused()), ProviderKind::OpenAi);

        let result = service
            .analyze_skin(input(Some(ProviderKind::OpenAi)))
            .await
            .unwrap();

        assert!(!result.fallback);
        assert_eq!(result.provider, Some(ProviderKind::OpenAi));
        assert_eq!(result.recommendations.concern_analysis.title, "OpenAI analysis");
        assert_eq!(result.message, "Recommendations generated by OpenAI.");
        assert_eq!(result.error_details, None);
    }

    #[tokio::test]
    async fn test_gemini_preference_is_tried_first() {
        let service = Service::new(Some(unused()), Some(succeeding("Gemini analysis")), ProviderKind::OpenAi);

        let result = service
            .analyze_skin(input(Some(ProviderKind::Gemini)))
            .await
            .unwrap();

        assert!(!result.fallback);
        assert_eq!(result.provider, Some(ProviderKind::Gemini));
    }

    #[tokio::test]
    async fn test_default_provider_used_without_preference() {
        let service = Service::new(Some(unused()), Some(succeeding("Gemini analysis")), ProviderKind::Gemini);

        let result = service.analyze_skin(input(None)).await.unwrap();

        assert_eq!(result.provider, Some(ProviderKind::Gemini));
    }

    #[tokio::test]
    async fn test_falls_back_to_secondary_provider() {
        let service = Service::new(
            Some(failing(ProviderError::RequestFailed("503 Service Unavailable".to_string()))),
            Some(succeeding("Gemini analysis")),
            ProviderKind::OpenAi,
        );

        let result = service
            .analyze_skin(input(Some(ProviderKind::OpenAi)))
            .await
            .unwrap();

        assert!(!result.fallback);
        assert_eq!(result.provider, Some(ProviderKind::Gemini));
        assert!(result.message.contains("Gemini"));
        assert_eq!(
            result.error_details.as_deref(),
            Some("OpenAI: request failed: 503 Service Unavailable")
        );
    }

    #[tokio::test]
    async fn test_malformed_json_triggers_fallback_provider() {
        let service = Service::new(
            Some(returning_raw("{\"concernAnalysis\": {}}")),
            Some(succeeding("Gemini analysis")),
            ProviderKind::OpenAi,
        );

        let result = service.analyze_skin(input(None)).await.unwrap();

        assert!(!result.fallback);
        assert_eq!(result.provider, Some(ProviderKind::Gemini));
        assert!(
            result
                .error_details
                .unwrap()
                .starts_with("OpenAI: response does not match the recommendation schema")
        );
    }

    #[tokio::test]
    async fn test_unconfigured_preferred_provider_is_skipped() {
        let service: Service<MockLLMClient, MockLLMClient> =
            Service::new(None, Some(succeeding("Gemini analysis")), ProviderKind::OpenAi);

        let result = service.analyze_skin(input(None)).await.unwrap();

        assert!(!result.fallback);
        assert_eq!(result.provider, Some(ProviderKind::Gemini));
        assert_eq!(
            result.message,
            "Recommendations generated by Gemini after OpenAI was unavailable."
        );
        assert_eq!(
            result.error_details.as_deref(),
            Some("OpenAI: provider is not configured")
        );
    }

    #[tokio::test]
    async fn test_both_providers_fail() {
        let service = Service::new(
            Some(failing(ProviderError::EmptyResponse)),
            Some(returning_raw("not json at all")),
            ProviderKind::OpenAi,
        );

        let result = service.analyze_skin(input(None)).await.unwrap();

        assert!(result.fallback);
        assert_eq!(result.provider, None);
        assert_eq!(result.recommendations, fallback_recommendations());
        assert_eq!(result.message, ALL_PROVIDERS_FAILED_MESSAGE);
        let details = result.error_details.unwrap();
        assert!(details.starts_with("OpenAI: provider returned an empty response; Gemini: "));
    }

    #[tokio::test]
    async fn test_no_provider_configured() {
        let service: Service<MockLLMClient, MockLLMClient> =
            Service::new(None, None, ProviderKind::OpenAi);

        let result = service.analyze_skin(input(None)).await.unwrap();

        assert!(result.fallback);
        assert_eq!(result.recommendations, fallback_recommendations());
        assert_eq!(result.message, NO_PROVIDER_MESSAGE);
        assert_eq!(result.error_details, None);
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_before_any_call() {
        let service = Service::new(Some(unused()), Some(unused()), ProviderKind::OpenAi);

        let result = service.analyze_skin(AnalyzeSkinInput::default()).await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_request_carries_description_and_schema() {
        let mut openai = MockLLMClient::new();
        openai
            .expect_generate_recommendations()
            .withf(|request: &LLMRequest| {
                request.user_text == "My concerns: Redness and dry patches on both cheeks"
                    && request.response_schema["required"].as_array().map(Vec::len) == Some(4)
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(valid_response("ok")) }));
        let service = Service::new(Some(openai), Some(unused()), ProviderKind::OpenAi);

        let result = service.analyze_skin(input(None)).await.unwrap();

        assert!(!result.fallback);
    }
}
