use crate::domain::skin_analysis::{entities::ProviderKind, ports::LLMClient};

/// Application service holding the provider clients, built once at startup.
///
/// A `None` client means the provider has no API key and is skipped.
#[derive(Clone)]
pub struct Service<OA, GM>
where
    OA: LLMClient,
    GM: LLMClient,
{
    pub(crate) openai_client: Option<OA>,
    pub(crate) gemini_client: Option<GM>,
    pub(crate) default_provider: ProviderKind,
}

impl<OA, GM> Service<OA, GM>
where
    OA: LLMClient,
    GM: LLMClient,
{
    pub fn new(
        openai_client: Option<OA>,
        gemini_client: Option<GM>,
        default_provider: ProviderKind,
    ) -> Self {
        Self {
            openai_client,
            gemini_client,
            default_provider,
        }
    }

    pub fn is_configured(&self, provider: ProviderKind) -> bool {
        match provider {
            ProviderKind::OpenAi => self.openai_client.is_some(),
            ProviderKind::Gemini => self.gemini_client.is_some(),
        }
    }

    pub fn default_provider(&self) -> ProviderKind {
        self.default_provider
    }
}
