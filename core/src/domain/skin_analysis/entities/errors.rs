use thiserror::Error;

use super::provider::ProviderKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("provider is not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("provider returned an empty response")]
    EmptyResponse,

    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("response does not match the recommendation schema: {0}")]
    SchemaViolation(String),
}

/// A failed attempt against one provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{provider}: {error}")]
pub struct ProviderFailure {
    pub provider: ProviderKind,
    pub error: ProviderError,
}

impl ProviderFailure {
    pub fn new(provider: ProviderKind, error: ProviderError) -> Self {
        Self { provider, error }
    }

    pub fn join(failures: &[ProviderFailure]) -> String {
        failures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
