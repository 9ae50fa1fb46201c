use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    skin_analysis::{
        entities::{AnalysisResult, ProviderError},
        value_objects::{AnalyzeSkinInput, LLMRequest},
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Issues a single request and returns the raw text the model produced.
    fn generate_recommendations(
        &self,
        request: LLMRequest,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}

/// Service trait for skin analysis business logic
pub trait SkinAnalysisService: Send + Sync {
    /// Fails only on invalid input; provider failures degrade to the
    /// canned recommendations.
    fn analyze_skin(
        &self,
        input: AnalyzeSkinInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}
