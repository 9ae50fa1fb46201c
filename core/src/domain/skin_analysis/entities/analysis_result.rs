use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

use super::{provider::ProviderKind, recommendation::RecommendationPayload};

/// Outcome of one analysis. Built per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: Uuid,
    pub recommendations: RecommendationPayload,
    /// `true` when `recommendations` is the canned payload.
    pub fallback: bool,
    pub provider: Option<ProviderKind>,
    pub message: String,
    pub error_details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn generated(
        recommendations: RecommendationPayload,
        provider: ProviderKind,
        message: String,
        error_details: Option<String>,
    ) -> Self {
        Self::build(recommendations, false, Some(provider), message, error_details)
    }

    pub fn fallback(
        recommendations: RecommendationPayload,
        message: String,
        error_details: Option<String>,
    ) -> Self {
        Self::build(recommendations, true, None, message, error_details)
    }

    fn build(
        recommendations: RecommendationPayload,
        fallback: bool,
        provider: Option<ProviderKind>,
        message: String,
        error_details: Option<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recommendations,
            fallback,
            provider,
            message,
            error_details,
            timestamp: now,
        }
    }
}
