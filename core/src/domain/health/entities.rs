use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::skin_analysis::entities::ProviderKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProviderAvailability {
    pub openai: bool,
    pub gemini: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub providers: ProviderAvailability,
    pub default_provider: ProviderKind,
}
