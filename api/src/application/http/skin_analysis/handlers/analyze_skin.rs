use axum::extract::State;
use beautyai_core::domain::skin_analysis::{
    entities::AnalysisResult, ports::SkinAnalysisService, value_objects::AnalyzeSkinInput,
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    skin_analysis::validators::AnalyzeSkinRequest,
};

#[utoipa::path(
    post,
    path = "",
    tag = "skin-analysis",
    summary = "Analyze skin",
    description = "Analyzes the described concerns and facial photos with the preferred LLM provider, falling back to the other provider and then to default recommendations.",
    responses(
        (status = 200, body = AnalysisResult),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = AnalyzeSkinRequest
)]
pub async fn analyze_skin(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeSkinRequest>,
) -> Result<Response<AnalysisResult>, ApiError> {
    let result = state
        .service
        .analyze_skin(AnalyzeSkinInput {
            description: payload.description,
            images: payload.images.unwrap_or_default(),
            provider_preference: payload.provider_preference,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
