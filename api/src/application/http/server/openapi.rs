use crate::application::http::{health::router::HealthApiDoc, skin_analysis::router::SkinAnalysisApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Beauty AI API"
    ),
    nest(
        (path = "/analyze", api = SkinAnalysisApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
