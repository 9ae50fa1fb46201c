use super::handlers::analyze_skin::{__path_analyze_skin, analyze_skin};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_skin))]
pub struct SkinAnalysisApiDoc;

pub fn skin_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analyze", state.args.server.root_path),
            post(analyze_skin),
        )
        .layer(DefaultBodyLimit::max(state.args.server.max_body_bytes))
}
