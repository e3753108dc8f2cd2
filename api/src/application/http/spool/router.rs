use super::handlers::analyze_spool::{MAX_IMAGE_SIZE, __path_analyze_spool, analyze_spool};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use spooltag_core::domain::spool::ports::SpoolAnalyzer;
use utoipa::OpenApi;

/// Room for multipart boundaries and headers on top of the image itself.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_spool))]
pub struct SpoolApiDoc;

pub fn spool_routes<A>(state: AppState<A>) -> Router<AppState<A>>
where
    A: SpoolAnalyzer + 'static,
{
    Router::new()
        .route(
            &format!("{}/api/analyze", state.args.server.root_path),
            post(analyze_spool::<A>),
        )
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD))
}
