use axum::extract::{Multipart, State, multipart::MultipartRejection};
use axum::http::StatusCode;
use spooltag_core::domain::spool::{
    entities::SpoolData,
    ports::SpoolAnalyzer,
    value_objects::{AnalyzeSpoolInput, DEFAULT_IMAGE_CONTENT_TYPE},
};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    spool::validators::AnalyzeSpoolForm,
};

pub const MAX_IMAGE_SIZE: usize = 20 * 1024 * 1024; // 20 MiB

const IMAGE_FIELD: &str = "image";

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "spool",
    summary = "Analyze a spool label",
    description = "Reads a filament spool label photo with a vision LLM and returns an openspool record.",
    request_body(content = AnalyzeSpoolForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = SpoolData),
        (status = 400, description = "Malformed form or missing image"),
        (status = 500, description = "Reading the upload or the analysis failed")
    ),
)]
pub async fn analyze_spool<A>(
    State(state): State<AppState<A>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<SpoolData>, ApiError>
where
    A: SpoolAnalyzer + 'static,
{
    let mut multipart = multipart.map_err(|e| {
        warn!("Rejected multipart request: {}", e);
        ApiError::BadRequest("invalid multipart form".to_string())
    })?;

    let mut image: Option<AnalyzeSpoolInput> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Failed to read multipart field: {}", e);
        ApiError::BadRequest("invalid multipart form".to_string())
    })? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
            .to_string();

        let data = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                warn!("Image upload exceeded the body limit: {}", e);
                return image_too_large();
            }
            error!("Failed to read image bytes: {}", e);
            ApiError::InternalServerError("failed to read image".to_string())
        })?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(image_too_large());
        }

        image = Some(AnalyzeSpoolInput {
            image_data: data.to_vec(),
            content_type,
        });
        break;
    }

    let input = image.ok_or_else(|| ApiError::BadRequest("missing image field".to_string()))?;

    let analysis_id = Uuid::now_v7();
    info!(
        %analysis_id,
        content_type = %input.content_type,
        size_bytes = input.image_data.len(),
        "Analyzing spool label"
    );

    let spool = state.analyzer.analyze(input).await.map_err(|e| {
        error!(%analysis_id, error = %e, "analyze error");
        ApiError::from(e)
    })?;

    Ok(Response::OK(spool))
}

fn image_too_large() -> ApiError {
    ApiError::BadRequest(format!(
        "Image too large. Max size is {} bytes",
        MAX_IMAGE_SIZE
    ))
}
