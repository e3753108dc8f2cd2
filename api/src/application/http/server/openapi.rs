use crate::application::http::{health, spool::router::SpoolApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SpoolTag API"
    ),
    paths(health::health),
    nest(
        (path = "/api", api = SpoolApiDoc),
    )
)]
pub struct ApiDoc;
