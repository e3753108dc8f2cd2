use utoipa::ToSchema;

/// Multipart body accepted by the analyze endpoint.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeSpoolForm {
    /// Label photo, at most 20 MiB. The part's content type defaults to `image/jpeg`.
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}
