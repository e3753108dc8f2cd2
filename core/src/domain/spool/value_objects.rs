use serde::Deserialize;

pub const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone)]
pub struct AnalyzeSpoolInput {
    pub image_data: Vec<u8>,
    pub content_type: String,
}

/// Named JSON schema the completion API must conform its reply to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: serde_json::Value,
}

/// Fields as returned by the model, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractedSpoolFields {
    #[serde(rename = "type")]
    pub filament_type: String,
    pub color_hex: String,
    pub brand: String,
    pub min_temp: i32,
    pub max_temp: i32,
}
