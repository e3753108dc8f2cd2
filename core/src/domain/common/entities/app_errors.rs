use thiserror::Error;

use crate::domain::spool::entities::SpoolValidationError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("LLM transport error: {0}")]
    UpstreamTransportFailure(String),

    #[error("LLM API returned error: {status} - {body}")]
    UpstreamApiError { status: u16, body: String },

    #[error("No response from LLM")]
    UpstreamEmptyResponse,

    #[error("Failed to parse LLM response: {0}")]
    MalformedExtraction(String),

    #[error("Invalid spool data: {0}")]
    Validation(#[from] SpoolValidationError),
}
