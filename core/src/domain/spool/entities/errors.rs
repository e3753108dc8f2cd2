use thiserror::Error;

/// Invariant violated while building a [`SpoolData`](super::SpoolData) record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpoolValidationError {
    #[error("invalid protocol: {0:?}")]
    InvalidProtocol(String),

    #[error("invalid version: {0:?}")]
    InvalidVersion(String),

    #[error("type is required")]
    MissingType,

    #[error("invalid color_hex: {0:?}")]
    InvalidColorHex(String),

    #[error("brand is required")]
    MissingBrand,

    #[error("min_temp must be positive")]
    NonPositiveMinTemp,

    #[error("max_temp must be positive")]
    NonPositiveMaxTemp,

    #[error("min_temp ({min}) must not exceed max_temp ({max})")]
    MinExceedsMax { min: i32, max: i32 },

    #[error("invalid temperature {0:?}")]
    InvalidTemperature(String),
}
