use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::SpoolValidationError;

pub const PROTOCOL: &str = "openspool";
pub const VERSION: &str = "1.0";

/// Brands the tag format knows about, in their canonical spelling.
pub const VALID_BRANDS: [&str; 5] = ["Generic", "Overture", "PolyLite", "eSun", "PolyTerra"];

pub const DEFAULT_BRAND: &str = "Generic";

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

/// Maps a free-form brand name onto the allow-list, ignoring case.
/// Anything unknown, including the empty string, becomes `Generic`.
pub fn normalize_brand(brand: &str) -> &'static str {
    VALID_BRANDS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(brand))
        .copied()
        .unwrap_or(DEFAULT_BRAND)
}

/// Parses a decimal nozzle temperature such as `"210"`.
pub fn parse_temperature(value: &str) -> Result<i32, SpoolValidationError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| SpoolValidationError::InvalidTemperature(value.to_string()))
}

/// A filament spool description in the openspool tag format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SpoolData {
    #[schema(example = "openspool")]
    pub protocol: String,
    #[schema(example = "1.0")]
    pub version: String,
    #[serde(rename = "type")]
    #[schema(example = "PLA")]
    pub filament_type: String,
    #[schema(example = "#FF5733")]
    pub color_hex: String,
    #[schema(example = "eSun")]
    pub brand: String,
    #[schema(example = 190)]
    pub min_temp: i32,
    #[schema(example = 220)]
    pub max_temp: i32,
}

impl SpoolData {
    pub fn new(
        filament_type: String,
        color_hex: String,
        brand: String,
        min_temp: i32,
        max_temp: i32,
    ) -> Result<Self, SpoolValidationError> {
        let spool = Self {
            protocol: PROTOCOL.to_string(),
            version: VERSION.to_string(),
            filament_type,
            color_hex,
            brand,
            min_temp,
            max_temp,
        };

        spool.validate()?;
        Ok(spool)
    }

    /// Checks every invariant in a fixed order and reports the first one broken.
    pub fn validate(&self) -> Result<(), SpoolValidationError> {
        if self.protocol != PROTOCOL {
            return Err(SpoolValidationError::InvalidProtocol(self.protocol.clone()));
        }
        if self.version != VERSION {
            return Err(SpoolValidationError::InvalidVersion(self.version.clone()));
        }
        if self.filament_type.is_empty() {
            return Err(SpoolValidationError::MissingType);
        }
        if !HEX_COLOR_RE.is_match(&self.color_hex) {
            return Err(SpoolValidationError::InvalidColorHex(self.color_hex.clone()));
        }
        if self.brand.is_empty() {
            return Err(SpoolValidationError::MissingBrand);
        }
        if self.min_temp <= 0 {
            return Err(SpoolValidationError::NonPositiveMinTemp);
        }
        if self.max_temp <= 0 {
            return Err(SpoolValidationError::NonPositiveMaxTemp);
        }
        if self.min_temp > self.max_temp {
            return Err(SpoolValidationError::MinExceedsMax {
                min: self.min_temp,
                max: self.max_temp,
            });
        }

        Ok(())
    }
}
