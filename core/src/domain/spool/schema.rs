use serde_json::json;

use crate::domain::spool::entities::VALID_BRANDS;

pub const SPOOL_SCHEMA_NAME: &str = "filament_info";

pub const SPOOL_LABEL_PROMPT: &str = "Extract the filament spool information from this label image. \
Return the filament type (e.g. PLA, PETG, ABS), the color as a hex code, the brand name, \
and the recommended min and max nozzle temperatures in Celsius.";

/// Returns the strict JSON schema the model reply must follow
pub fn get_spool_label_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "type": {
                "type": "string",
                "description": "Filament type, e.g. PLA, PETG, ABS, TPU"
            },
            "color_hex": {
                "type": "string",
                "description": "Single primary color as one hex code, e.g. #FF5733. Only return one color."
            },
            "brand": {
                "type": "string",
                "description": format!("Brand name. Must be one of: {}", VALID_BRANDS.join(", "))
            },
            "min_temp": {
                "type": "integer",
                "description": "Minimum nozzle temperature in Celsius"
            },
            "max_temp": {
                "type": "integer",
                "description": "Maximum nozzle temperature in Celsius"
            }
        },
        "required": ["type", "color_hex", "brand", "min_temp", "max_temp"],
        "additionalProperties": false
    })
}
