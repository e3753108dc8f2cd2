use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    spool::{
        entities::{SpoolData, normalize_brand},
        helpers::first_color_segment,
        ports::{LLMClient, SpoolAnalyzer},
        schema::{SPOOL_LABEL_PROMPT, SPOOL_SCHEMA_NAME, get_spool_label_schema},
        value_objects::{AnalyzeSpoolInput, ExtractedSpoolFields, ResponseSchema},
    },
};

impl<LLM> SpoolAnalyzer for Service<LLM>
where
    LLM: LLMClient,
{
    async fn analyze(&self, input: AnalyzeSpoolInput) -> Result<SpoolData, CoreError> {
        let response_schema = ResponseSchema {
            name: SPOOL_SCHEMA_NAME.to_string(),
            schema: get_spool_label_schema(),
        };

        let raw_response = self
            .llm_client
            .generate_with_image(
                SPOOL_LABEL_PROMPT.to_string(),
                input.image_data,
                input.content_type,
                response_schema,
            )
            .await?;

        let extracted: ExtractedSpoolFields =
            serde_json::from_str(&raw_response).map_err(|e| {
                tracing::error!("Failed to parse extracted spool fields: {}", e);
                CoreError::MalformedExtraction(e.to_string())
            })?;

        let color_hex = first_color_segment(&extracted.color_hex).to_string();
        let brand = normalize_brand(&extracted.brand).to_string();

        let spool = SpoolData::new(
            extracted.filament_type,
            color_hex,
            brand,
            extracted.min_temp,
            extracted.max_temp,
        )
        .inspect_err(|e| tracing::warn!(error = %e, "Extracted spool data failed validation"))?;

        tracing::info!(
            filament_type = %spool.filament_type,
            brand = %spool.brand,
            color_hex = %spool.color_hex,
            "Spool label analyzed"
        );

        Ok(spool)
    }
}
