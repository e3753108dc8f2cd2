use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    spool::{
        entities::SpoolData,
        value_objects::{AnalyzeSpoolInput, ResponseSchema},
    },
};

/// LLM Client trait for calling vision models with a structured reply
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one prompt plus one image and returns the raw JSON text of the reply.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        content_type: String,
        response_schema: ResponseSchema,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Turns a spool label photo into a validated [`SpoolData`] record
pub trait SpoolAnalyzer: Send + Sync {
    fn analyze(
        &self,
        input: AnalyzeSpoolInput,
    ) -> impl Future<Output = Result<SpoolData, CoreError>> + Send;
}
