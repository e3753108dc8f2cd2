use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    common::entities::app_errors::CoreError,
    spool::{ports::LLMClient, value_objects::ResponseSchema},
};

const CHAT_COMPLETIONS_PATH: &str = "v1/chat/completions";

#[derive(Debug, Clone)]
pub struct OpenAILLMClient {
    api_key: String,
    model_name: String,
    base_url: Url,
    client: Client,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize, Deserialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
    json_schema: JsonSchema,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonSchema {
    name: String,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Serialize, Deserialize)]
struct ResponseMessage {
    content: String,
}

fn image_data_url(content_type: &str, image_data: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        content_type,
        general_purpose::STANDARD.encode(image_data)
    )
}

impl OpenAILLMClient {
    pub fn new(api_key: String, model_name: String, base_url: Url) -> Self {
        Self {
            api_key,
            model_name,
            base_url,
            client: Client::new(),
        }
    }

    fn completions_url(&self) -> Result<Url, CoreError> {
        let mut base = self.base_url.clone();
        // A base without a trailing slash would have its last segment replaced by join.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        base.join(CHAT_COMPLETIONS_PATH)
            .map_err(|e| CoreError::UpstreamTransportFailure(format!("invalid LLM URL: {}", e)))
    }

    async fn call_chat_completions(&self, request: ChatRequest) -> Result<String, CoreError> {
        let url = self.completions_url()?;

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::UpstreamTransportFailure(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::UpstreamApiError {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::MalformedExtraction(e.to_string())
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CoreError::UpstreamEmptyResponse)
    }
}

impl LLMClient for OpenAILLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        content_type: String,
        response_schema: ResponseSchema,
    ) -> Result<String, CoreError> {
        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text { text: prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image_data_url(&content_type, &image_data),
                        },
                    },
                ],
            }],
            response_format: ResponseFormat {
                format_type: "json_schema".to_string(),
                json_schema: JsonSchema {
                    name: response_schema.name,
                    strict: true,
                    schema: response_schema.schema,
                },
            },
        };

        self.call_chat_completions(request).await
    }
}
