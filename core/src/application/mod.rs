use crate::{
    domain::common::{SpoolTagConfig, services::Service},
    infrastructure::llm::OpenAILLMClient,
};

pub type SpoolTagService = Service<OpenAILLMClient>;

pub fn create_service(config: SpoolTagConfig) -> SpoolTagService {
    let llm_client = OpenAILLMClient::new(
        config.llm.openai_api_key,
        config.llm.openai_model,
        config.llm.openai_base_url,
    );

    Service::new(llm_client)
}
