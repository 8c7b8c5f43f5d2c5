//! Hugging Face chat-completion client
//!
//! Talks to the Hugging Face router's OpenAI-compatible chat endpoint through
//! `async_openai` pointed at the router base. Every transport, status or parse
//! failure is folded into [`GenerationOutcome::Unavailable`] with the reason
//! preserved.

use crate::llm::client::{GenerationOutcome, GenerationParams, TextGenerator};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;

/// Default Hugging Face router base. Overridable for tests.
pub const DEFAULT_HF_API_BASE: &str = "https://router.huggingface.co/v1";

/// Model used when `HF_MODEL_ID` is not configured.
pub const DEFAULT_HF_MODEL: &str = "meta-llama/Meta-Llama-3-8B-Instruct";

/// Chat-completion client against the Hugging Face router.
pub struct HuggingFaceClient {
    client: Client<OpenAIConfig>,
    api_key: String,
    model: String,
}

impl HuggingFaceClient {
    /// Create a client for the given token, endpoint base and model id.
    pub fn new(api_key: String, api_base: String, model: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(api_base.trim_end_matches('/'));

        Self {
            client: Client::with_config(config),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        params: GenerationParams,
    ) -> GenerationOutcome {
        if self.api_key.is_empty() {
            tracing::warn!("HF_API_KEY not set, skipping generation");
            return GenerationOutcome::Unavailable {
                reason: "HF_API_KEY not set".to_string(),
            };
        }

        let request = match CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![
                ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                    system.to_string(),
                )),
                ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(
                    prompt.to_string(),
                )),
            ])
            .max_tokens(params.max_tokens)
            .temperature(params.temperature)
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Failed to build chat completion request: {}", e);
                return GenerationOutcome::Unavailable {
                    reason: format!("failed to build request: {}", e),
                };
            }
        };

        let response = match self.client.chat().create(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Hugging Face API error: {}", e);
                return GenerationOutcome::Unavailable {
                    reason: format!("Hugging Face API error: {}", e),
                };
            }
        };

        match response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
        {
            Some(content) => GenerationOutcome::Text(content.trim().to_string()),
            None => GenerationOutcome::Unavailable {
                reason: "completion had no content".to_string(),
            },
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
