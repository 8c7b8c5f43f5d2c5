//! Text generation abstractions and provider management
//!
//! The drafter asks this boundary for prose and always gets an answer: either
//! the generated text or an explicit unavailability reason. No sentinel
//! strings, no errors to propagate.

use async_trait::async_trait;
use std::sync::Arc;

/// Outcome of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// The model produced text.
    Text(String),
    /// The model could not be reached or is not configured.
    Unavailable {
        /// Why generation did not happen.
        reason: String,
    },
}

impl GenerationOutcome {
    /// True when the call produced text.
    pub fn is_text(&self) -> bool {
        matches!(self, GenerationOutcome::Text(_))
    }
}

/// Sampling parameters for one generation call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 600,
            temperature: 0.3,
        }
    }
}

/// Chat-completion capability behind the section drafter.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate with a system prompt and a user prompt.
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        params: GenerationParams,
    ) -> GenerationOutcome;

    /// The model identifier this generator targets.
    fn model_name(&self) -> &str;
}

/// Generator that reports itself unavailable on every call. Selected when no
/// model is configured; drafts then carry the low-confidence fallback text.
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(
        &self,
        _system: &str,
        _prompt: &str,
        _params: GenerationParams,
    ) -> GenerationOutcome {
        GenerationOutcome::Unavailable {
            reason: "no generation model configured".to_string(),
        }
    }

    fn model_name(&self) -> &str {
        "disabled"
    }
}

/// Generator provider selection for runtime configuration.
#[derive(Debug, Clone)]
pub enum GeneratorProvider {
    /// Hugging Face router (OpenAI-compatible chat completions).
    HuggingFace {
        /// API token.
        api_key: String,
        /// Endpoint base URL.
        api_base: String,
        /// Model id, e.g. `meta-llama/Meta-Llama-3-8B-Instruct`.
        model: String,
    },
    /// No generation model.
    Disabled,
}

impl GeneratorProvider {
    /// Build the generator for this provider.
    pub fn create(&self) -> Arc<dyn TextGenerator> {
        match self {
            GeneratorProvider::HuggingFace {
                api_key,
                api_base,
                model,
            } => Arc::new(super::huggingface::HuggingFaceClient::new(
                api_key.clone(),
                api_base.clone(),
                model.clone(),
            )),
            GeneratorProvider::Disabled => Arc::new(DisabledGenerator),
        }
    }

    /// Human-readable provider name.
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorProvider::HuggingFace { .. } => "HuggingFace",
            GeneratorProvider::Disabled => "Disabled",
        }
    }
}
