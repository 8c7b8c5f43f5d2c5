use crate::llm::huggingface::{DEFAULT_HF_API_BASE, DEFAULT_HF_MODEL};
use crate::llm::GeneratorProvider;
use crate::tools::aum::AumProvider;
use crate::tools::search::{SearchProvider, DEFAULT_TAVILY_API_BASE};
use crate::types::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub generation: GenerationConfig,
    pub aum: AumConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub provider: String,
    pub tavily_api_key: Option<String>,
    pub tavily_api_base: String,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub hf_api_key: Option<String>,
    pub hf_model_id: String,
    pub hf_api_base: String,
}

#[derive(Debug, Clone)]
pub struct AumConfig {
    pub with_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let tavily_api_key = env::var("TAVILY_API_KEY").ok().filter(|k| !k.is_empty());
        // Without an explicit choice, search follows the Tavily key.
        let default_provider = if tavily_api_key.is_some() {
            "tavily"
        } else {
            "disabled"
        };
        let provider =
            env::var("SEARCH_PROVIDER").unwrap_or_else(|_| default_provider.to_string());
        if !matches!(provider.as_str(), "tavily" | "duckduckgo" | "disabled") {
            return Err(AppError::Configuration(format!(
                "unknown SEARCH_PROVIDER '{}', expected tavily, duckduckgo or disabled",
                provider
            )));
        }

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|e| AppError::Configuration(format!("invalid PORT: {}", e)))?,
            },
            search: SearchConfig {
                provider,
                tavily_api_key,
                tavily_api_base: env::var("TAVILY_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_TAVILY_API_BASE.to_string()),
            },
            generation: GenerationConfig {
                hf_api_key: env::var("HF_API_KEY").ok().filter(|k| !k.is_empty()),
                hf_model_id: env::var("HF_MODEL_ID")
                    .unwrap_or_else(|_| DEFAULT_HF_MODEL.to_string()),
                hf_api_base: env::var("HF_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_HF_API_BASE.to_string()),
            },
            aum: AumConfig {
                with_api_key: env::var("WITH_API_KEY").ok().filter(|k| !k.is_empty()),
            },
        })
    }

    pub fn search_provider(&self) -> SearchProvider {
        match self.search.provider.as_str() {
            "tavily" => SearchProvider::Tavily {
                api_key: self.search.tavily_api_key.clone().unwrap_or_default(),
                api_base: self.search.tavily_api_base.clone(),
            },
            "duckduckgo" => SearchProvider::DuckDuckGo,
            _ => SearchProvider::Disabled,
        }
    }

    /// Generation always targets Hugging Face; a missing key is reported per
    /// call by the client, not treated as a startup error.
    pub fn generator_provider(&self) -> GeneratorProvider {
        GeneratorProvider::HuggingFace {
            api_key: self.generation.hf_api_key.clone().unwrap_or_default(),
            api_base: self.generation.hf_api_base.clone(),
            model: self.generation.hf_model_id.clone(),
        }
    }

    pub fn aum_provider(&self) -> AumProvider {
        match &self.aum.with_api_key {
            Some(key) => AumProvider::WithIntelligence {
                api_key: key.clone(),
            },
            None => AumProvider::Disabled,
        }
    }
}
