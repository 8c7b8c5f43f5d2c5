//! Evidence Search
//!
//! The evidence-search boundary the topic collectors query. Each collector
//! issues topic-scoped queries here and turns the hits into evidence items.
//! Implementations never surface errors: an unreachable or unconfigured
//! provider yields an empty result set and a warning log.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Default Tavily endpoint. Overridable so tests can point at a local server.
pub const DEFAULT_TAVILY_API_BASE: &str = "https://api.tavily.com";

/// Search vertical a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    /// General-purpose web search.
    General,
    /// Finance-focused sources.
    Finance,
    /// News coverage.
    News,
}

impl SearchCategory {
    /// Wire value of the provider's topic parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchCategory::General => "general",
            SearchCategory::Finance => "finance",
            SearchCategory::News => "news",
        }
    }
}

/// One raw hit as reported by a search provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHit {
    /// Result URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Extracted page content.
    #[serde(default)]
    pub content: Option<String>,
    /// Full raw page text, when the provider includes it.
    #[serde(default)]
    pub raw_content: Option<String>,
    /// Publication date, mostly present on news results.
    #[serde(default)]
    pub published_date: Option<String>,
    /// Provider relevance score.
    #[serde(default)]
    pub score: Option<f32>,
}

/// Web evidence search capability.
///
/// `search` never fails; provider errors are absorbed into an empty vec so
/// collectors stay oblivious to upstream health.
#[async_trait]
pub trait EvidenceSearch: Send + Sync {
    /// Run one query against the provider and return its hits.
    async fn search(&self, query: &str, category: SearchCategory, max_results: usize)
        -> Vec<SearchHit>;

    /// Identifier recorded as the `source` of evidence built from these hits.
    fn provider_id(&self) -> &str;
}

/// Tavily search client.
pub struct TavilyClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

impl TavilyClient {
    /// Create a client for the given key and endpoint base.
    pub fn new(api_key: String, api_base: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("reqwest client should build");

        Self {
            client,
            api_key,
            api_base,
        }
    }
}

#[async_trait]
impl EvidenceSearch for TavilyClient {
    async fn search(
        &self,
        query: &str,
        category: SearchCategory,
        max_results: usize,
    ) -> Vec<SearchHit> {
        if self.api_key.is_empty() {
            tracing::warn!("TAVILY_API_KEY not set, skipping search for '{}'", query);
            return Vec::new();
        }

        let url = format!("{}/search", self.api_base.trim_end_matches('/'));
        let payload = json!({
            "query": query,
            "topic": category.as_str(),
            "max_results": max_results,
            "search_depth": "advanced",
            "include_raw_content": "text",
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => match resp.json::<TavilyResponse>().await {
                Ok(body) => body.results,
                Err(e) => {
                    tracing::warn!("Tavily returned an unparseable body for '{}': {}", query, e);
                    Vec::new()
                }
            },
            Ok(resp) => {
                tracing::warn!("Tavily returned {} for '{}'", resp.status(), query);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Tavily request failed for '{}': {}", query, e);
                Vec::new()
            }
        }
    }

    fn provider_id(&self) -> &str {
        "tavily"
    }
}

/// DuckDuckGo search via daedra. No API key required; results carry no
/// publication dates or raw page text.
pub struct DuckDuckGoSearch;

#[async_trait]
impl EvidenceSearch for DuckDuckGoSearch {
    async fn search(
        &self,
        query: &str,
        _category: SearchCategory,
        max_results: usize,
    ) -> Vec<SearchHit> {
        let search_args = daedra::SearchArgs {
            query: query.to_string(),
            options: Some(daedra::SearchOptions {
                num_results: max_results,
                ..Default::default()
            }),
        };

        match daedra::tools::search::perform_search(&search_args).await {
            Ok(response) => response
                .data
                .iter()
                .map(|r| SearchHit {
                    url: Some(r.url.clone()),
                    content: Some(r.description.clone()),
                    raw_content: None,
                    published_date: None,
                    score: None,
                })
                .collect(),
            Err(e) => {
                tracing::warn!("DuckDuckGo search failed for '{}': {}", query, e);
                Vec::new()
            }
        }
    }

    fn provider_id(&self) -> &str {
        "duckduckgo"
    }
}

/// Search backend that always returns nothing. Selected when no provider is
/// configured; the pipeline still produces a memo, every section falling back
/// to its no-evidence path.
pub struct DisabledSearch;

#[async_trait]
impl EvidenceSearch for DisabledSearch {
    async fn search(
        &self,
        _query: &str,
        _category: SearchCategory,
        _max_results: usize,
    ) -> Vec<SearchHit> {
        Vec::new()
    }

    fn provider_id(&self) -> &str {
        "disabled"
    }
}

/// Search provider selection for runtime configuration.
#[derive(Debug, Clone)]
pub enum SearchProvider {
    /// Tavily API.
    Tavily {
        /// API key, bearer-authenticated.
        api_key: String,
        /// Endpoint base URL.
        api_base: String,
    },
    /// DuckDuckGo, keyless.
    DuckDuckGo,
    /// No search backend.
    Disabled,
}

impl SearchProvider {
    /// Build the client for this provider.
    pub fn create(&self) -> Arc<dyn EvidenceSearch> {
        match self {
            SearchProvider::Tavily { api_key, api_base } => {
                Arc::new(TavilyClient::new(api_key.clone(), api_base.clone()))
            }
            SearchProvider::DuckDuckGo => Arc::new(DuckDuckGoSearch),
            SearchProvider::Disabled => Arc::new(DisabledSearch),
        }
    }

    /// Human-readable provider name.
    pub fn name(&self) -> &'static str {
        match self {
            SearchProvider::Tavily { .. } => "Tavily",
            SearchProvider::DuckDuckGo => "DuckDuckGo",
            SearchProvider::Disabled => "Disabled",
        }
    }
}
