//! Mock implementations for testing.
//!
//! Provider mocks shared across integration test files: a search backend
//! answering selected queries with canned hits, a manager-AUM source and a
//! text generator. Each records what it was asked so tests can assert on
//! the calls the pipeline made.

use async_trait::async_trait;
use memograph::llm::{GenerationOutcome, GenerationParams, TextGenerator};
use memograph::tools::aum::ManagerAumSource;
use memograph::tools::search::{EvidenceSearch, SearchCategory, SearchHit};
use std::sync::{Arc, Mutex};

/// Build a hit with just a URL and extracted content.
pub fn hit(url: &str, content: &str) -> SearchHit {
    SearchHit {
        url: Some(url.to_string()),
        content: Some(content.to_string()),
        raw_content: None,
        published_date: None,
        score: None,
    }
}

/// Build a hit carrying a publication date and relevance score.
pub fn dated_hit(url: &str, content: &str, published: &str, score: f32) -> SearchHit {
    SearchHit {
        url: Some(url.to_string()),
        content: Some(content.to_string()),
        raw_content: None,
        published_date: Some(published.to_string()),
        score: Some(score),
    }
}

/// Search mock answering queries by substring match.
///
/// A query returns the hits of the first response whose fragment it
/// contains; unmatched queries return nothing, like a search with no
/// relevant coverage.
pub struct MockSearch {
    responses: Vec<(String, Vec<SearchHit>)>,
    /// Every query issued, with its category, in call order.
    pub calls: Mutex<Vec<(String, SearchCategory)>>,
}

impl MockSearch {
    /// A search that finds nothing.
    pub fn empty() -> Arc<Self> {
        Self::with_responses(Vec::new())
    }

    /// A search answering queries containing each fragment with the paired hits.
    pub fn with_responses(responses: Vec<(&str, Vec<SearchHit>)>) -> Arc<Self> {
        Arc::new(Self {
            responses: responses
                .into_iter()
                .map(|(fragment, hits)| (fragment.to_string(), hits))
                .collect(),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Queries issued so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(query, _)| query.clone())
            .collect()
    }
}

#[async_trait]
impl EvidenceSearch for MockSearch {
    async fn search(
        &self,
        query: &str,
        category: SearchCategory,
        _max_results: usize,
    ) -> Vec<SearchHit> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), category));
        self.responses
            .iter()
            .find(|(fragment, _)| query.contains(fragment.as_str()))
            .map(|(_, hits)| hits.clone())
            .unwrap_or_default()
    }

    fn provider_id(&self) -> &str {
        "mock"
    }
}

/// Manager-AUM mock returning fixed records and recording requested ids.
pub struct MockAumSource {
    records: Vec<serde_json::Value>,
    /// Manager ids looked up so far.
    pub calls: Mutex<Vec<i64>>,
}

impl MockAumSource {
    /// A source that knows no managers.
    pub fn empty() -> Arc<Self> {
        Self::with_records(Vec::new())
    }

    /// A source returning these records for every manager id.
    pub fn with_records(records: Vec<serde_json::Value>) -> Arc<Self> {
        Arc::new(Self {
            records,
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ManagerAumSource for MockAumSource {
    async fn manager_aums(&self, manager_id: i64) -> Vec<serde_json::Value> {
        self.calls.lock().unwrap().push(manager_id);
        self.records.clone()
    }

    fn provider_id(&self) -> &str {
        "mock_aum"
    }
}

/// Generator mock returning one fixed outcome and recording every prompt.
pub struct MockGenerator {
    outcome: GenerationOutcome,
    /// (system, user) prompt pairs, in call order.
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl MockGenerator {
    /// A generator that always produces this text.
    pub fn with_text(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: GenerationOutcome::Text(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// A generator that is never available.
    pub fn unavailable(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: GenerationOutcome::Unavailable {
                reason: reason.to_string(),
            },
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// User prompts seen so far, in call order.
    pub fn user_prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, user)| user.clone())
            .collect()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        _params: GenerationParams,
    ) -> GenerationOutcome {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        self.outcome.clone()
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
