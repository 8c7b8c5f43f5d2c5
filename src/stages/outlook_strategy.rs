//! Outlook Collector
//!
//! Gathers strategy and outlook news evidence into the outlook bucket.

use super::{evidence_from_hit, MAX_RESULTS};
use crate::graph::Stage;
use crate::state::{ResearchState, Topic};
use crate::tools::search::{EvidenceSearch, SearchCategory};
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Outlook and strategy evidence collector.
pub struct OutlookStrategyCollector {
    search: Arc<dyn EvidenceSearch>,
}

impl OutlookStrategyCollector {
    /// Create the collector over the given search boundary.
    pub fn new(search: Arc<dyn EvidenceSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl Stage for OutlookStrategyCollector {
    fn name(&self) -> &'static str {
        "outlook_strategy"
    }

    async fn run(&self, mut state: ResearchState) -> Result<ResearchState> {
        let company = state.identity_basics.name.clone();
        if company.is_empty() {
            return Ok(state);
        }

        let hits = self
            .search
            .search(
                &format!("{} strategy outlook expansion", company),
                SearchCategory::News,
                MAX_RESULTS,
            )
            .await;

        for hit in hits {
            if let Some(item) = evidence_from_hit(self.search.provider_id(), hit, Topic::Outlook) {
                state.outlook_data.push(item);
            }
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::testing::StubSearch;
    use crate::tools::search::{SearchCategory, SearchHit};

    #[tokio::test]
    async fn test_empty_name_short_circuits() {
        let search = StubSearch::empty();
        let state = OutlookStrategyCollector::new(search.clone())
            .run(ResearchState::default())
            .await
            .unwrap();

        assert!(state.outlook_data.is_empty());
        assert!(search.queries().is_empty());
    }

    #[tokio::test]
    async fn test_collects_news_into_outlook_bucket() {
        let search = StubSearch::with_hits(vec![SearchHit {
            url: Some("https://news.example/expansion".to_string()),
            content: Some("Acme opens a London office".to_string()),
            published_date: Some("2024-05-02".to_string()),
            ..SearchHit::default()
        }]);
        let seeded = ResearchState::seeded("Acme Capital", None, None, "standard");

        let state = OutlookStrategyCollector::new(search.clone())
            .run(seeded)
            .await
            .unwrap();

        assert_eq!(
            search.queries(),
            vec!["Acme Capital strategy outlook expansion".to_string()]
        );
        let categories: Vec<SearchCategory> =
            search.calls.lock().unwrap().iter().map(|(_, c)| *c).collect();
        assert_eq!(categories, vec![SearchCategory::News]);
        assert_eq!(state.outlook_data.len(), 1);
        assert_eq!(state.outlook_data[0].topic, Some(Topic::Outlook));
        assert_eq!(state.outlook_data[0].as_of.as_deref(), Some("2024-05-02"));
    }
}
