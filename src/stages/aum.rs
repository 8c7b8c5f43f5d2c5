//! AUM Collector
//!
//! Gathers assets-under-management evidence from web search and, when the
//! caller supplied a With Intelligence manager id, from the manager-AUM
//! lookup. Both kinds land in the aum bucket under the same tag.

use super::{evidence_from_hit, MAX_RESULTS};
use crate::graph::Stage;
use crate::state::{EvidenceItem, ResearchState, Topic};
use crate::tools::aum::ManagerAumSource;
use crate::tools::search::{EvidenceSearch, SearchCategory};
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// AUM evidence collector.
pub struct AumCollector {
    search: Arc<dyn EvidenceSearch>,
    aum_source: Arc<dyn ManagerAumSource>,
}

impl AumCollector {
    /// Create the collector over the search and manager-AUM boundaries.
    pub fn new(search: Arc<dyn EvidenceSearch>, aum_source: Arc<dyn ManagerAumSource>) -> Self {
        Self { search, aum_source }
    }
}

/// The record's as-of field, `as_of` preferred over `asOf`, null skipped.
fn record_as_of(record: &serde_json::Value) -> Option<String> {
    ["as_of", "asOf"].iter().find_map(|key| {
        record.get(*key).filter(|v| !v.is_null()).map(|v| match v.as_str() {
            Some(s) => s.to_string(),
            None => v.to_string(),
        })
    })
}

#[async_trait]
impl Stage for AumCollector {
    fn name(&self) -> &'static str {
        "aum"
    }

    async fn run(&self, mut state: ResearchState) -> Result<ResearchState> {
        let company = state.identity_basics.name.clone();
        if company.is_empty() {
            return Ok(state);
        }

        // Web-based AUM hints
        let hits = self
            .search
            .search(
                &format!("{} assets under management AUM", company),
                SearchCategory::Finance,
                MAX_RESULTS,
            )
            .await;

        for hit in hits {
            if let Some(item) = evidence_from_hit(self.search.provider_id(), hit, Topic::Aum) {
                state.aum_data.push(item);
            }
        }

        // Manager AUM records when the caller supplied an external id
        let manager_id = state
            .external_ids
            .get("with_manager_id")
            .and_then(|v| v.as_i64());
        if let Some(manager_id) = manager_id {
            let records = self.aum_source.manager_aums(manager_id).await;
            for record in records {
                state.aum_data.push(EvidenceItem {
                    source: self.aum_source.provider_id().to_string(),
                    url: None,
                    snippet: record.to_string(),
                    as_of: record_as_of(&record),
                    topic: Some(Topic::Aum),
                    score: None,
                });
            }
        }

        Ok(state)
    }
}
