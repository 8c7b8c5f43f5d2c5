//! Fundamentals Collector
//!
//! Gathers overview evidence into the fundamentals bucket and strategy-news
//! evidence into the positioning bucket. Owns both buckets exclusively.

use super::{evidence_from_hit, MAX_RESULTS};
use crate::graph::Stage;
use crate::state::{ResearchState, Topic};
use crate::tools::search::{EvidenceSearch, SearchCategory};
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Overview and positioning evidence collector.
pub struct FundamentalsCollector {
    search: Arc<dyn EvidenceSearch>,
}

impl FundamentalsCollector {
    /// Create the collector over the given search boundary.
    pub fn new(search: Arc<dyn EvidenceSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl Stage for FundamentalsCollector {
    fn name(&self) -> &'static str {
        "fundamentals"
    }

    async fn run(&self, mut state: ResearchState) -> Result<ResearchState> {
        let company = state.identity_basics.name.clone();
        if company.is_empty() {
            return Ok(state);
        }

        let overview_hits = self
            .search
            .search(
                &format!("{} overview asset manager", company),
                SearchCategory::General,
                MAX_RESULTS,
            )
            .await;
        let strategy_hits = self
            .search
            .search(
                &format!("{} strategy outlook expansion", company),
                SearchCategory::News,
                MAX_RESULTS,
            )
            .await;

        for hit in overview_hits {
            if let Some(item) = evidence_from_hit(self.search.provider_id(), hit, Topic::Fundamentals)
            {
                state.fundamentals_data.push(item);
            }
        }

        for hit in strategy_hits {
            if let Some(item) =
                evidence_from_hit(self.search.provider_id(), hit, Topic::MarketPositioning)
            {
                state.positioning_data.push(item);
            }
        }

        Ok(state)
    }
}
