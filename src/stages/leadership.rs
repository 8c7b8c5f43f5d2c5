//! Leadership Collector
//!
//! Gathers partner, executive and founder evidence into the leadership
//! bucket.

use super::{evidence_from_hit, MAX_RESULTS};
use crate::graph::Stage;
use crate::state::{ResearchState, Topic};
use crate::tools::search::{EvidenceSearch, SearchCategory};
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Leadership evidence collector.
pub struct LeadershipCollector {
    search: Arc<dyn EvidenceSearch>,
}

impl LeadershipCollector {
    /// Create the collector over the given search boundary.
    pub fn new(search: Arc<dyn EvidenceSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl Stage for LeadershipCollector {
    fn name(&self) -> &'static str {
        "leadership"
    }

    async fn run(&self, mut state: ResearchState) -> Result<ResearchState> {
        let company = state.identity_basics.name.clone();
        if company.is_empty() {
            return Ok(state);
        }

        let hits = self
            .search
            .search(
                &format!("{} leadership partners founders", company),
                SearchCategory::General,
                MAX_RESULTS,
            )
            .await;

        for hit in hits {
            if let Some(item) = evidence_from_hit(self.search.provider_id(), hit, Topic::Leadership)
            {
                state.leadership_data.push(item);
            }
        }

        Ok(state)
    }
}
