//! Culture Collector
//!
//! Gathers culture, careers and review evidence into the company culture
//! bucket.

use super::{evidence_from_hit, MAX_RESULTS};
use crate::graph::Stage;
use crate::state::{ResearchState, Topic};
use crate::tools::search::{EvidenceSearch, SearchCategory};
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Culture and careers evidence collector.
pub struct CultureCareersCollector {
    search: Arc<dyn EvidenceSearch>,
}

impl CultureCareersCollector {
    /// Create the collector over the given search boundary.
    pub fn new(search: Arc<dyn EvidenceSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl Stage for CultureCareersCollector {
    fn name(&self) -> &'static str {
        "culture_careers"
    }

    async fn run(&self, mut state: ResearchState) -> Result<ResearchState> {
        let company = state.identity_basics.name.clone();
        if company.is_empty() {
            return Ok(state);
        }

        let hits = self
            .search
            .search(
                &format!("{} culture careers reviews glassdoor", company),
                SearchCategory::General,
                MAX_RESULTS,
            )
            .await;

        for hit in hits {
            if let Some(item) =
                evidence_from_hit(self.search.provider_id(), hit, Topic::CultureCareers)
            {
                state.company_culture_data.push(item);
            }
        }

        Ok(state)
    }
}
