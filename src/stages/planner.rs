//! Planner Stage
//!
//! Normalizes the caller-supplied identity and derives the one-sentence
//! company description every later stage can reuse. Runs before the
//! collector fan-out; identity is frozen once it completes.

use crate::graph::Stage;
use crate::state::ResearchState;
use crate::types::Result;
use async_trait::async_trait;

/// Identity normalization stage. Always succeeds, even on empty input.
pub struct Planner;

#[async_trait]
impl Stage for Planner {
    fn name(&self) -> &'static str {
        "planner"
    }

    async fn run(&self, mut state: ResearchState) -> Result<ResearchState> {
        let identity = &mut state.identity_basics;

        if identity.name.is_empty() {
            identity.name = "Unknown Company".to_string();
        }
        if identity.website.is_empty() {
            identity.website = "N/A".to_string();
        }
        if identity.industry.is_empty() {
            identity.industry = "N/A".to_string();
        }

        state.company_description = Some(format!(
            "{} is a company in the {} sector. Website: {}.",
            identity.name, identity.industry, identity.website
        ));

        Ok(state)
    }
}
