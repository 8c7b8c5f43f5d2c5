//! Quality Gate Stage
//!
//! Final stage of the pipeline. Checks the curated pool for coverage gaps,
//! copies the drafts into their cleaned form and renders the memo markdown.
//! Flags are surfaced in the report, never escalated to run failures.

use super::catalog::SECTION_SPECS;
use crate::graph::Stage;
use crate::state::{DiscrepancyFlag, ResearchState, Severity, Topic};
use crate::types::Result;
use async_trait::async_trait;

/// Coverage checks and report rendering.
pub struct QualityGate;

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Render the memo. Sections follow catalog order regardless of draft map
/// iteration order.
fn render_markdown(state: &ResearchState) -> String {
    let mut lines: Vec<String> = Vec::new();

    let name = non_empty(&state.identity_basics.name, "Unknown Company");
    lines.push(format!("# Company Research Memo: {}\n", name));

    lines.push("## Identity Basics".to_string());
    lines.push(format!(
        "- **Website:** {}",
        non_empty(&state.identity_basics.website, "N/A")
    ));
    lines.push(format!(
        "- **Industry:** {}",
        non_empty(&state.identity_basics.industry, "N/A")
    ));
    lines.push(String::new());

    for spec in SECTION_SPECS {
        if let Some(draft) = state.cleaned_drafts.get(spec.key) {
            lines.push(format!("## {}", draft.title));
            lines.push(draft.text.trim().to_string());
            lines.push(String::new());
        }
    }

    if !state.discrepancy_flags.is_empty() {
        lines.push("## QA / Discrepancies".to_string());
        for flag in &state.discrepancy_flags {
            lines.push(format!(
                "- **[{}] {} ({})** – {}",
                flag.severity.as_str().to_uppercase(),
                flag.field,
                flag.section_key,
                flag.message
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[async_trait]
impl Stage for QualityGate {
    fn name(&self) -> &'static str {
        "qa_final"
    }

    async fn run(&self, mut state: ResearchState) -> Result<ResearchState> {
        let has_aum_evidence = state
            .curated_evidence
            .iter()
            .any(|ev| ev.topic == Some(Topic::Aum));
        if !has_aum_evidence {
            state.discrepancy_flags.push(DiscrepancyFlag {
                section_key: "financial_capacity".to_string(),
                field: "aum".to_string(),
                message: "No strong AUM evidence found.".to_string(),
                severity: Severity::Warning,
                sources: Vec::new(),
            });
        }

        state.cleaned_drafts = state.drafts.clone();
        state.final_report_markdown = Some(render_markdown(&state));

        Ok(state)
    }
}
