//! Research State
//!
//! The aggregate state threaded through one memo run: identity basics, the
//! per-topic evidence buckets, the curated pool, section drafts, discrepancy
//! flags and the rendered report. One run owns its state exclusively.

/// Merge functions applied when concurrent branches rejoin.
pub mod merge;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Known identity fields plus an open extension bag for anything else a
/// caller or stage wants to attach (tickers, LEIs, ratings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IdentityBasics {
    /// Company display name. Normalized by the planner, frozen after it.
    #[serde(default)]
    pub name: String,
    /// Company website, "N/A" when unknown.
    #[serde(default)]
    pub website: String,
    /// Industry label, "N/A" when unknown.
    #[serde(default)]
    pub industry: String,
    /// Open extension keys merged across stages.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Topic tags carried by evidence items and referenced by the section catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Company overview material.
    Fundamentals,
    /// Market positioning as tagged by the fundamentals collector.
    MarketPositioning,
    /// Positioning as referenced by the section catalog.
    Positioning,
    /// Market significance material.
    MarketSignificance,
    /// Partners and executives.
    Leadership,
    /// Founder background.
    Founders,
    /// Assets under management.
    Aum,
    /// How the company came to be.
    FoundingStory,
    /// Business outlook and strategy news.
    Outlook,
    /// Stated ambitions.
    Aspiration,
    /// Forward-looking goals.
    FutureGoals,
    /// Career development material.
    CareerGrowth,
    /// Culture as referenced by the section catalog.
    CompanyCulture,
    /// Culture and careers as tagged by its collector.
    CultureCareers,
}

impl Topic {
    /// Wire/prompt representation of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Fundamentals => "fundamentals",
            Topic::MarketPositioning => "market_positioning",
            Topic::Positioning => "positioning",
            Topic::MarketSignificance => "market_significance",
            Topic::Leadership => "leadership",
            Topic::Founders => "founders",
            Topic::Aum => "aum",
            Topic::FoundingStory => "founding_story",
            Topic::Outlook => "outlook",
            Topic::Aspiration => "aspiration",
            Topic::FutureGoals => "future_goals",
            Topic::CareerGrowth => "career_growth",
            Topic::CompanyCulture => "company_culture",
            Topic::CultureCareers => "culture_careers",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized fact retrieved from an external source. Immutable once
/// appended to a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EvidenceItem {
    /// Identifier of the provider that produced the item.
    pub source: String,
    /// Origin URL when the provider reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Snippet text. Required non-empty.
    pub snippet: String,
    /// Date-like string the item speaks as of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,
    /// Topic tag assigned by the collector that created the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,
    /// Provider relevance score when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// One drafted report section. Created once per catalog key, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SectionDraft {
    /// Human-readable section title.
    pub title: String,
    /// Catalog key the draft belongs to.
    pub key: String,
    /// Drafted prose.
    pub text: String,
    /// Coarse heuristic in [0, 1], not a calibrated probability.
    #[serde(default)]
    pub confidence: f32,
    /// Known weaknesses of the draft.
    #[serde(default)]
    pub caveats: Vec<String>,
    /// Indices into the curated pool the draft was grounded on.
    #[serde(default)]
    pub evidence_refs: Vec<usize>,
}

/// Severity of a discrepancy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational note.
    Info,
    /// Coverage gap worth surfacing.
    Warning,
    /// Hard data-quality problem.
    Error,
}

impl Severity {
    /// Lowercase label, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A detected evidence-coverage gap. Non-fatal; surfaced in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiscrepancyFlag {
    /// Catalog key of the affected section.
    pub section_key: String,
    /// The field or claim the flag is about.
    pub field: String,
    /// Human-readable description of the gap.
    pub message: String,
    /// How serious the gap is.
    pub severity: Severity,
    /// Identifiers of sources that informed the flag.
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Everything one memo run carries between stages.
///
/// Buckets are append-only and each collector writes only its own, so the
/// parallel collector wave never contends on a bucket. The merge contract in
/// [`merge`] covers the rejoin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchState {
    // -------- Identity / grounding --------
    /// Subject identity. Enriched once by the planner, read-only after.
    pub identity_basics: IdentityBasics,
    /// How detailed the memo should be.
    pub memo_depth: String,
    /// One-sentence description derived by the planner.
    pub company_description: Option<String>,
    /// External identifiers (manager ids, tickers) keyed by scheme.
    pub external_ids: HashMap<String, serde_json::Value>,

    // -------- Topic evidence (raw) --------
    /// Company overview evidence.
    pub fundamentals_data: Vec<EvidenceItem>,
    /// Market positioning evidence.
    pub positioning_data: Vec<EvidenceItem>,
    /// Partner and executive evidence.
    pub leadership_data: Vec<EvidenceItem>,
    /// Founder background evidence.
    pub founders_data: Vec<EvidenceItem>,
    /// Assets-under-management evidence.
    pub aum_data: Vec<EvidenceItem>,
    /// Founding story evidence.
    pub founding_story_data: Vec<EvidenceItem>,
    /// Outlook and strategy evidence.
    pub outlook_data: Vec<EvidenceItem>,
    /// Aspiration evidence.
    pub aspiration_data: Vec<EvidenceItem>,
    /// Future goals evidence.
    pub future_goals_data: Vec<EvidenceItem>,
    /// Career growth evidence.
    pub career_growth_data: Vec<EvidenceItem>,
    /// Company culture evidence.
    pub company_culture_data: Vec<EvidenceItem>,

    // -------- Curation --------
    /// Deduplicated pool built from the buckets.
    pub curated_evidence: Vec<EvidenceItem>,

    // -------- Drafts / QA / final --------
    /// Section drafts keyed by catalog key.
    pub drafts: HashMap<String, SectionDraft>,
    /// Coverage gaps found by the quality gate.
    pub discrepancy_flags: Vec<DiscrepancyFlag>,
    /// Drafts after the quality gate's cleaning pass.
    pub cleaned_drafts: HashMap<String, SectionDraft>,
    /// The rendered memo.
    pub final_report_markdown: Option<String>,
}

impl Default for ResearchState {
    fn default() -> Self {
        Self {
            identity_basics: IdentityBasics::default(),
            memo_depth: "standard".to_string(),
            company_description: None,
            external_ids: HashMap::new(),
            fundamentals_data: Vec::new(),
            positioning_data: Vec::new(),
            leadership_data: Vec::new(),
            founders_data: Vec::new(),
            aum_data: Vec::new(),
            founding_story_data: Vec::new(),
            outlook_data: Vec::new(),
            aspiration_data: Vec::new(),
            future_goals_data: Vec::new(),
            career_growth_data: Vec::new(),
            company_culture_data: Vec::new(),
            curated_evidence: Vec::new(),
            drafts: HashMap::new(),
            discrepancy_flags: Vec::new(),
            cleaned_drafts: HashMap::new(),
            final_report_markdown: None,
        }
    }
}

impl ResearchState {
    /// Seed a fresh run from caller-provided identity fields.
    pub fn seeded(
        company_name: &str,
        website: Option<&str>,
        industry: Option<&str>,
        memo_depth: &str,
    ) -> Self {
        Self {
            identity_basics: IdentityBasics {
                name: company_name.to_string(),
                website: website.unwrap_or_default().to_string(),
                industry: industry.unwrap_or_default().to_string(),
                extra: HashMap::new(),
            },
            memo_depth: memo_depth.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Topic::MarketPositioning).unwrap(),
            r#""market_positioning""#
        );
        assert_eq!(Topic::CultureCareers.as_str(), "culture_careers");
        let topic: Topic = serde_json::from_str(r#""founding_story""#).unwrap();
        assert_eq!(topic, Topic::FoundingStory);
    }

    #[test]
    fn test_identity_extra_keys_flatten() {
        let identity: IdentityBasics = serde_json::from_str(
            r#"{"name": "Acme", "website": "acme.com", "industry": "N/A", "lei": "529900ACME"}"#,
        )
        .unwrap();
        assert_eq!(identity.name, "Acme");
        assert_eq!(
            identity.extra.get("lei").and_then(|v| v.as_str()),
            Some("529900ACME")
        );

        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["lei"], "529900ACME");
    }

    #[test]
    fn test_default_state_is_empty_standard() {
        let state = ResearchState::default();
        assert_eq!(state.memo_depth, "standard");
        assert!(state.curated_evidence.is_empty());
        assert!(state.drafts.is_empty());
        assert!(state.final_report_markdown.is_none());
    }

    #[test]
    fn test_seeded_state_carries_identity() {
        let state = ResearchState::seeded("Acme Capital", Some("acme.com"), None, "deep");
        assert_eq!(state.identity_basics.name, "Acme Capital");
        assert_eq!(state.identity_basics.website, "acme.com");
        assert_eq!(state.identity_basics.industry, "");
        assert_eq!(state.memo_depth, "deep");
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let mut state = ResearchState::default();
        state.aum_data.push(EvidenceItem {
            source: "tavily".to_string(),
            url: Some("https://x.com/a".to_string()),
            snippet: "Acme manages $2B AUM".to_string(),
            as_of: Some("2024-01-01".to_string()),
            topic: Some(Topic::Aum),
            score: Some(0.92),
        });

        let json = serde_json::to_string(&state).unwrap();
        let back: ResearchState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
