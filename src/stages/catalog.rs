//! Section Catalog
//!
//! The fixed list of memo sections the writer produces, in report order.
//! Each entry names the draft key, the rendered title, and the evidence
//! topics the section draws on.

use crate::state::Topic;

/// One memo section: its draft key, title, and evidence topics.
pub struct SectionSpec {
    /// Key the draft is stored under in `ResearchState::drafts`.
    pub key: &'static str,
    /// Heading rendered into the final memo.
    pub title: &'static str,
    /// Topics whose evidence feeds this section. Empty means any topic.
    pub topics: &'static [Topic],
}

/// All memo sections, in the order they appear in the final report.
pub const SECTION_SPECS: &[SectionSpec] = &[
    SectionSpec {
        key: "overview",
        title: "Short Overview of the Company",
        topics: &[Topic::Fundamentals],
    },
    SectionSpec {
        key: "leadership",
        title: "Current Partners / Executives",
        topics: &[Topic::Leadership, Topic::Founders],
    },
    SectionSpec {
        key: "financial_capacity",
        title: "Financial / Business Capacity (AUM)",
        topics: &[Topic::Aum],
    },
    SectionSpec {
        key: "founding_story",
        title: "Founding Story",
        topics: &[Topic::FoundingStory, Topic::Fundamentals],
    },
    SectionSpec {
        key: "business_outlook",
        title: "Current Business Outlook",
        topics: &[Topic::Outlook, Topic::Aspiration],
    },
    SectionSpec {
        key: "market_significance",
        title: "Significance in the Market",
        topics: &[Topic::MarketSignificance, Topic::Positioning],
    },
    SectionSpec {
        key: "aspiration",
        title: "Aspiration",
        topics: &[Topic::Aspiration],
    },
    SectionSpec {
        key: "future_goals",
        title: "Company Future and Goals",
        topics: &[Topic::FutureGoals, Topic::Outlook],
    },
    SectionSpec {
        key: "career_growth",
        title: "Professional Career Growth Opportunity",
        topics: &[Topic::CareerGrowth],
    },
    SectionSpec {
        key: "culture",
        title: "Company Culture",
        topics: &[Topic::CompanyCulture, Topic::CultureCareers],
    },
];
