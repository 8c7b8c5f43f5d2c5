//! Merge Contract
//!
//! Named merge functions the orchestrator applies when concurrent branches
//! rejoin into one state. Mapping fields overlay with the later branch
//! winning on key collision, sequence fields concatenate what each branch
//! appended past the fork point, scalar strings keep the latest non-empty
//! value. Invoked only at join points; sequential stages hand state through
//! untouched.

use super::ResearchState;
use std::collections::HashMap;
use std::hash::Hash;

/// Overlay `branch` onto `base`; on key collision the branch value wins.
pub fn overlay_map<K: Eq + Hash, V>(base: &mut HashMap<K, V>, branch: HashMap<K, V>) {
    base.extend(branch);
}

/// Append the elements `branch` added beyond the shared fork-point prefix.
///
/// Branches start as clones of the fork state and buckets are append-only,
/// so everything past `fork_len` is new to this branch.
pub fn extend_new<T>(base: &mut Vec<T>, branch: Vec<T>, fork_len: usize) {
    base.extend(branch.into_iter().skip(fork_len));
}

/// Keep the latest non-empty value.
pub fn prefer_latest(base: &mut String, branch: String) {
    if !branch.is_empty() {
        *base = branch;
    }
}

/// Keep the latest non-empty value, treating `None` and `Some("")` as empty.
pub fn prefer_latest_opt(base: &mut Option<String>, branch: Option<String>) {
    if branch.as_deref().is_some_and(|s| !s.is_empty()) {
        *base = branch;
    }
}

/// Fold completed branch states into the fork-point state.
///
/// `branches` must be in completion order; later branches win map collisions
/// and scalar updates. Sequence order across branches therefore follows
/// completion order, while staying stable within each branch.
pub fn join_states(fork: &ResearchState, branches: Vec<ResearchState>) -> ResearchState {
    let mut merged = fork.clone();
    for branch in branches {
        merge_branch(&mut merged, fork, branch);
    }
    merged
}

fn merge_branch(merged: &mut ResearchState, fork: &ResearchState, branch: ResearchState) {
    prefer_latest(&mut merged.identity_basics.name, branch.identity_basics.name);
    prefer_latest(
        &mut merged.identity_basics.website,
        branch.identity_basics.website,
    );
    prefer_latest(
        &mut merged.identity_basics.industry,
        branch.identity_basics.industry,
    );
    overlay_map(&mut merged.identity_basics.extra, branch.identity_basics.extra);

    prefer_latest(&mut merged.memo_depth, branch.memo_depth);
    prefer_latest_opt(&mut merged.company_description, branch.company_description);
    overlay_map(&mut merged.external_ids, branch.external_ids);

    extend_new(
        &mut merged.fundamentals_data,
        branch.fundamentals_data,
        fork.fundamentals_data.len(),
    );
    extend_new(
        &mut merged.positioning_data,
        branch.positioning_data,
        fork.positioning_data.len(),
    );
    extend_new(
        &mut merged.leadership_data,
        branch.leadership_data,
        fork.leadership_data.len(),
    );
    extend_new(
        &mut merged.founders_data,
        branch.founders_data,
        fork.founders_data.len(),
    );
    extend_new(&mut merged.aum_data, branch.aum_data, fork.aum_data.len());
    extend_new(
        &mut merged.founding_story_data,
        branch.founding_story_data,
        fork.founding_story_data.len(),
    );
    extend_new(
        &mut merged.outlook_data,
        branch.outlook_data,
        fork.outlook_data.len(),
    );
    extend_new(
        &mut merged.aspiration_data,
        branch.aspiration_data,
        fork.aspiration_data.len(),
    );
    extend_new(
        &mut merged.future_goals_data,
        branch.future_goals_data,
        fork.future_goals_data.len(),
    );
    extend_new(
        &mut merged.career_growth_data,
        branch.career_growth_data,
        fork.career_growth_data.len(),
    );
    extend_new(
        &mut merged.company_culture_data,
        branch.company_culture_data,
        fork.company_culture_data.len(),
    );

    extend_new(
        &mut merged.curated_evidence,
        branch.curated_evidence,
        fork.curated_evidence.len(),
    );

    overlay_map(&mut merged.drafts, branch.drafts);
    extend_new(
        &mut merged.discrepancy_flags,
        branch.discrepancy_flags,
        fork.discrepancy_flags.len(),
    );
    overlay_map(&mut merged.cleaned_drafts, branch.cleaned_drafts);
    prefer_latest_opt(&mut merged.final_report_markdown, branch.final_report_markdown);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EvidenceItem, Topic};

    fn item(snippet: &str, topic: Topic) -> EvidenceItem {
        EvidenceItem {
            source: "test".to_string(),
            url: None,
            snippet: snippet.to_string(),
            as_of: None,
            topic: Some(topic),
            score: None,
        }
    }

    #[test]
    fn test_overlay_map_right_wins() {
        let mut base = HashMap::from([
            ("ticker".to_string(), serde_json::json!("ACME")),
            ("lei".to_string(), serde_json::json!("OLD")),
        ]);
        let branch = HashMap::from([
            ("lei".to_string(), serde_json::json!("NEW")),
            ("cik".to_string(), serde_json::json!("0001")),
        ]);

        overlay_map(&mut base, branch);

        assert_eq!(base["ticker"], serde_json::json!("ACME"));
        assert_eq!(base["lei"], serde_json::json!("NEW"));
        assert_eq!(base["cik"], serde_json::json!("0001"));
    }

    #[test]
    fn test_extend_new_skips_shared_prefix() {
        let mut base = vec![1, 2];
        // Branch cloned [1, 2] at the fork and appended 3 and 4.
        extend_new(&mut base, vec![1, 2, 3, 4], 2);
        assert_eq!(base, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_prefer_latest_ignores_empty() {
        let mut value = "standard".to_string();
        prefer_latest(&mut value, String::new());
        assert_eq!(value, "standard");
        prefer_latest(&mut value, "deep".to_string());
        assert_eq!(value, "deep");

        let mut opt = Some("kept".to_string());
        prefer_latest_opt(&mut opt, None);
        prefer_latest_opt(&mut opt, Some(String::new()));
        assert_eq!(opt.as_deref(), Some("kept"));
        prefer_latest_opt(&mut opt, Some("newer".to_string()));
        assert_eq!(opt.as_deref(), Some("newer"));
    }

    #[test]
    fn test_join_concatenates_disjoint_buckets() {
        let fork = ResearchState::default();

        let mut a = fork.clone();
        a.aum_data.push(item("aum evidence", Topic::Aum));
        let mut b = fork.clone();
        b.leadership_data.push(item("leadership evidence", Topic::Leadership));

        let merged = join_states(&fork, vec![a, b]);

        assert_eq!(merged.aum_data.len(), 1);
        assert_eq!(merged.leadership_data.len(), 1);
        assert_eq!(merged.aum_data[0].snippet, "aum evidence");
    }

    #[test]
    fn test_join_does_not_duplicate_prefork_items() {
        let mut fork = ResearchState::default();
        fork.aum_data.push(item("already there", Topic::Aum));

        let mut a = fork.clone();
        a.aum_data.push(item("from branch a", Topic::Aum));
        let b = fork.clone();

        let merged = join_states(&fork, vec![a, b]);

        assert_eq!(merged.aum_data.len(), 2);
        assert_eq!(merged.aum_data[0].snippet, "already there");
        assert_eq!(merged.aum_data[1].snippet, "from branch a");
    }

    #[test]
    fn test_join_external_ids_distinct_keys_both_survive() {
        let fork = ResearchState::default();

        let mut a = fork.clone();
        a.external_ids
            .insert("with_manager_id".to_string(), serde_json::json!(42));
        let mut b = fork.clone();
        b.external_ids
            .insert("ticker".to_string(), serde_json::json!("ACME"));

        let merged = join_states(&fork, vec![a, b]);

        assert_eq!(merged.external_ids["with_manager_id"], serde_json::json!(42));
        assert_eq!(merged.external_ids["ticker"], serde_json::json!("ACME"));
    }

    #[test]
    fn test_join_external_ids_same_key_last_completion_wins() {
        let fork = ResearchState::default();

        let mut first = fork.clone();
        first
            .external_ids
            .insert("ticker".to_string(), serde_json::json!("FIRST"));
        let mut last = fork.clone();
        last.external_ids
            .insert("ticker".to_string(), serde_json::json!("LAST"));

        let merged = join_states(&fork, vec![first, last]);

        assert_eq!(merged.external_ids["ticker"], serde_json::json!("LAST"));
    }

    #[test]
    fn test_join_keeps_latest_description() {
        let fork = ResearchState::default();

        let mut a = fork.clone();
        a.company_description = Some("first description".to_string());
        let mut b = fork.clone();
        b.company_description = Some("second description".to_string());
        let c = fork.clone();

        // c completes last but wrote nothing, so b's value stays.
        let merged = join_states(&fork, vec![a, b, c]);
        assert_eq!(merged.company_description.as_deref(), Some("second description"));
    }
}
