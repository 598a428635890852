//! Two-level gender / age-bracket filter tree.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::domain::gender::GenderSummary;
use crate::domain::selection::Selection;
use crate::domain::types::AGE_RANGES;

/// A selectable age bracket under an open gender node.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AgeLeaf {
    pub gender: String,
    pub low: u32,
    pub high: u32,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct GenderNode {
    pub gender: String,
    pub count: u64,
    pub count_label: String,
    pub open: bool,
    /// The current selection belongs to this gender.
    pub highlighted: bool,
    /// Empty while the node is closed.
    pub leaves: Vec<AgeLeaf>,
}

/// Flips the open state of one gender node, leaving the others untouched.
pub fn toggle(expanded: &BTreeSet<String>, gender: &str) -> BTreeSet<String> {
    let mut next = expanded.clone();
    if !next.remove(gender) {
        next.insert(gender.to_string());
    }
    next
}

/// Builds one node per distinct gender in backend order.
pub fn build_filter_tree(
    genders: &[GenderSummary],
    expanded: &BTreeSet<String>,
    selection: Option<&Selection>,
) -> Vec<GenderNode> {
    let mut seen = HashSet::new();

    genders
        .iter()
        .filter(|summary| seen.insert(summary.gender.as_str()))
        .map(|summary| {
            let open = expanded.contains(&summary.gender);
            let leaves = if open {
                AGE_RANGES
                    .iter()
                    .map(|&range| AgeLeaf {
                        gender: summary.gender.clone(),
                        low: range.low(),
                        high: range.high(),
                        label: format!("Age {}", range.label()),
                        active: selection.is_some_and(|s| s.matches(&summary.gender, range)),
                    })
                    .collect()
            } else {
                Vec::new()
            };

            GenderNode {
                gender: summary.gender.clone(),
                count: summary.count,
                count_label: format!("{} Records", summary.count),
                open,
                highlighted: selection.is_some_and(|s| s.gender.as_str() == summary.gender),
                leaves,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genders() -> Vec<GenderSummary> {
        vec![GenderSummary::new("Male", 2), GenderSummary::new("Female", 3)]
    }

    fn active_leaves(nodes: &[GenderNode]) -> Vec<(String, u32, u32)> {
        nodes
            .iter()
            .flat_map(|node| node.leaves.iter())
            .filter(|leaf| leaf.active)
            .map(|leaf| (leaf.gender.clone(), leaf.low, leaf.high))
            .collect()
    }

    #[test]
    fn empty_summary_yields_no_nodes() {
        let nodes = build_filter_tree(&[], &BTreeSet::new(), None);
        assert!(nodes.is_empty());
    }

    #[test]
    fn nodes_start_closed_without_leaves() {
        let nodes = build_filter_tree(&genders(), &BTreeSet::new(), None);

        assert_eq!(nodes.len(), 2);
        assert!(nodes.iter().all(|n| !n.open && n.leaves.is_empty()));
        assert_eq!(nodes[0].count_label, "2 Records");
    }

    #[test]
    fn nodes_toggle_independently() {
        let expanded = toggle(&BTreeSet::new(), "Male");
        let expanded = toggle(&expanded, "Female");
        let nodes = build_filter_tree(&genders(), &expanded, None);
        assert!(nodes.iter().all(|n| n.open && n.leaves.len() == 3));

        let expanded = toggle(&expanded, "Male");
        let nodes = build_filter_tree(&genders(), &expanded, None);
        assert!(!nodes[0].open);
        assert!(nodes[1].open);
    }

    #[test]
    fn only_the_selected_leaf_is_active() {
        let expanded = toggle(&toggle(&BTreeSet::new(), "Male"), "Female");
        let selection = Selection::parse("Female", 30, 60).unwrap();

        let nodes = build_filter_tree(&genders(), &expanded, Some(&selection));

        assert_eq!(active_leaves(&nodes), vec![("Female".to_string(), 30, 60)]);
        assert!(!nodes[0].highlighted);
        assert!(nodes[1].highlighted);
    }

    #[test]
    fn duplicate_genders_collapse_into_one_node() {
        let genders = vec![GenderSummary::new("Male", 2), GenderSummary::new("Male", 5)];
        let expanded = toggle(&BTreeSet::new(), "Male");
        let selection = Selection::parse("Male", 10, 30).unwrap();

        let nodes = build_filter_tree(&genders, &expanded, Some(&selection));

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].count, 2);
        assert_eq!(active_leaves(&nodes).len(), 1);
    }

    #[test]
    fn padded_gender_leaf_selects_its_own_node() {
        let genders = vec![GenderSummary::new("Male ", 2)];
        let expanded = toggle(&BTreeSet::new(), "Male ");
        let leaf = build_filter_tree(&genders, &expanded, None)[0].leaves[0].clone();

        let selection = Selection::parse(&leaf.gender, leaf.low, leaf.high).unwrap();
        let nodes = build_filter_tree(&genders, &expanded, Some(&selection));

        assert_eq!(selection.gender.as_str(), "Male ");
        assert_eq!(active_leaves(&nodes), vec![("Male ".to_string(), 10, 30)]);
        assert!(nodes[0].highlighted);
    }

    #[test]
    fn genders_differing_in_whitespace_stay_separate() {
        let genders = vec![GenderSummary::new("Male", 2), GenderSummary::new("Male ", 1)];
        let expanded = toggle(&toggle(&BTreeSet::new(), "Male"), "Male ");
        let selection = Selection::parse("Male ", 30, 60).unwrap();

        let nodes = build_filter_tree(&genders, &expanded, Some(&selection));

        assert_eq!(nodes.len(), 2);
        assert_eq!(active_leaves(&nodes), vec![("Male ".to_string(), 30, 60)]);
        assert!(!nodes[0].highlighted);
        assert!(nodes[1].highlighted);
    }
}
