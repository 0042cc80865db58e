//! Subset selection over manifest rows.

use std::collections::{BTreeMap, BTreeSet};

use crate::manifest::ManifestRow;
use crate::variants;

/// Rows whose `set_id` is in `requested`, in manifest order.
///
/// Rows of other subsets are dropped silently; requesting ids the manifest
/// does not contain is not an error.
pub fn select_rows(rows: &[ManifestRow], requested: &BTreeSet<u32>) -> Vec<ManifestRow> {
    rows.iter()
        .filter(|row| requested.contains(&row.set_id))
        .cloned()
        .collect()
}

/// Requested ids with no row in the manifest.
pub fn absent_sets(rows: &[ManifestRow], requested: &BTreeSet<u32>) -> Vec<u32> {
    let present: BTreeSet<u32> = rows.iter().map(|row| row.set_id).collect();
    requested.difference(&present).copied().collect()
}

/// Per-subset counts, for listing what a manifest offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSummary {
    pub set_id: u32,
    pub rows: usize,
    /// Number of image files a download of this subset fetches.
    pub files: usize,
}

/// Summarizes every subset in the manifest, ordered by id.
pub fn summarize_sets(rows: &[ManifestRow]) -> Vec<SetSummary> {
    let mut by_set: BTreeMap<u32, SetSummary> = BTreeMap::new();
    for row in rows {
        let entry = by_set.entry(row.set_id).or_insert(SetSummary {
            set_id: row.set_id,
            rows: 0,
            files: 0,
        });
        entry.rows += 1;
        entry.files += variants::variants_for_role(&row.role).len();
    }
    by_set.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(set_id: u32, role: &str, scene: &str) -> ManifestRow {
        ManifestRow {
            set_id,
            role: role.to_string(),
            scene_category: scene.to_string(),
            similarity_category: "A".to_string(),
        }
    }

    fn sample() -> Vec<ManifestRow> {
        vec![
            row(2, "Target", "a"),
            row(1, "lure", "b"),
            row(3, "Foil", "c"),
            row(2, "Lure", "d"),
            row(1, "Target", "e"),
        ]
    }

    #[test]
    fn keeps_requested_rows_in_source_order() {
        let requested = BTreeSet::from([1, 2]);
        let selected = select_rows(&sample(), &requested);
        let scenes: Vec<&str> = selected.iter().map(|r| r.scene_category.as_str()).collect();
        assert_eq!(scenes, vec!["a", "b", "d", "e"]);
    }

    #[test]
    fn unknown_ids_select_nothing() {
        let requested = BTreeSet::from([9]);
        assert!(select_rows(&sample(), &requested).is_empty());
        assert_eq!(absent_sets(&sample(), &requested), vec![9]);
    }

    #[test]
    fn empty_request_selects_nothing() {
        assert!(select_rows(&sample(), &BTreeSet::new()).is_empty());
    }

    #[test]
    fn absent_sets_reports_only_missing() {
        let requested = BTreeSet::from([1, 4, 3, 7]);
        assert_eq!(absent_sets(&sample(), &requested), vec![4, 7]);
    }

    #[test]
    fn summary_counts_rows_and_files() {
        let summary = summarize_sets(&sample());
        assert_eq!(
            summary,
            vec![
                SetSummary { set_id: 1, rows: 2, files: 3 },
                SetSummary { set_id: 2, rows: 2, files: 3 },
                SetSummary { set_id: 3, rows: 1, files: 1 },
            ]
        );
    }
}
