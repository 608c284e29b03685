//! Hierarchical summary statistics.
//!
//! Counters are mutated exactly once per object, after the inclusion verdict
//! is known. A document snapshot dropped by the exclusion flag still shows
//! up in the snapshot sub-total (the count is reported, not hidden), but
//! never in the category or grand totals.

use crate::classify::Classification;
use crate::policy::{DropReason, Verdict};
use crate::taxonomy::{MediaCategory, PathRole};
use mediasweep_storage::StoredObject;
use std::collections::BTreeMap;

/// A running `{count, bytes}` pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub count: u64,
    pub bytes: u64,
}

impl Tally {
    fn add(&mut self, bytes: u64) {
        self.count += 1;
        self.bytes += bytes;
    }
}

/// Per-category counters with extension and role breakdowns.
#[derive(Debug, Default, Clone)]
pub struct CategoryStats {
    pub total: Tally,
    pub by_extension: BTreeMap<String, Tally>,
    /// Populated for categories that track roles (images and documents).
    pub by_role: BTreeMap<PathRole, Tally>,
}

/// Nested counters folded over the scanned listing.
#[derive(Debug, Default, Clone)]
pub struct StatsTree {
    pub categories: BTreeMap<MediaCategory, CategoryStats>,
    pub grand_total: Tally,
}

impl StatsTree {
    /// Fold one evaluated object into the tree.
    ///
    /// Retained objects count everywhere they belong. Of the dropped ones,
    /// only flag-excluded document snapshots leave a trace: their snapshot
    /// sub-total, kept visible alongside the totals they are excluded from.
    pub fn record(&mut self, object: &StoredObject, classification: &Classification, verdict: Verdict) {
        match verdict {
            Verdict::Retain => self.record_retained(object, classification),
            Verdict::Drop(DropReason::DocumentSnapshot) => {
                debug_assert_eq!(classification.category, MediaCategory::Documents);
                self.category(classification.category)
                    .by_role
                    .entry(PathRole::Snapshot)
                    .or_default()
                    .add(object.size);
            },
            Verdict::Drop(_) => {},
        }
    }

    fn record_retained(&mut self, object: &StoredObject, classification: &Classification) {
        let stats = self.category(classification.category);
        stats.total.add(object.size);
        stats.by_extension.entry(classification.extension.clone()).or_default().add(object.size);
        if tracks_roles(classification.category) {
            stats.by_role.entry(classification.role).or_default().add(object.size);
        }
        self.grand_total.add(object.size);
    }

    fn category(&mut self, category: MediaCategory) -> &mut CategoryStats {
        self.categories.entry(category).or_default()
    }
}

/// Only images and documents report a per-role breakdown; roles on other
/// categories are counted in the totals but carry no sub-statistics.
fn tracks_roles(category: MediaCategory) -> bool {
    matches!(category, MediaCategory::Images | MediaCategory::Documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_object;
    use crate::taxonomy::Taxonomy;

    fn fold(entries: &[(&str, u64, Verdict)]) -> StatsTree {
        let taxonomy = Taxonomy::default();
        let mut tree = StatsTree::default();
        for (key, size, verdict) in entries {
            let object = StoredObject::new(*key, *size);
            let classification = classify_object(&taxonomy, key);
            tree.record(&object, &classification, *verdict);
        }
        tree
    }

    #[test]
    fn test_retained_objects_count_everywhere() {
        let tree = fold(&[
            ("CarImages/car1.jpg", 100, Verdict::Retain),
            ("CarImages/thumbnail/car1.jpg", 10, Verdict::Retain),
            ("Clips/intro.mp4", 500, Verdict::Retain),
        ]);
        let images = &tree.categories[&MediaCategory::Images];
        assert_eq!(images.total, Tally { count: 2, bytes: 110 });
        assert_eq!(images.by_extension["jpg"], Tally { count: 2, bytes: 110 });
        assert_eq!(images.by_role[&PathRole::Original], Tally { count: 1, bytes: 100 });
        assert_eq!(images.by_role[&PathRole::Thumbnail], Tally { count: 1, bytes: 10 });
        assert_eq!(tree.grand_total, Tally { count: 3, bytes: 610 });
    }

    #[test]
    fn test_videos_have_no_role_breakdown() {
        let tree = fold(&[("Clips/reduced/intro.mp4", 500, Verdict::Retain)]);
        let videos = &tree.categories[&MediaCategory::Videos];
        assert_eq!(videos.total.count, 1);
        assert!(videos.by_role.is_empty());
    }

    #[test]
    fn test_excluded_snapshot_is_visible_but_not_totalled() {
        let tree = fold(&[
            ("Documents/report.pdf", 100, Verdict::Retain),
            ("Documents/snapshot_report.pdf", 40, Verdict::Drop(DropReason::DocumentSnapshot)),
        ]);
        let documents = &tree.categories[&MediaCategory::Documents];
        // The snapshot sub-total reflects the true count encountered...
        assert_eq!(documents.by_role[&PathRole::Snapshot], Tally { count: 1, bytes: 40 });
        // ...while totals reflect only the retained portion.
        assert_eq!(documents.total, Tally { count: 1, bytes: 100 });
        assert_eq!(tree.grand_total, Tally { count: 1, bytes: 100 });
    }

    #[test]
    fn test_other_drops_leave_no_trace() {
        let tree = fold(&[
            ("CarImages/car1.jpg", 100, Verdict::Retain),
            ("CarImages/car2.jpg", 50, Verdict::Drop(DropReason::Unreferenced)),
            ("folder/", 0, Verdict::Drop(DropReason::FolderMarker)),
        ]);
        assert_eq!(tree.grand_total, Tally { count: 1, bytes: 100 });
        assert_eq!(tree.categories[&MediaCategory::Images].total.count, 1);
    }

    #[test]
    fn test_grand_total_equals_sum_of_categories() {
        let tree = fold(&[
            ("CarImages/car1.jpg", 100, Verdict::Retain),
            ("Clips/intro.mp4", 500, Verdict::Retain),
            ("Documents/report.pdf", 100, Verdict::Retain),
            ("misc/data.bin", 7, Verdict::Retain),
        ]);
        let sum: u64 = tree.categories.values().map(|stats| stats.total.bytes).sum();
        assert_eq!(tree.grand_total.bytes, sum);
    }
}
