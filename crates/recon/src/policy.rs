//! The inclusion policy: an ordered, short-circuiting rule pipeline.
//!
//! Every retained object has passed all four stages; every dropped object
//! carries the reason from the first stage that rejected it. The decision is
//! computed before any aggregation, so counters are only ever mutated for a
//! final verdict (no transient over-count followed by a decrement).

use crate::classify::Classification;
use crate::refset::ReferenceSet;
use crate::taxonomy::{MediaCategory, PathRole, Taxonomy};
use derive_more::Display;
use mediasweep_storage::StoredObject;
use tracing::trace;

/// Why an object was dropped, named after the rule that rejected it.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Zero-byte key ending in `/`: a placeholder for an empty "directory".
    #[display("folder marker")]
    FolderMarker,
    /// Base identity not present in the reference set.
    #[display("not referenced by the database")]
    Unreferenced,
    /// Thumbnail outside the allow-listed prefix.
    #[display("thumbnail outside allowed scope")]
    ThumbnailScope,
    /// Documents never retain thumbnails.
    #[display("document thumbnail")]
    DocumentThumbnail,
    /// Document snapshot dropped by the run-level exclusion flag.
    #[display("document snapshot excluded by flag")]
    DocumentSnapshot,
}

/// Outcome of the inclusion pipeline for one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Retain,
    Drop(DropReason),
}

impl Verdict {
    pub fn is_retained(&self) -> bool {
        matches!(self, Self::Retain)
    }
}

/// The layered domain rules deciding retain/drop per object.
///
/// Borrows the run-scoped taxonomy and reference set; the reference set must
/// be fully built before the first evaluation.
#[derive(Debug, Clone, Copy)]
pub struct InclusionPolicy<'a> {
    taxonomy: &'a Taxonomy,
    references: &'a ReferenceSet,
    exclude_document_snapshots: bool,
}

impl<'a> InclusionPolicy<'a> {
    pub fn new(
        taxonomy: &'a Taxonomy,
        references: &'a ReferenceSet,
        exclude_document_snapshots: bool,
    ) -> Self {
        Self { taxonomy, references, exclude_document_snapshots }
    }

    /// Evaluate the rule pipeline; the first rejecting stage wins.
    pub fn evaluate(&self, object: &StoredObject, classification: &Classification) -> Verdict {
        let verdict = self.evaluate_stages(object, classification);
        if let Verdict::Drop(reason) = verdict {
            trace!(key = %object.key, %reason, "object dropped");
        }
        verdict
    }

    fn evaluate_stages(&self, object: &StoredObject, classification: &Classification) -> Verdict {
        // Stage 1: storage placeholder for an empty "directory".
        if object.size == 0 && object.key.ends_with('/') {
            return Verdict::Drop(DropReason::FolderMarker);
        }
        // Stage 2: reference match. Applies uniformly to derived files,
        // which share their original's base identity by construction.
        if !self.references.contains(&classification.base_identity) {
            return Verdict::Drop(DropReason::Unreferenced);
        }
        // Stage 3: thumbnails only survive under the designated prefix,
        // referenced or not.
        if classification.role == PathRole::Thumbnail
            && !object.key.starts_with(&self.taxonomy.thumbnail_scope)
        {
            return Verdict::Drop(DropReason::ThumbnailScope);
        }
        // Stage 4: document-specific rules.
        if classification.category == MediaCategory::Documents {
            if classification.role == PathRole::Thumbnail {
                return Verdict::Drop(DropReason::DocumentThumbnail);
            }
            if classification.role == PathRole::Snapshot && self.exclude_document_snapshots {
                return Verdict::Drop(DropReason::DocumentSnapshot);
            }
        }
        Verdict::Retain
    }
}
