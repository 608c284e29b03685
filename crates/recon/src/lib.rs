//! Reconciliation and classification core for mediasweep.
//!
//! Answers "of everything physically stored, what is still referenced by the
//! application, and how is it categorized?". The crate is pure: it consumes
//! [`StoredObject`] metadata and reference-set inputs produced elsewhere and
//! never performs I/O of its own.
//!
//! # Pipeline
//!
//! Per object, strictly in order:
//! 1. classification ([`classify_object`]) — category, role, extension and
//!    base identity, independent of the reference set;
//! 2. inclusion ([`InclusionPolicy`]) — the ordered drop rules;
//! 3. aggregation — fold into [`ExportRow`]s or a [`StatsTree`].

pub mod classify;
pub mod error;
pub mod export;
pub mod format;
pub mod identity;
pub mod policy;
pub mod refset;
pub mod stats;
pub mod taxonomy;

pub use crate::classify::{Classification, classify_object};
pub use crate::error::Result;
pub use crate::export::ExportRow;
pub use crate::policy::{DropReason, InclusionPolicy, Verdict};
pub use crate::refset::ReferenceSet;
pub use crate::stats::{StatsTree, Tally};
pub use crate::taxonomy::{MediaCategory, PathRole, Taxonomy};
use mediasweep_storage::StoredObject;
use tracing::instrument;

/// One object's trip through classification and the inclusion pipeline.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub classification: Classification,
    pub verdict: Verdict,
}

/// Run-scoped reconciliation driver.
///
/// Borrows the taxonomy and the fully built reference set; evaluation never
/// mutates either.
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a> {
    taxonomy: &'a Taxonomy,
    policy: InclusionPolicy<'a>,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        taxonomy: &'a Taxonomy,
        references: &'a ReferenceSet,
        exclude_document_snapshots: bool,
    ) -> Self {
        let policy = InclusionPolicy::new(taxonomy, references, exclude_document_snapshots);
        Self { taxonomy, policy }
    }

    /// Classify one object and evaluate its inclusion verdict.
    pub fn evaluate(&self, object: &StoredObject) -> Evaluation {
        let classification = classify_object(self.taxonomy, &object.key);
        let verdict = self.policy.evaluate(object, &classification);
        Evaluation { classification, verdict }
    }

    /// Scan the listing once and produce one export row per retained object.
    ///
    /// An empty listing (or one where every object is dropped) produces an
    /// empty row set; the output surface still writes headers.
    #[instrument(skip_all, fields(rows = tracing::field::Empty))]
    pub fn export_rows<'o>(
        &self,
        objects: impl IntoIterator<Item = &'o StoredObject>,
    ) -> Result<Vec<ExportRow>> {
        let mut rows = Vec::new();
        for object in objects {
            let evaluation = self.evaluate(object);
            if evaluation.verdict.is_retained() {
                rows.push(ExportRow::from_object(object, &evaluation.classification)?);
            }
        }
        tracing::Span::current().record("rows", rows.len());
        Ok(rows)
    }

    /// Scan the listing once and fold every object into summary statistics.
    #[instrument(skip_all)]
    pub fn statistics<'o>(&self, objects: impl IntoIterator<Item = &'o StoredObject>) -> StatsTree {
        let mut tree = StatsTree::default();
        for object in objects {
            let evaluation = self.evaluate(object);
            tree.record(object, &evaluation.classification, evaluation.verdict);
        }
        tree
    }
}
