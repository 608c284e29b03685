//! Storage models.

use time::OffsetDateTime;

/// Metadata for a single physical object in the bucket.
///
/// Produced by the listing operation, one per object; keys are unique within
/// a listing. The reconciliation core never reads object contents, only this
/// metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Full object key, relative to the bucket root.
    pub key: String,
    /// Object size in bytes.
    pub size: u64,
    /// Last modified timestamp, if the backend reported one.
    pub last_modified: Option<OffsetDateTime>,
    /// Storage class as reported by the backend (e.g. `STANDARD`).
    pub storage_class: Option<String>,
    /// ETag as reported by the backend, quotes and all.
    pub etag: Option<String>,
}

impl StoredObject {
    /// Create a new StoredObject with only the fields every backend reports.
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
            last_modified: None,
            storage_class: None,
            etag: None,
        }
    }

    pub fn with_last_modified(mut self, modified: OffsetDateTime) -> Self {
        self.last_modified = Some(modified);
        self
    }

    pub fn with_storage_class(mut self, class: impl Into<String>) -> Self {
        self.storage_class = Some(class.into());
        self
    }

    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }
}
