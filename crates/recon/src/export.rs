//! Flat export records for retained objects.

use crate::classify::Classification;
use crate::error::{ErrorKind, Result};
use crate::format::human_size;
use crate::identity;
use exn::ResultExt;
use mediasweep_storage::StoredObject;
use time::UtcOffset;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Second-precision UTC rendering for the last-modified column.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Storage class reported when the backend omitted one.
const DEFAULT_STORAGE_CLASS: &str = "STANDARD";

/// One flat output record per retained object.
///
/// Exists only transiently for output; the CSV surface writes these fields
/// in [`ExportRow::HEADERS`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub key: String,
    pub filename: String,
    pub extension: String,
    pub category: String,
    pub role: String,
    pub size_bytes: u64,
    pub human_size: String,
    /// `YYYY-MM-DD HH:MM:SS` in UTC; empty when the backend gave no timestamp.
    pub last_modified: String,
    pub storage_class: String,
    /// ETag with the surrounding quote characters stripped.
    pub etag: String,
}

impl ExportRow {
    pub const HEADERS: [&'static str; 10] = [
        "key",
        "filename",
        "extension",
        "category",
        "role",
        "size_bytes",
        "size",
        "last_modified",
        "storage_class",
        "etag",
    ];

    /// Build the export record for a retained object.
    pub fn from_object(object: &StoredObject, classification: &Classification) -> Result<Self> {
        let last_modified = match object.last_modified {
            Some(modified) => modified
                .to_offset(UtcOffset::UTC)
                .format(TIMESTAMP_FORMAT)
                .or_raise(|| ErrorKind::TimestampFormat { key: object.key.clone() })?,
            None => String::new(),
        };
        Ok(Self {
            key: object.key.clone(),
            filename: identity::filename(&object.key).to_string(),
            extension: classification.extension.clone(),
            category: classification.category.to_string(),
            role: classification.role.to_string(),
            size_bytes: object.size,
            human_size: human_size(object.size),
            last_modified,
            storage_class: object
                .storage_class
                .clone()
                .unwrap_or_else(|| DEFAULT_STORAGE_CLASS.to_string()),
            etag: object.etag.as_deref().unwrap_or_default().replace('"', ""),
        })
    }
}
