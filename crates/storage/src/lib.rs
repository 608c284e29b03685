//! Bucket listing for mediasweep.
//!
//! This crate wraps the paginated `ListObjectsV2` transport behind a single
//! logical call: a lazy, fallible stream of [`StoredObject`] metadata. It is
//! strictly read-only; nothing here mutates the bucket.

pub mod error;
mod lister;
mod models;

pub use crate::lister::{BucketLister, ObjectStream};
pub use crate::models::StoredObject;
