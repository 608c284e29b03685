//! S3-compatible bucket listing.
//!
//! Drives `ListObjectsV2` through its continuation-token loop and exposes the
//! result as a fallible stream of [`StoredObject`]. Works against AWS S3 and
//! S3-compatible services (Backblaze B2, Tigris, MinIO) via a custom endpoint.
//!
//! # Credentials
//!
//! Credentials are provided explicitly via the configuration file.

use crate::error::{ErrorKind, Result};
use crate::models::StoredObject;
use async_stream::try_stream;
use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region, retry::RetryConfig},
    primitives::DateTime,
    types::Object,
};
use exn::{OptionExt, ResultExt};
use futures::Stream;
use std::pin::Pin;
use time::OffsetDateTime;
use tracing::debug;

/// Maximum keys per `ListObjectsV2` page (the S3 hard cap).
const PAGE_SIZE: i32 = 1000;

/// A fallible, lazy stream of listed objects.
///
/// A failed page terminates the stream with an `Err`; a truncated listing is
/// never surfaced as a shorter success.
pub type ObjectStream<'a> = Pin<Box<dyn Stream<Item = Result<StoredObject>> + Send + 'a>>;

/// Client for listing the contents of one S3 bucket.
#[derive(Debug, Clone)]
pub struct BucketLister {
    client: Client,
    bucket: String,
}

impl BucketLister {
    /// Create a new lister for the given bucket.
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region or provider-specific region (e.g. "us-west-004" for Backblaze)
    /// * `endpoint` - Custom endpoint URL for S3-compatible services
    /// * `key_id` - AWS/provider access key ID
    /// * `key_secret` - AWS/provider secret access key
    pub fn new(
        bucket: impl Into<String>,
        region: impl Into<String>,
        endpoint: Option<impl Into<String>>,
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
    ) -> Self {
        let credentials = Credentials::new(key_id, key_secret, None, None, "mediasweep-config");
        let mut config_builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(region.into()))
            // Exponential backoff at the SDK level (1 initial + 3 retries);
            // the run itself never retries a failed page.
            .retry_config(RetryConfig::standard().with_max_attempts(4))
            // Use path-style addressing for better compatibility with
            // S3-compatible services (Backblaze, MinIO, etc.)
            .force_path_style(true);
        if let Some(endpoint_url) = endpoint {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }
        let client = Client::from_conf(config_builder.build());
        Self { client, bucket: bucket.into() }
    }

    /// Name of the bucket this lister is bound to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Stream every object in the bucket, optionally restricted to a key prefix.
    ///
    /// Pages are fetched on demand as the stream is polled; the continuation
    /// token loop is unbounded. The first page that fails aborts the stream.
    pub fn stream<'a>(&'a self, prefix: Option<&'a str>) -> ObjectStream<'a> {
        Box::pin(try_stream! {
            let mut continuation: Option<String> = None;
            let mut page: usize = 0;
            loop {
                page += 1;
                let output = self
                    .client
                    .list_objects_v2()
                    .bucket(&self.bucket)
                    .set_prefix(prefix.map(str::to_string))
                    .max_keys(PAGE_SIZE)
                    .set_continuation_token(continuation.take())
                    .send()
                    .await
                    .or_raise(|| ErrorKind::Listing { bucket: self.bucket.clone(), page })?;
                let contents = output.contents();
                debug!(bucket = %self.bucket, page, entries = contents.len(), "fetched listing page");
                for entry in contents {
                    yield stored_object_from_listing(entry)?;
                }
                match output.next_continuation_token() {
                    Some(token) => continuation = Some(token.to_string()),
                    None => break,
                }
            }
        })
    }
}

/// Convert one `ListObjectsV2` entry into a [`StoredObject`].
fn stored_object_from_listing(entry: &Object) -> Result<StoredObject> {
    let key = entry.key().ok_or_raise(|| ErrorKind::MissingField("key"))?;
    let size = match entry.size() {
        // S3 omits the size for some delete markers; treat as empty.
        None => 0,
        Some(size) => u64::try_from(size)
            .or_raise(|| ErrorKind::BackendError(format!("negative object size for {key}")))?,
    };
    let mut object = StoredObject::new(key, size);
    if let Some(modified) = entry.last_modified() {
        object = object.with_last_modified(parse_datetime(modified)?);
    }
    if let Some(class) = entry.storage_class() {
        object = object.with_storage_class(class.as_str());
    }
    if let Some(etag) = entry.e_tag() {
        object = object.with_etag(etag);
    }
    Ok(object)
}

/// Convert AWS DateTime to OffsetDateTime.
fn parse_datetime(dt: &DateTime) -> Result<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(dt.as_nanos())
        .or_raise(|| ErrorKind::BackendError("S3 datetime out of range".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_entry_with_all_fields() {
        let entry = Object::builder()
            .key("CarImages/car1.jpg")
            .size(2048)
            .last_modified(DateTime::from_secs(1_700_000_000))
            .e_tag("\"d41d8cd98f00b204e9800998ecf8427e\"")
            .storage_class(aws_sdk_s3::types::ObjectStorageClass::Standard)
            .build();
        let object = stored_object_from_listing(&entry).unwrap();
        assert_eq!(object.key, "CarImages/car1.jpg");
        assert_eq!(object.size, 2048);
        assert_eq!(object.storage_class.as_deref(), Some("STANDARD"));
        assert_eq!(object.etag.as_deref(), Some("\"d41d8cd98f00b204e9800998ecf8427e\""));
        assert_eq!(object.last_modified.unwrap().unix_timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_listing_entry_minimal() {
        let entry = Object::builder().key("folder/").size(0).build();
        let object = stored_object_from_listing(&entry).unwrap();
        assert_eq!(object.key, "folder/");
        assert_eq!(object.size, 0);
        assert!(object.last_modified.is_none());
        assert!(object.storage_class.is_none());
        assert!(object.etag.is_none());
    }

    #[test]
    fn test_listing_entry_without_key_is_rejected() {
        let entry = Object::builder().size(10).build();
        assert!(stored_object_from_listing(&entry).is_err());
    }

    #[test]
    fn test_listing_entry_negative_size_is_rejected() {
        let entry = Object::builder().key("a.jpg").size(-1).build();
        assert!(stored_object_from_listing(&entry).is_err());
    }

    #[test]
    fn test_parse_datetime() {
        let parsed = parse_datetime(&DateTime::from_secs(0)).unwrap();
        assert_eq!(parsed, OffsetDateTime::UNIX_EPOCH);
    }
}
