//! The two reference queries.
//!
//! Both columns are nullable; null handling (and identity derivation) is the
//! core's concern, so rows are returned as they come. Either query failing
//! is terminal for the run.

use crate::db::Database;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use tracing::instrument;

/// Fetch every `medias.url` value, nulls included.
#[instrument(skip_all)]
pub async fn media_urls(db: &Database) -> Result<Vec<Option<String>>> {
    sqlx::query_scalar("SELECT url FROM medias")
        .fetch_all(db.pool())
        .await
        .or_raise(|| ErrorKind::Query("medias.url"))
}

/// Fetch every `users.picture` value, nulls included.
#[instrument(skip_all)]
pub async fn user_pictures(db: &Database) -> Result<Vec<Option<String>>> {
    sqlx::query_scalar("SELECT picture FROM users")
        .fetch_all(db.pool())
        .await
        .or_raise(|| ErrorKind::Query("users.picture"))
}
