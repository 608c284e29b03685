//! Database connection and pool management.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::instrument;

// Two read-only queries per run; a small pool is plenty.
const MAX_CONNECTIONS: u32 = 2;

/// Connection pool for the application database.
///
/// Strictly read-only: the reference queries are snapshots, never writes,
/// and no transaction spans them (skew between the two is acceptable).
#[derive(Debug, Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Connect to the application database at the given `mysql://` URL.
    #[instrument(skip_all)]
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(url)
            .await
            .or_raise(|| ErrorKind::Connect)?;
        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Close the database connection pool.
    ///
    /// This waits for all connections to be returned to the pool and then
    /// closes them. After calling this, the Database instance should not
    /// be used.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
