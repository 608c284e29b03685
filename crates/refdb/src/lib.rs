//! Read-only reference queries for mediasweep.
//!
//! The application database is the record of which media are still "known";
//! this crate fetches the two reference collections (`medias.url` and
//! `users.picture`) the reconciliation core compares the bucket against.

mod db;
pub mod error;
mod references;

pub use crate::db::Database;
pub use crate::references::{media_urls, user_pictures};
