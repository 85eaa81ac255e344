//! Repository-level error types.

use thiserror::Error;

/// Failures reported by a data store.
///
/// The listing page never distinguishes between these when talking to the
/// reader; the variants exist so operators get useful logs.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
