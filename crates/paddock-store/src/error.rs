//! Store error type.
//!
//! A query that matches nothing is not an error: list calls return an empty
//! `Vec` and single-row lookups return `None`.

use std::sync::Arc;

use paddock_types::TimestampError;
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The database rejected or failed to run a statement.
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A result column could not be decoded into its record field.
    #[error("failed to scan column `{column}`: {source}")]
    Scan {
        column: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A stored start time cannot be represented as a wire timestamp.
    #[error("advertised start time cannot be converted: {0}")]
    Timestamp(#[from] TimestampError),

    /// Table creation or seeding failed. Every caller of `init` receives the
    /// same shared failure.
    #[error("repository initialisation failed: {0}")]
    Init(Arc<StoreError>),
}
