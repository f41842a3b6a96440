//! Error type shared by every [`DocumentStore`](super::DocumentStore)
//! implementation.

use diesel::r2d2::PoolError;
use thiserror::Error;

/// Errors surfaced by document store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Document payloads must serialize to JSON objects.
    #[error("document payload must be a JSON object")]
    NotAnObject,
    /// The static JSON store rejects all writes.
    #[error("collection {0} is read-only")]
    ReadOnly(&'static str),
    #[error("failed to load static content from {path}: {reason}")]
    StaticData { path: String, reason: String },
    #[error("validation error: {0}")]
    Validation(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
