//! Service layer: business logic between the HTTP routes and the repository.
//!
//! Route handlers stay thin wrappers; repository interactions, error
//! translation and invariant checks happen here.

use thiserror::Error;

pub mod admin;
pub mod categories;
pub mod contact;
pub mod content;

/// Errors surfaced to route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Form(String),
    #[error("invalid value: {0}")]
    TypeConstraint(String),
    #[error("internal error")]
    Internal,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
