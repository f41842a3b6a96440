//! Persistence row models and application configuration.

#[cfg(feature = "server")]
pub mod config;
pub mod document;
