//! Core library for the OVE Foods content service.
//!
//! This crate exposes the domain model, the generic document repository with
//! its SQLite and static-JSON backends, the content query facade, the fuzzy
//! search layer, and (with the `server` feature) the forms, services and
//! HTTP routes of the web application.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod search;
#[cfg(feature = "server")]
pub mod services;
