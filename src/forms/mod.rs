//! Admin and public form payloads.
//!
//! Forms deserialize from JSON request bodies with raw types, validate with
//! `validator`, then convert into domain payloads via `TryFrom`. The store
//! accepts any shape at write time, so this boundary is where malformed data
//! gets stopped.

pub mod categories;
pub mod contact;
pub mod editorial;
pub mod locations;
pub mod products;
pub mod recipes;
