//! Strongly-typed value objects used by domain entities.
//!
//! Documents are schemaless at rest, so these wrappers deserialize
//! transparently; validation happens when a value is constructed at the form
//! boundary, not when a stored document is read back.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A slug contained characters outside `[a-z0-9-]`.
    #[error("slug may only contain lowercase letters, digits and dashes: {0}")]
    InvalidSlug(String),
    /// A numeric value required to be positive was zero.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate newtypes wrapping trimmed, non-empty strings.
macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

non_empty_string_newtype!(
    DocumentId,
    "Store-assigned document identifier, distinct from the URL slug.",
    "document id"
);
non_empty_string_newtype!(
    NonEmptyString,
    "Generic non-empty, trimmed string value.",
    "value"
);

/// URL-safe unique identifier for an entity, distinct from its document id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Constructs a slug, rejecting anything outside `[a-z0-9-]`.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "slug")?;
        if trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            Ok(Self(trimmed))
        } else {
            Err(TypeConstraintError::InvalidSlug(trimmed))
        }
    }

    /// Borrow the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for Slug {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Slug {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Number of servings a recipe yields. Must be positive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ServingCount(u32);

impl ServingCount {
    /// Constructs a serving count greater than zero.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveNumber("servings"))
        }
    }

    /// Returns the raw count.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for ServingCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for ServingCount {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ServingCount> for u32 {
    fn from(value: ServingCount) -> Self {
        value.0
    }
}

/// Duration in whole minutes (preparation and cooking times).
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct Minutes(u32);

impl Minutes {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for Minutes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.0)
    }
}

impl From<u32> for Minutes {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Recipe difficulty grade.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty grade, in ascending order, for building filter UI.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "difficulty: {other}"
            ))),
        }
    }
}

/// Kind of company location.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Headquarters,
    Factory,
    Office,
}

impl LocationKind {
    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Headquarters => "headquarters",
            Self::Factory => "factory",
            Self::Office => "office",
        }
    }
}

impl Display for LocationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for LocationKind {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "headquarters" => Ok(Self::Headquarters),
            "factory" => Ok(Self::Factory),
            "office" => Ok(Self::Office),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "location kind: {other}"
            ))),
        }
    }
}

/// Sustainability content pillar.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    Sourcing,
    Environment,
    Community,
}

impl Pillar {
    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sourcing => "sourcing",
            Self::Environment => "environment",
            Self::Community => "community",
        }
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Pillar {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "sourcing" => Ok(Self::Sourcing),
            "environment" => Ok(Self::Environment),
            "community" => Ok(Self::Community),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "pillar: {other}"
            ))),
        }
    }
}

/// Topic selected on the contact form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContactTopic {
    General,
    Wholesale,
    Press,
    Careers,
}

impl ContactTopic {
    /// String representation used in payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Wholesale => "wholesale",
            Self::Press => "press",
            Self::Careers => "careers",
        }
    }
}

impl Display for ContactTopic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for ContactTopic {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "general" => Ok(Self::General),
            "wholesale" => Ok(Self::Wholesale),
            "press" => Ok(Self::Press),
            "careers" => Ok(Self::Careers),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "contact topic: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_non_empty_strings() {
        let value = NonEmptyString::new("  Frantoio  ").unwrap();
        assert_eq!(value.as_str(), "Frantoio");
    }

    #[test]
    fn rejects_empty_document_ids() {
        let err = DocumentId::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("document id"));
    }

    #[test]
    fn validates_slug_charset() {
        assert!(Slug::new("extra-virgin-500ml").is_ok());
        assert!(Slug::new("Extra Virgin").is_err());
        assert!(Slug::new("olive_oil").is_err());
    }

    #[test]
    fn rejects_zero_servings() {
        assert_eq!(
            ServingCount::new(0).unwrap_err(),
            TypeConstraintError::NonPositiveNumber("servings")
        );
        assert_eq!(ServingCount::new(4).unwrap().get(), 4);
    }

    #[test]
    fn parses_difficulty_from_str() {
        assert_eq!(Difficulty::try_from("medium").unwrap(), Difficulty::Medium);
        assert!(Difficulty::try_from("impossible").is_err());
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Easy).unwrap();
        assert_eq!(json, "\"easy\"");
    }
}
