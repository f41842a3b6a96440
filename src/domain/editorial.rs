//! Editorial content: brand stories and sustainability reporting.

use serde::{Deserialize, Serialize};

use crate::domain::types::{DocumentId, NonEmptyString, Pillar, Slug};

/// A brand story article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoryPost {
    pub id: DocumentId,
    pub slug: Slug,
    pub title: NonEmptyString,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_on: Option<String>,
}

/// Information required to create a new [`StoryPost`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewStoryPost {
    pub slug: Slug,
    pub title: NonEmptyString,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_on: Option<String>,
}

/// A sustainability article filed under one of the three pillars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityPost {
    pub id: DocumentId,
    pub slug: Slug,
    pub title: NonEmptyString,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub pillar: Pillar,
    #[serde(default)]
    pub badges: Vec<String>,
}

/// Information required to create a new [`SustainabilityPost`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSustainabilityPost {
    pub slug: Slug,
    pub title: NonEmptyString,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub pillar: Pillar,
    #[serde(default)]
    pub badges: Vec<String>,
}

/// A headline sustainability figure shown on the overview page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityMetric {
    pub id: DocumentId,
    pub label: NonEmptyString,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footnote: Option<String>,
}

/// Information required to create a new [`SustainabilityMetric`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSustainabilityMetric {
    pub label: NonEmptyString,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footnote: Option<String>,
}
