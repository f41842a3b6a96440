use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::types::{DocumentId, NonEmptyString, Slug};

/// Third-party certification carried on a product label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub label: String,
    pub icon: String,
}

/// Industry award won by a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub name: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Outbound link to a retailer carrying the product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RetailerLink {
    pub label: String,
    pub url: String,
}

/// Per-entity override of the generated page metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeoBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DocumentId,
    pub slug: Slug,
    pub title: NonEmptyString,
    pub category_id: DocumentId,
    #[serde(default)]
    pub short_copy: String,
    /// May contain raw markup.
    #[serde(default)]
    pub long_copy: String,
    /// Cultivar or variety name, e.g. "Koroneiki".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    /// First image is the canonical one.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub related_recipe_ids: Vec<DocumentId>,
    #[serde(default)]
    pub retailer_links: Vec<RetailerLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoBlock>,
}

impl Product {
    /// Whether the product is flagged for featured placements.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub slug: Slug,
    pub title: NonEmptyString,
    pub category_id: DocumentId,
    #[serde(default)]
    pub short_copy: String,
    #[serde(default)]
    pub long_copy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub related_recipe_ids: Vec<DocumentId>,
    #[serde(default)]
    pub retailer_links: Vec<RetailerLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoBlock>,
}
