use serde::{Deserialize, Serialize};

use crate::domain::product::SeoBlock;
use crate::domain::types::{Difficulty, DocumentId, Minutes, NonEmptyString, ServingCount, Slug};

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Preparation and cooking durations.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeTimes {
    pub prep: Minutes,
    pub cook: Minutes,
}

impl RecipeTimes {
    /// Total time from counter to table.
    pub fn total(&self) -> Minutes {
        Minutes::new(self.prep.get() + self.cook.get())
    }
}

/// An editorial recipe tied to catalog products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: DocumentId,
    pub slug: Slug,
    pub title: NonEmptyString,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Ordered instruction steps.
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub times: RecipeTimes,
    pub servings: ServingCount,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_product_ids: Vec<DocumentId>,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoBlock>,
}

impl Recipe {
    /// Whether the recipe is flagged for featured placements.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

/// Information required to create a new [`Recipe`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub slug: Slug,
    pub title: NonEmptyString,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub times: RecipeTimes,
    pub servings: ServingCount,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_product_ids: Vec<DocumentId>,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoBlock>,
}
