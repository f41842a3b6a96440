use serde::{Deserialize, Serialize};

use crate::domain::types::{DocumentId, NonEmptyString, Slug};

pub(crate) const fn default_order() -> i32 {
    100
}

/// Product category. A category whose `parent_category_id` is set is a
/// subcategory; the hierarchy is exactly two levels deep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DocumentId,
    pub slug: Slug,
    pub name: NonEmptyString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    /// Sort key within a listing.
    #[serde(default = "default_order")]
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category_id: Option<DocumentId>,
}

impl Category {
    /// Whether this category sits under a parent.
    pub fn is_subcategory(&self) -> bool {
        self.parent_category_id.is_some()
    }
}

/// Information required to create a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub slug: Slug,
    pub name: NonEmptyString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default = "default_order")]
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category_id: Option<DocumentId>,
}

/// A top-level category with its subcategories attached.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithSubs {
    #[serde(flatten)]
    pub category: Category,
    pub subcategories: Vec<Category>,
}
