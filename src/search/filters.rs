//! Pure filter predicates and enumeration helpers for building filter UI.

use std::collections::BTreeSet;

use crate::domain::product::Product;
use crate::domain::recipe::Recipe;
use crate::domain::types::{Difficulty, DocumentId};

/// Hard constraints applied to product listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    pub category_id: Option<DocumentId>,
    pub featured: Option<bool>,
}

impl ProductFilters {
    /// AND-combination of the set constraints.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category_id) = &self.category_id {
            if &product.category_id != category_id {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if product.is_featured() != featured {
                return false;
            }
        }
        true
    }
}

/// Hard constraints applied to recipe listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilters {
    pub difficulty: Option<Difficulty>,
    /// Keep recipes sharing at least one of these tags.
    pub tags: Vec<String>,
    pub featured: Option<bool>,
}

impl RecipeFilters {
    /// AND-combination of the set constraints; the tag constraint is a
    /// non-empty intersection.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != difficulty {
                return false;
            }
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|tag| recipe.tags.contains(tag)) {
            return false;
        }
        if let Some(featured) = self.featured {
            if recipe.is_featured() != featured {
                return false;
            }
        }
        true
    }
}

/// Products passing the filters, in input order.
pub fn filter_products(products: &[Product], filters: &ProductFilters) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}

/// Recipes passing the filters, in input order.
pub fn filter_recipes(recipes: &[Recipe], filters: &RecipeFilters) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect()
}

/// The distinct set of tags present across all recipes, sorted.
pub fn recipe_tags(recipes: &[Recipe]) -> Vec<String> {
    recipes
        .iter()
        .flat_map(|r| r.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
