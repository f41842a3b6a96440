//! Content Query Facade.
//!
//! Domain-specific read functions composing repository calls and the
//! in-memory joins the document store cannot express natively. Every read
//! catches repository errors, logs a warning and degrades to an empty
//! result — page code never sees a storage failure, only missing content.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::category::{Category, CategoryWithSubs};
use crate::domain::editorial::{StoryPost, SustainabilityMetric, SustainabilityPost};
use crate::domain::location::Location;
use crate::domain::product::Product;
use crate::domain::recipe::Recipe;
use crate::domain::types::{DocumentId, LocationKind, Pillar, Slug};
use crate::repository::{
    DocumentStore, FieldFilter, Repository, RepositoryResult, SortDirection,
};

fn or_empty<T>(result: RepositoryResult<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            log::warn!("failed to load {what}: {e}");
            Vec::new()
        }
    }
}

fn or_none<T>(result: RepositoryResult<Option<T>>, what: &str) -> Option<T> {
    match result {
        Ok(item) => item,
        Err(e) => {
            log::warn!("failed to load {what}: {e}");
            None
        }
    }
}

/// Read facade over the document store.
#[derive(Clone)]
pub struct ContentProvider {
    products: Repository<Product>,
    categories: Repository<Category>,
    recipes: Repository<Recipe>,
    locations: Repository<Location>,
    stories: Repository<StoryPost>,
    sustainability_posts: Repository<SustainabilityPost>,
    sustainability_metrics: Repository<SustainabilityMetric>,
}

impl ContentProvider {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            products: Repository::new(Arc::clone(&store)),
            categories: Repository::new(Arc::clone(&store)),
            recipes: Repository::new(Arc::clone(&store)),
            locations: Repository::new(Arc::clone(&store)),
            stories: Repository::new(Arc::clone(&store)),
            sustainability_posts: Repository::new(Arc::clone(&store)),
            sustainability_metrics: Repository::new(store),
        }
    }

    pub fn products(&self) -> Vec<Product> {
        or_empty(self.products.get_all(), "products")
    }

    pub fn product_by_id(&self, id: &DocumentId) -> Option<Product> {
        or_none(self.products.get_by_id(id), "product by id")
    }

    pub fn product_by_slug(&self, slug: &Slug) -> Option<Product> {
        or_none(self.products.get_by_slug(slug), "product by slug")
    }

    /// Featured products in store return order, truncated to `limit`.
    pub fn featured_products(&self, limit: usize) -> Vec<Product> {
        let mut items = or_empty(
            self.products.get_where(&FieldFilter::eq("featured", true)),
            "featured products",
        );
        items.truncate(limit);
        items
    }

    /// All categories sorted by their `order` key.
    pub fn categories(&self) -> Vec<Category> {
        or_empty(
            self.categories.get_ordered("order", SortDirection::Asc),
            "categories",
        )
    }

    pub fn category_by_slug(&self, slug: &Slug) -> Option<Category> {
        or_none(self.categories.get_by_slug(slug), "category by slug")
    }

    /// Top-level categories with their subcategories attached, both levels
    /// sorted by `order` then name.
    pub fn categories_with_subs(&self) -> Vec<CategoryWithSubs> {
        let all = self.categories();
        let (parents, children): (Vec<_>, Vec<_>) =
            all.into_iter().partition(|c| !c.is_subcategory());

        let mut tree: Vec<CategoryWithSubs> = parents
            .into_iter()
            .map(|category| CategoryWithSubs {
                category,
                subcategories: Vec::new(),
            })
            .collect();

        for child in children {
            let Some(parent_id) = child.parent_category_id.clone() else {
                continue;
            };
            match tree.iter_mut().find(|p| p.category.id == parent_id) {
                Some(parent) => parent.subcategories.push(child),
                // Orphaned subcategories are dropped from the tree view.
                None => log::warn!(
                    "subcategory {} references missing parent {}",
                    child.slug,
                    parent_id
                ),
            }
        }

        for parent in &mut tree {
            parent
                .subcategories
                .sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        }
        tree.sort_by(|a, b| {
            a.category
                .order
                .cmp(&b.category.order)
                .then_with(|| a.category.name.cmp(&b.category.name))
        });
        tree
    }

    /// The category tree flattened to a typed list: each parent followed by
    /// its subcategories.
    pub fn flattened_categories(&self) -> Vec<Category> {
        self.categories_with_subs()
            .into_iter()
            .flat_map(|parent| {
                std::iter::once(parent.category).chain(parent.subcategories)
            })
            .collect()
    }

    /// Products directly assigned to a category.
    pub fn products_by_category(&self, category_id: &DocumentId) -> Vec<Product> {
        or_empty(
            self.products
                .get_where(&FieldFilter::eq("categoryId", category_id.as_str())),
            "products by category",
        )
    }

    /// Set-union, without duplicates, of the parent category's direct
    /// products and the products of every subcategory of the parent.
    pub fn products_by_category_including_subs(&self, parent_id: &DocumentId) -> Vec<Product> {
        let child_ids: HashSet<DocumentId> = self
            .categories()
            .into_iter()
            .filter(|c| c.parent_category_id.as_ref() == Some(parent_id))
            .map(|c| c.id)
            .collect();

        let mut result = self.products_by_category(parent_id);
        let mut seen: HashSet<DocumentId> = result.iter().map(|p| p.id.clone()).collect();

        for product in or_empty(self.products.get_all(), "products") {
            if child_ids.contains(&product.category_id) && !seen.contains(&product.id) {
                seen.insert(product.id.clone());
                result.push(product);
            }
        }
        result
    }

    pub fn recipes(&self) -> Vec<Recipe> {
        or_empty(self.recipes.get_all(), "recipes")
    }

    pub fn recipe_by_slug(&self, slug: &Slug) -> Option<Recipe> {
        or_none(self.recipes.get_by_slug(slug), "recipe by slug")
    }

    /// Featured recipes in store return order, truncated to `limit`.
    pub fn featured_recipes(&self, limit: usize) -> Vec<Recipe> {
        let mut items = or_empty(
            self.recipes.get_where(&FieldFilter::eq("featured", true)),
            "featured recipes",
        );
        items.truncate(limit);
        items
    }

    /// Recipes whose `relatedProductIds` contains the given product.
    pub fn recipes_by_product_id(&self, product_id: &DocumentId) -> Vec<Recipe> {
        or_empty(
            self.recipes.get_where(&FieldFilter::array_contains(
                "relatedProductIds",
                product_id.as_str(),
            )),
            "recipes by product",
        )
    }

    /// Products referenced by the given recipe's `relatedProductIds`, in
    /// product collection order.
    pub fn products_by_recipe_id(&self, recipe_id: &DocumentId) -> Vec<Product> {
        let Some(recipe) = or_none(self.recipes.get_by_id(recipe_id), "recipe by id") else {
            return Vec::new();
        };
        let wanted: HashSet<&DocumentId> = recipe.related_product_ids.iter().collect();
        or_empty(self.products.get_all(), "products")
            .into_iter()
            .filter(|p| wanted.contains(&p.id))
            .collect()
    }

    pub fn locations(&self) -> Vec<Location> {
        or_empty(self.locations.get_all(), "locations")
    }

    pub fn locations_by_kind(&self, kind: LocationKind) -> Vec<Location> {
        or_empty(
            self.locations
                .get_where(&FieldFilter::eq("type", kind.as_str())),
            "locations by kind",
        )
    }

    pub fn stories(&self) -> Vec<StoryPost> {
        or_empty(self.stories.get_all(), "stories")
    }

    pub fn story_by_slug(&self, slug: &Slug) -> Option<StoryPost> {
        or_none(self.stories.get_by_slug(slug), "story by slug")
    }

    pub fn sustainability_posts(&self) -> Vec<SustainabilityPost> {
        or_empty(self.sustainability_posts.get_all(), "sustainability posts")
    }

    pub fn sustainability_posts_by_pillar(&self, pillar: Pillar) -> Vec<SustainabilityPost> {
        or_empty(
            self.sustainability_posts
                .get_where(&FieldFilter::eq("pillar", pillar.as_str())),
            "sustainability posts by pillar",
        )
    }

    pub fn sustainability_metrics(&self) -> Vec<SustainabilityMetric> {
        or_empty(
            self.sustainability_metrics.get_all(),
            "sustainability metrics",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Collection;
    use crate::repository::test::{InMemoryDocumentStore, document};
    use serde_json::json;

    fn provider_with_catalog() -> ContentProvider {
        let store = InMemoryDocumentStore::new();
        store.seed(
            Collection::Categories,
            vec![
                document(json!({
                    "id": "oils", "slug": "oils", "name": "Olive Oils", "order": 1
                })),
                document(json!({
                    "id": "evoo", "slug": "extra-virgin", "name": "Extra Virgin",
                    "order": 1, "parentCategoryId": "oils"
                })),
                document(json!({
                    "id": "vinegars", "slug": "vinegars", "name": "Vinegars", "order": 2
                })),
            ],
        );
        store.seed(
            Collection::Products,
            vec![
                document(json!({
                    "id": "p1", "slug": "classic", "title": "Classic Olive Oil",
                    "categoryId": "oils"
                })),
                document(json!({
                    "id": "p2", "slug": "single-estate", "title": "Single Estate",
                    "categoryId": "evoo", "featured": true
                })),
                document(json!({
                    "id": "p3", "slug": "aged-balsamic", "title": "Aged Balsamic",
                    "categoryId": "vinegars"
                })),
            ],
        );
        store.seed(
            Collection::Recipes,
            vec![
                document(json!({
                    "id": "r1", "slug": "greek-salad", "title": "Greek Salad",
                    "servings": 4, "difficulty": "easy", "featured": true,
                    "relatedProductIds": ["p1", "p2"]
                })),
                document(json!({
                    "id": "r2", "slug": "bruschetta", "title": "Bruschetta",
                    "servings": 2, "difficulty": "easy",
                    "relatedProductIds": ["p3"]
                })),
                document(json!({
                    "id": "r3", "slug": "confit", "title": "Garlic Confit",
                    "servings": 6, "difficulty": "hard", "featured": true
                })),
            ],
        );
        ContentProvider::new(Arc::new(store))
    }

    #[test]
    fn union_includes_subcategory_products_without_duplicates() {
        let provider = provider_with_catalog();
        let oils = DocumentId::new("oils").unwrap();

        let products = provider.products_by_category_including_subs(&oils);
        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn union_for_leaf_category_is_direct_products_only() {
        let provider = provider_with_catalog();
        let vinegars = DocumentId::new("vinegars").unwrap();

        let products = provider.products_by_category_including_subs(&vinegars);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "p3");
    }

    #[test]
    fn featured_recipes_respects_limit_and_order() {
        let provider = provider_with_catalog();

        let recipes = provider.featured_recipes(1);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id.as_str(), "r1");
        assert!(recipes[0].is_featured());

        let recipes = provider.featured_recipes(10);
        assert_eq!(recipes.len(), 2);
        assert!(recipes.iter().all(Recipe::is_featured));
    }

    #[test]
    fn recipes_by_product_matches_related_ids() {
        let provider = provider_with_catalog();
        let product = DocumentId::new("p1").unwrap();

        let recipes = provider.recipes_by_product_id(&product);
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id.as_str(), "r1");
    }

    #[test]
    fn products_by_recipe_resolves_cross_references() {
        let provider = provider_with_catalog();
        let recipe = DocumentId::new("r1").unwrap();

        let products = provider.products_by_recipe_id(&recipe);
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn category_tree_attaches_children_to_parents() {
        let provider = provider_with_catalog();

        let tree = provider.categories_with_subs();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].category.id.as_str(), "oils");
        assert_eq!(tree[0].subcategories.len(), 1);
        assert_eq!(tree[0].subcategories[0].id.as_str(), "evoo");
        assert!(tree[1].subcategories.is_empty());
    }

    #[test]
    fn no_subcategory_is_itself_a_parent() {
        let provider = provider_with_catalog();

        let all = provider.categories();
        let parent_ids: Vec<&DocumentId> = all
            .iter()
            .filter_map(|c| c.parent_category_id.as_ref())
            .collect();
        for parent_id in parent_ids {
            let parent = all
                .iter()
                .find(|c| &c.id == parent_id)
                .expect("parent exists");
            assert!(!parent.is_subcategory());
        }
    }

    #[test]
    fn flattened_categories_keeps_parent_child_adjacency() {
        let provider = provider_with_catalog();

        let flat: Vec<String> = provider
            .flattened_categories()
            .into_iter()
            .map(|c| c.id.into_inner())
            .collect();
        assert_eq!(flat, vec!["oils", "evoo", "vinegars"]);
    }

    #[test]
    fn missing_slug_yields_none() {
        let provider = provider_with_catalog();
        assert!(provider
            .product_by_slug(&Slug::new("nonexistent").unwrap())
            .is_none());
    }
}
