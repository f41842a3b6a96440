use std::sync::Arc;

use serde_json::json;

use ove_foods::domain::category::{Category, NewCategory};
use ove_foods::domain::product::{NewProduct, Product};
use ove_foods::domain::types::{DocumentId, NonEmptyString, Slug};
use ove_foods::repository::{
    DieselDocumentStore, DocumentStore, FieldFilter, Repository, SortDirection,
};

mod common;

fn store() -> (common::TestDb, Arc<dyn DocumentStore>) {
    let test_db = common::TestDb::new();
    let store: Arc<dyn DocumentStore> = Arc::new(DieselDocumentStore::new(test_db.pool()));
    (test_db, store)
}

fn new_category(slug: &str, name: &str, order: i32, parent: Option<&DocumentId>) -> NewCategory {
    NewCategory {
        slug: Slug::new(slug).expect("valid slug"),
        name: NonEmptyString::new(name).expect("valid name"),
        description: None,
        hero_image: None,
        order,
        parent_category_id: parent.cloned(),
    }
}

fn new_product(slug: &str, title: &str, category: &str) -> NewProduct {
    NewProduct {
        slug: Slug::new(slug).expect("valid slug"),
        title: NonEmptyString::new(title).expect("valid title"),
        category_id: DocumentId::new(category).expect("valid category id"),
        short_copy: "short".to_string(),
        long_copy: "long".to_string(),
        variety: Some("Koroneiki".to_string()),
        images: vec!["products/a.jpg".to_string()],
        specs: None,
        nutrition: None,
        certifications: vec![],
        awards: vec![],
        related_recipe_ids: vec![],
        retailer_links: vec![],
        featured: Some(true),
        seo: None,
    }
}

#[test]
fn create_then_fetch_round_trips_all_fields() {
    let (_db, store) = store();
    let repo: Repository<Product> = Repository::new(store);

    let new = new_product("estate-evoo", "Single Estate EVOO", "cat-oils");
    let id = repo.create(&new).expect("should create product");

    let stored = repo
        .get_by_id(&id)
        .expect("should fetch product")
        .expect("product should exist");

    assert_eq!(stored.id, id);
    assert_eq!(stored.slug, new.slug);
    assert_eq!(stored.title, new.title);
    assert_eq!(stored.category_id, new.category_id);
    assert_eq!(stored.variety, new.variety);
    assert_eq!(stored.images, new.images);
    assert_eq!(stored.featured, new.featured);
}

#[test]
fn get_by_slug_returns_none_without_error() {
    let (_db, store) = store();
    let repo: Repository<Product> = Repository::new(store);

    let found = repo
        .get_by_slug(&Slug::new("nonexistent").unwrap())
        .expect("absence is not an error");
    assert!(found.is_none());
}

#[test]
fn get_by_slug_finds_inserted_document() {
    let (_db, store) = store();
    let repo: Repository<Category> = Repository::new(store);

    repo.create(&new_category("olive-oils", "Olive Oils", 10, None))
        .expect("should create category");

    let found = repo
        .get_by_slug(&Slug::new("olive-oils").unwrap())
        .expect("should query by slug")
        .expect("category should be found");
    assert_eq!(found.name.as_str(), "Olive Oils");
}

#[test]
fn merge_patches_fields_and_preserves_the_rest() {
    let (_db, store) = store();
    let repo: Repository<Product> = Repository::new(store);

    let id = repo
        .create(&new_product("estate-evoo", "Single Estate EVOO", "cat-oils"))
        .expect("should create product");

    repo.update(&id, &json!({"featured": false, "shortCopy": "rewritten"}))
        .expect("should merge patch");

    let stored = repo.get_by_id(&id).unwrap().expect("product exists");
    assert_eq!(stored.featured, Some(false));
    assert_eq!(stored.short_copy, "rewritten");
    // Untouched fields survive the merge.
    assert_eq!(stored.title.as_str(), "Single Estate EVOO");
    assert_eq!(stored.variety.as_deref(), Some("Koroneiki"));
}

#[test]
fn merge_into_missing_document_is_a_silent_noop() {
    let (_db, store) = store();
    let repo: Repository<Product> = Repository::new(store);

    let missing = DocumentId::new("missing").unwrap();
    repo.update(&missing, &json!({"featured": true}))
        .expect("merging a missing document succeeds silently");
    assert!(repo.get_by_id(&missing).unwrap().is_none());
}

#[test]
fn delete_is_idempotent() {
    let (_db, store) = store();
    let repo: Repository<Product> = Repository::new(store);

    let id = repo
        .create(&new_product("estate-evoo", "Single Estate EVOO", "cat-oils"))
        .expect("should create product");

    repo.delete(&id).expect("first delete succeeds");
    assert!(repo.get_by_id(&id).unwrap().is_none());
    repo.delete(&id).expect("second delete also succeeds");
}

#[test]
fn update_slug_is_visible_to_slug_queries() {
    let (_db, store) = store();
    let repo: Repository<Product> = Repository::new(store);

    let id = repo
        .create(&new_product("old-slug", "Renamable", "cat-oils"))
        .expect("should create product");

    repo.update(&id, &json!({"slug": "new-slug"}))
        .expect("should merge slug change");

    assert!(repo
        .get_by_slug(&Slug::new("old-slug").unwrap())
        .unwrap()
        .is_none());
    assert!(repo
        .get_by_slug(&Slug::new("new-slug").unwrap())
        .unwrap()
        .is_some());
}

#[test]
fn get_where_filters_on_equality_and_array_membership() {
    let (_db, store) = store();
    let repo: Repository<Product> = Repository::new(Arc::clone(&store));

    repo.create(&new_product("a", "Product A", "cat-oils"))
        .unwrap();
    repo.create(&new_product("b", "Product B", "cat-vinegars"))
        .unwrap();
    let mut with_recipe = new_product("c", "Product C", "cat-oils");
    with_recipe.related_recipe_ids = vec![DocumentId::new("rec-1").unwrap()];
    repo.create(&with_recipe).unwrap();

    let oils = repo
        .get_where(&FieldFilter::eq("categoryId", "cat-oils"))
        .expect("should filter");
    assert_eq!(oils.len(), 2);

    let related = repo
        .get_where(&FieldFilter::array_contains("relatedRecipeIds", "rec-1"))
        .expect("should filter on array membership");
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].slug, "c");
}

#[test]
fn get_ordered_sorts_by_the_named_field() {
    let (_db, store) = store();
    let repo: Repository<Category> = Repository::new(store);

    repo.create(&new_category("third", "Third", 30, None)).unwrap();
    repo.create(&new_category("first", "First", 10, None)).unwrap();
    repo.create(&new_category("second", "Second", 20, None)).unwrap();

    let ordered = repo
        .get_ordered("order", SortDirection::Asc)
        .expect("should sort");
    let slugs: Vec<&str> = ordered.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["first", "second", "third"]);

    let reversed = repo
        .get_ordered("order", SortDirection::Desc)
        .expect("should sort descending");
    assert_eq!(reversed[0].slug, "third");
}

#[test]
fn fetch_all_preserves_creation_order() {
    let (_db, store) = store();
    let repo: Repository<Product> = Repository::new(store);

    for slug in ["one", "two", "three"] {
        repo.create(&new_product(slug, slug, "cat-oils")).unwrap();
    }

    let all = repo.get_all().expect("should list products");
    let slugs: Vec<&str> = all.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["one", "two", "three"]);
}
