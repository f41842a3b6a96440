use std::path::Path;
use std::sync::Arc;

use ove_foods::domain::category::NewCategory;
use ove_foods::domain::types::{DocumentId, LocationKind, NonEmptyString, Pillar, Slug};
use ove_foods::repository::{
    Collection, DocumentStore, Repository, RepositoryError, StaticJsonStore,
};
use ove_foods::search::{ProductFilters, SearchIndex, filter_products};
use ove_foods::services::content::ContentProvider;

fn data_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

fn fixture_provider() -> ContentProvider {
    let store = StaticJsonStore::load(data_dir()).expect("bundled fixtures should load");
    ContentProvider::new(Arc::new(store))
}

#[test]
fn bundled_fixtures_validate_and_load() {
    let provider = fixture_provider();
    assert!(!provider.products().is_empty());
    assert!(!provider.categories().is_empty());
    assert!(!provider.recipes().is_empty());
    assert!(!provider.locations().is_empty());
}

#[test]
fn category_union_includes_subcategory_products() {
    let provider = fixture_provider();
    let oils = DocumentId::new("cat-oils").unwrap();

    let products = provider.products_by_category_including_subs(&oils);
    let mut slugs: Vec<&str> = products.iter().map(|p| p.slug.as_str()).collect();
    slugs.sort();

    // Direct product of the parent plus one from each subcategory.
    assert_eq!(
        slugs,
        vec![
            "classic-extra-virgin-1l",
            "lemon-infused-olive-oil-250ml",
            "single-estate-extra-virgin-500ml",
        ]
    );

    // No duplicates in the union.
    let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), products.len());
}

#[test]
fn subcategories_never_have_children() {
    let provider = fixture_provider();
    let all = provider.categories();
    for category in all.iter().filter(|c| c.is_subcategory()) {
        assert!(
            !all.iter()
                .any(|other| other.parent_category_id.as_ref() == Some(&category.id)),
            "category {} is both a subcategory and a parent",
            category.slug
        );
    }
}

#[test]
fn featured_products_are_limited_and_flagged() {
    let provider = fixture_provider();

    let featured = provider.featured_products(1);
    assert_eq!(featured.len(), 1);
    assert!(featured[0].is_featured());

    let all_featured = provider.featured_products(100);
    assert!(all_featured.iter().all(|p| p.is_featured()));
}

#[test]
fn cross_references_resolve_in_both_directions() {
    let provider = fixture_provider();
    let estate = DocumentId::new("prod-estate-evoo").unwrap();

    let recipes = provider.recipes_by_product_id(&estate);
    let mut slugs: Vec<&str> = recipes.iter().map(|r| r.slug.as_str()).collect();
    slugs.sort();
    assert_eq!(
        slugs,
        vec!["grilled-bread-with-olive-oil", "horiatiki-village-salad"]
    );

    let dressing = DocumentId::new("rec-citrus-dressing").unwrap();
    let products = provider.products_by_recipe_id(&dressing);
    let mut slugs: Vec<&str> = products.iter().map(|p| p.slug.as_str()).collect();
    slugs.sort();
    assert_eq!(
        slugs,
        vec![
            "aged-balsamic-vinegar-250ml",
            "lemon-infused-olive-oil-250ml"
        ]
    );
}

#[test]
fn empty_query_with_filters_equals_pure_filtering() {
    let provider = fixture_provider();
    let products = provider.products();

    let filters = ProductFilters {
        category_id: Some(DocumentId::new("cat-evoo").unwrap()),
        featured: None,
    };

    let index = SearchIndex::new(products.clone());
    let hits = index.search_filtered("", |p| filters.matches(p));
    let expected = filter_products(&products, &filters);

    assert_eq!(
        hits.iter().map(|h| &h.item).collect::<Vec<_>>(),
        expected.iter().collect::<Vec<_>>()
    );
}

#[test]
fn fuzzy_search_finds_products_across_fields() {
    let provider = fixture_provider();
    let index = SearchIndex::new(provider.products());

    // "koroneiki" appears only in variety and long-copy fields, never in a
    // title; the variety matches should still rank first.
    let hits = index.search("koroneiki");
    assert!(hits.len() >= 2);
    assert!(hits
        .iter()
        .take(2)
        .all(|h| h.item.variety.as_deref() == Some("Koroneiki")));
}

#[test]
fn locations_filter_by_kind() {
    let provider = fixture_provider();
    let factories = provider.locations_by_kind(LocationKind::Factory);
    assert_eq!(factories.len(), 1);
    assert_eq!(factories[0].id.as_str(), "loc-mill");
}

#[test]
fn sustainability_posts_filter_by_pillar() {
    let provider = fixture_provider();
    let community = provider.sustainability_posts_by_pillar(Pillar::Community);
    assert_eq!(community.len(), 1);
    assert_eq!(community[0].slug, "fair-harvest-pay");
    assert_eq!(provider.sustainability_metrics().len(), 3);
}

#[test]
fn story_lookup_by_slug() {
    let provider = fixture_provider();
    let story = provider
        .story_by_slug(&Slug::new("the-first-harvest").unwrap())
        .expect("story exists");
    assert_eq!(story.id.as_str(), "story-first-harvest");

    assert!(provider
        .story_by_slug(&Slug::new("nonexistent").unwrap())
        .is_none());
}

#[test]
fn static_store_rejects_writes() {
    let store = StaticJsonStore::load(data_dir()).expect("fixtures load");
    let repo: Repository<ove_foods::domain::category::Category> =
        Repository::new(Arc::new(store));

    let new = NewCategory {
        slug: Slug::new("pantry").unwrap(),
        name: NonEmptyString::new("Pantry").unwrap(),
        description: None,
        hero_image: None,
        order: 100,
        parent_category_id: None,
    };
    assert!(matches!(
        repo.create(&new),
        Err(RepositoryError::ReadOnly("categories"))
    ));
}

#[test]
fn malformed_fixture_fails_the_load() {
    let dir = tempfile::tempdir().expect("temp dir");
    // A recipe without the required servings/difficulty fields.
    std::fs::write(
        dir.path().join("recipes.json"),
        r#"[{"id": "bad", "slug": "bad", "title": "Bad Recipe"}]"#,
    )
    .expect("write fixture");

    let result = StaticJsonStore::load(dir.path());
    assert!(matches!(result, Err(RepositoryError::StaticData { .. })));
}

#[test]
fn missing_fixture_file_serves_empty_collection() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("categories.json"), "[]").expect("write fixture");

    let store = StaticJsonStore::load(dir.path()).expect("load succeeds");
    assert!(store.fetch_all(Collection::Products).unwrap().is_empty());
}
