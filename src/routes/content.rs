//! Public content API backed by the facade and the search layer.

use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::types::{Difficulty, DocumentId, LocationKind, Pillar, Slug};
use crate::search::{ProductFilters, RecipeFilters, SearchIndex, recipe_tags};
use crate::services::ServiceError;
use crate::services::content::ContentProvider;

use super::error_response;

#[derive(Debug, Deserialize)]
struct ProductListParams {
    query: Option<String>,
    category: Option<String>,
    featured: Option<bool>,
}

#[get("/api/products")]
async fn list_products(
    params: web::Query<ProductListParams>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    let params = params.into_inner();
    let category_id = match params.category.map(DocumentId::new).transpose() {
        Ok(id) => id,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    let filters = ProductFilters {
        category_id,
        featured: params.featured,
    };

    let index = SearchIndex::new(provider.products());
    let query = params.query.unwrap_or_default();
    let hits = index.search_filtered(&query, |p| filters.matches(p));
    HttpResponse::Ok().json(hits)
}

#[get("/api/products/{slug}")]
async fn get_product(
    slug: web::Path<String>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    let Ok(slug) = Slug::new(slug.into_inner()) else {
        return error_response(ServiceError::NotFound);
    };
    match provider.product_by_slug(&slug) {
        Some(product) => HttpResponse::Ok().json(product),
        None => error_response(ServiceError::NotFound),
    }
}

#[get("/api/products/{slug}/recipes")]
async fn product_recipes(
    slug: web::Path<String>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    let Ok(slug) = Slug::new(slug.into_inner()) else {
        return error_response(ServiceError::NotFound);
    };
    match provider.product_by_slug(&slug) {
        Some(product) => HttpResponse::Ok().json(provider.recipes_by_product_id(&product.id)),
        None => error_response(ServiceError::NotFound),
    }
}

#[derive(Debug, Deserialize)]
struct RecipeListParams {
    query: Option<String>,
    difficulty: Option<String>,
    /// Comma-separated tag list.
    tags: Option<String>,
    featured: Option<bool>,
}

#[get("/api/recipes")]
async fn list_recipes(
    params: web::Query<RecipeListParams>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    let params = params.into_inner();
    let difficulty = match params
        .difficulty
        .as_deref()
        .map(Difficulty::try_from)
        .transpose()
    {
        Ok(difficulty) => difficulty,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    let tags = params
        .tags
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();
    let filters = RecipeFilters {
        difficulty,
        tags,
        featured: params.featured,
    };

    let index = SearchIndex::new(provider.recipes());
    let query = params.query.unwrap_or_default();
    let hits = index.search_filtered(&query, |r| filters.matches(r));
    HttpResponse::Ok().json(hits)
}

/// Distinct tags and the difficulty scale, for building the filter UI.
#[get("/api/recipes/filters")]
async fn recipe_filter_options(provider: web::Data<ContentProvider>) -> impl Responder {
    let recipes = provider.recipes();
    HttpResponse::Ok().json(json!({
        "tags": recipe_tags(&recipes),
        "difficulties": Difficulty::ALL,
    }))
}

#[get("/api/recipes/{slug}")]
async fn get_recipe(
    slug: web::Path<String>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    let Ok(slug) = Slug::new(slug.into_inner()) else {
        return error_response(ServiceError::NotFound);
    };
    match provider.recipe_by_slug(&slug) {
        Some(recipe) => HttpResponse::Ok().json(recipe),
        None => error_response(ServiceError::NotFound),
    }
}

#[get("/api/recipes/{slug}/products")]
async fn recipe_products(
    slug: web::Path<String>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    let Ok(slug) = Slug::new(slug.into_inner()) else {
        return error_response(ServiceError::NotFound);
    };
    match provider.recipe_by_slug(&slug) {
        Some(recipe) => HttpResponse::Ok().json(provider.products_by_recipe_id(&recipe.id)),
        None => error_response(ServiceError::NotFound),
    }
}

#[get("/api/categories")]
async fn list_categories(provider: web::Data<ContentProvider>) -> impl Responder {
    HttpResponse::Ok().json(provider.categories_with_subs())
}

/// A category page: the category itself plus the union of its products and
/// those of its subcategories.
#[get("/api/categories/{slug}")]
async fn get_category(
    slug: web::Path<String>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    let Ok(slug) = Slug::new(slug.into_inner()) else {
        return error_response(ServiceError::NotFound);
    };
    match provider.category_by_slug(&slug) {
        Some(category) => {
            let products = provider.products_by_category_including_subs(&category.id);
            HttpResponse::Ok().json(json!({
                "category": category,
                "products": products,
            }))
        }
        None => error_response(ServiceError::NotFound),
    }
}

#[derive(Debug, Deserialize)]
struct FeaturedParams {
    limit: Option<usize>,
}

#[get("/api/featured")]
async fn featured(
    params: web::Query<FeaturedParams>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    let limit = params.limit.unwrap_or(4);
    HttpResponse::Ok().json(json!({
        "products": provider.featured_products(limit),
        "recipes": provider.featured_recipes(limit),
    }))
}

#[derive(Debug, Deserialize)]
struct LocationListParams {
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[get("/api/locations")]
async fn list_locations(
    params: web::Query<LocationListParams>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    match params.into_inner().kind.as_deref() {
        None => HttpResponse::Ok().json(provider.locations()),
        Some(raw) => match LocationKind::try_from(raw) {
            Ok(kind) => HttpResponse::Ok().json(provider.locations_by_kind(kind)),
            Err(e) => error_response(ServiceError::from(e)),
        },
    }
}

#[get("/api/stories")]
async fn list_stories(provider: web::Data<ContentProvider>) -> impl Responder {
    HttpResponse::Ok().json(provider.stories())
}

#[get("/api/stories/{slug}")]
async fn get_story(
    slug: web::Path<String>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    let Ok(slug) = Slug::new(slug.into_inner()) else {
        return error_response(ServiceError::NotFound);
    };
    match provider.story_by_slug(&slug) {
        Some(story) => HttpResponse::Ok().json(story),
        None => error_response(ServiceError::NotFound),
    }
}

#[derive(Debug, Deserialize)]
struct SustainabilityParams {
    pillar: Option<String>,
}

#[get("/api/sustainability")]
async fn sustainability(
    params: web::Query<SustainabilityParams>,
    provider: web::Data<ContentProvider>,
) -> impl Responder {
    let posts = match params.into_inner().pillar.as_deref() {
        None => provider.sustainability_posts(),
        Some(raw) => match Pillar::try_from(raw) {
            Ok(pillar) => provider.sustainability_posts_by_pillar(pillar),
            Err(e) => return error_response(ServiceError::from(e)),
        },
    };
    HttpResponse::Ok().json(json!({
        "posts": posts,
        "metrics": provider.sustainability_metrics(),
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_products)
        .service(product_recipes)
        .service(get_product)
        .service(recipe_filter_options)
        .service(list_recipes)
        .service(recipe_products)
        .service(get_recipe)
        .service(list_categories)
        .service(get_category)
        .service(featured)
        .service(list_locations)
        .service(list_stories)
        .service(get_story)
        .service(sustainability);
}
