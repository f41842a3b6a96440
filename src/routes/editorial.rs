//! Admin CRUD endpoints for editorial content: stories, sustainability
//! posts and sustainability metrics.

use actix_web::{Responder, delete, get, post, put, web};

use crate::domain::editorial::{
    NewStoryPost, NewSustainabilityMetric, NewSustainabilityPost, StoryPost, SustainabilityMetric,
    SustainabilityPost,
};
use crate::forms::editorial::{StoryForm, SustainabilityMetricForm, SustainabilityPostForm};
use crate::repository::{CollectionEntity, DocumentStore, Repository};
use crate::services::{ServiceError, admin};

use super::{error_response, parse_document_id, respond_created, respond_json, respond_no_content};

fn repo<T: CollectionEntity>(store: web::Data<dyn DocumentStore>) -> Repository<T> {
    Repository::new(store.into_inner())
}

#[get("/api/admin/stories")]
async fn list_stories(store: web::Data<dyn DocumentStore>) -> impl Responder {
    respond_json(admin::list_entities(&repo::<StoryPost>(store)))
}

#[get("/api/admin/stories/{id}")]
async fn get_story(id: web::Path<String>, store: web::Data<dyn DocumentStore>) -> impl Responder {
    match parse_document_id(id.into_inner()) {
        Ok(id) => respond_json(admin::get_entity(&id, &repo::<StoryPost>(store))),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/stories")]
async fn create_story(
    store: web::Data<dyn DocumentStore>,
    web::Json(form): web::Json<StoryForm>,
) -> impl Responder {
    let payload: NewStoryPost = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    respond_created(admin::create_entity(&payload, &repo::<StoryPost>(store)))
}

#[put("/api/admin/stories/{id}")]
async fn update_story(
    id: web::Path<String>,
    store: web::Data<dyn DocumentStore>,
    web::Json(form): web::Json<StoryForm>,
) -> impl Responder {
    let id = match parse_document_id(id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };
    let payload: NewStoryPost = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    respond_no_content(admin::update_entity(&id, &payload, &repo::<StoryPost>(store)))
}

#[delete("/api/admin/stories/{id}")]
async fn delete_story(
    id: web::Path<String>,
    store: web::Data<dyn DocumentStore>,
) -> impl Responder {
    match parse_document_id(id.into_inner()) {
        Ok(id) => respond_no_content(admin::delete_entity(&id, &repo::<StoryPost>(store))),
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/sustainability/posts")]
async fn list_posts(store: web::Data<dyn DocumentStore>) -> impl Responder {
    respond_json(admin::list_entities(&repo::<SustainabilityPost>(store)))
}

#[get("/api/admin/sustainability/posts/{id}")]
async fn get_post(id: web::Path<String>, store: web::Data<dyn DocumentStore>) -> impl Responder {
    match parse_document_id(id.into_inner()) {
        Ok(id) => respond_json(admin::get_entity(&id, &repo::<SustainabilityPost>(store))),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/sustainability/posts")]
async fn create_post(
    store: web::Data<dyn DocumentStore>,
    web::Json(form): web::Json<SustainabilityPostForm>,
) -> impl Responder {
    let payload: NewSustainabilityPost = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    respond_created(admin::create_entity(
        &payload,
        &repo::<SustainabilityPost>(store),
    ))
}

#[put("/api/admin/sustainability/posts/{id}")]
async fn update_post(
    id: web::Path<String>,
    store: web::Data<dyn DocumentStore>,
    web::Json(form): web::Json<SustainabilityPostForm>,
) -> impl Responder {
    let id = match parse_document_id(id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };
    let payload: NewSustainabilityPost = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    respond_no_content(admin::update_entity(
        &id,
        &payload,
        &repo::<SustainabilityPost>(store),
    ))
}

#[delete("/api/admin/sustainability/posts/{id}")]
async fn delete_post(
    id: web::Path<String>,
    store: web::Data<dyn DocumentStore>,
) -> impl Responder {
    match parse_document_id(id.into_inner()) {
        Ok(id) => respond_no_content(admin::delete_entity(
            &id,
            &repo::<SustainabilityPost>(store),
        )),
        Err(e) => error_response(e),
    }
}

#[get("/api/admin/sustainability/metrics")]
async fn list_metrics(store: web::Data<dyn DocumentStore>) -> impl Responder {
    respond_json(admin::list_entities(&repo::<SustainabilityMetric>(store)))
}

#[post("/api/admin/sustainability/metrics")]
async fn create_metric(
    store: web::Data<dyn DocumentStore>,
    web::Json(form): web::Json<SustainabilityMetricForm>,
) -> impl Responder {
    let payload: NewSustainabilityMetric = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    respond_created(admin::create_entity(
        &payload,
        &repo::<SustainabilityMetric>(store),
    ))
}

#[put("/api/admin/sustainability/metrics/{id}")]
async fn update_metric(
    id: web::Path<String>,
    store: web::Data<dyn DocumentStore>,
    web::Json(form): web::Json<SustainabilityMetricForm>,
) -> impl Responder {
    let id = match parse_document_id(id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };
    let payload: NewSustainabilityMetric = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    respond_no_content(admin::update_entity(
        &id,
        &payload,
        &repo::<SustainabilityMetric>(store),
    ))
}

#[delete("/api/admin/sustainability/metrics/{id}")]
async fn delete_metric(
    id: web::Path<String>,
    store: web::Data<dyn DocumentStore>,
) -> impl Responder {
    match parse_document_id(id.into_inner()) {
        Ok(id) => respond_no_content(admin::delete_entity(
            &id,
            &repo::<SustainabilityMetric>(store),
        )),
        Err(e) => error_response(e),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_stories)
        .service(get_story)
        .service(create_story)
        .service(update_story)
        .service(delete_story)
        .service(list_posts)
        .service(get_post)
        .service(create_post)
        .service(update_post)
        .service(delete_post)
        .service(list_metrics)
        .service(create_metric)
        .service(update_metric)
        .service(delete_metric);
}
