//! Admin CRUD endpoints for categories.
//!
//! Writes go through the category service so the two-level hierarchy
//! invariant is enforced.

use actix_web::{Responder, delete, get, post, put, web};

use crate::domain::category::{Category, NewCategory};
use crate::forms::categories::CategoryForm;
use crate::repository::{DocumentStore, Repository};
use crate::services::{ServiceError, admin, categories as category_service};

use super::{error_response, parse_document_id, respond_created, respond_json, respond_no_content};

fn repo(store: web::Data<dyn DocumentStore>) -> Repository<Category> {
    Repository::new(store.into_inner())
}

#[get("/api/admin/categories")]
async fn list(store: web::Data<dyn DocumentStore>) -> impl Responder {
    respond_json(admin::list_entities(&repo(store)))
}

#[get("/api/admin/categories/{id}")]
async fn get(id: web::Path<String>, store: web::Data<dyn DocumentStore>) -> impl Responder {
    match parse_document_id(id.into_inner()) {
        Ok(id) => respond_json(admin::get_entity(&id, &repo(store))),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/categories")]
async fn create(
    store: web::Data<dyn DocumentStore>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let payload: NewCategory = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    respond_created(category_service::create_category(&payload, &repo(store)))
}

#[put("/api/admin/categories/{id}")]
async fn update(
    id: web::Path<String>,
    store: web::Data<dyn DocumentStore>,
    web::Json(form): web::Json<CategoryForm>,
) -> impl Responder {
    let id = match parse_document_id(id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };
    let payload: NewCategory = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    respond_no_content(category_service::update_category(&id, &payload, &repo(store)))
}

#[delete("/api/admin/categories/{id}")]
async fn remove(id: web::Path<String>, store: web::Data<dyn DocumentStore>) -> impl Responder {
    match parse_document_id(id.into_inner()) {
        Ok(id) => respond_no_content(category_service::delete_category(&id, &repo(store))),
        Err(e) => error_response(e),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(get)
        .service(create)
        .service(update)
        .service(remove);
}
