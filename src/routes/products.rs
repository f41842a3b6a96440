//! Admin CRUD endpoints for products.

use actix_web::{Responder, delete, get, post, put, web};

use crate::domain::product::{NewProduct, Product};
use crate::forms::products::ProductForm;
use crate::repository::{DocumentStore, Repository};
use crate::services::{ServiceError, admin};

use super::{error_response, parse_document_id, respond_created, respond_json, respond_no_content};

fn repo(store: web::Data<dyn DocumentStore>) -> Repository<Product> {
    Repository::new(store.into_inner())
}

#[get("/api/admin/products")]
async fn list(store: web::Data<dyn DocumentStore>) -> impl Responder {
    respond_json(admin::list_entities(&repo(store)))
}

#[get("/api/admin/products/{id}")]
async fn get(id: web::Path<String>, store: web::Data<dyn DocumentStore>) -> impl Responder {
    match parse_document_id(id.into_inner()) {
        Ok(id) => respond_json(admin::get_entity(&id, &repo(store))),
        Err(e) => error_response(e),
    }
}

#[post("/api/admin/products")]
async fn create(
    store: web::Data<dyn DocumentStore>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    let payload: NewProduct = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    respond_created(admin::create_entity(&payload, &repo(store)))
}

#[put("/api/admin/products/{id}")]
async fn update(
    id: web::Path<String>,
    store: web::Data<dyn DocumentStore>,
    web::Json(form): web::Json<ProductForm>,
) -> impl Responder {
    let id = match parse_document_id(id.into_inner()) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };
    let payload: NewProduct = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };
    respond_no_content(admin::update_entity(&id, &payload, &repo(store)))
}

#[delete("/api/admin/products/{id}")]
async fn remove(id: web::Path<String>, store: web::Data<dyn DocumentStore>) -> impl Responder {
    match parse_document_id(id.into_inner()) {
        Ok(id) => respond_no_content(admin::delete_entity(&id, &repo(store))),
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
