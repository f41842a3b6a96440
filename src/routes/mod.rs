//! HTTP route handlers. Thin wrappers over the service layer: parse and
//! validate input, call the service, map the result onto a JSON response.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::domain::types::DocumentId;
use crate::services::{ServiceError, ServiceResult};

pub mod categories;
pub mod contact;
pub mod content;
pub mod editorial;
pub mod locations;
pub mod products;
pub mod recipes;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct CreatedBody {
    id: String,
}

pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody {
            error: "not found".to_string(),
        }),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(ErrorBody { error: message })
        }
        ServiceError::Internal => HttpResponse::InternalServerError().finish(),
    }
}

pub(crate) fn respond_json<T: Serialize>(result: ServiceResult<T>) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(err) => error_response(err),
    }
}

pub(crate) fn respond_created(result: ServiceResult<DocumentId>) -> HttpResponse {
    match result {
        Ok(id) => HttpResponse::Created().json(CreatedBody {
            id: id.into_inner(),
        }),
        Err(err) => error_response(err),
    }
}

pub(crate) fn respond_no_content(result: ServiceResult<()>) -> HttpResponse {
    match result {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err),
    }
}

pub(crate) fn parse_document_id(raw: String) -> ServiceResult<DocumentId> {
    DocumentId::new(raw).map_err(ServiceError::from)
}

/// Register every route on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    content::configure(cfg);
    contact::configure(cfg);
    products::configure(cfg);
    categories::configure(cfg);
    recipes::configure(cfg);
    locations::configure(cfg);
    editorial::configure(cfg);
}
