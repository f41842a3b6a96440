//! Contact form endpoint.

use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::forms::contact::ContactForm;
use crate::services::ServiceError;
use crate::services::contact::submit_contact;

#[post("/api/contact")]
async fn submit(web::Json(form): web::Json<ContactForm>) -> impl Responder {
    match submit_contact(form) {
        Ok(receipt) => HttpResponse::Ok().json(receipt),
        Err(ServiceError::Form(message) | ServiceError::TypeConstraint(message)) => {
            HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": message,
            }))
        }
        Err(err) => {
            log::error!("contact submission failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit);
}
