//! Contact form submissions.

use serde::Serialize;

use crate::forms::contact::{ContactForm, ContactPayload};

use super::ServiceResult;

/// Response body returned to the contact form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
}

impl ContactReceipt {
    fn accepted() -> Self {
        Self {
            success: true,
            message: "Thanks for getting in touch. We'll reply within two business days."
                .to_string(),
        }
    }
}

/// Validate and accept a contact submission.
///
/// A filled honeypot field marks a bot; the submission is dropped but still
/// acknowledged as success so the sender learns nothing. Delivery downstream
/// of this service (mail, ticketing) is handled out-of-band; accepted
/// submissions are logged.
pub fn submit_contact(form: ContactForm) -> ServiceResult<ContactReceipt> {
    if !form.website.trim().is_empty() {
        log::info!("contact submission discarded by honeypot");
        return Ok(ContactReceipt::accepted());
    }

    let payload: ContactPayload = form.try_into()?;

    log::info!(
        "contact submission from {} <{}> on {}",
        payload.name,
        payload.email,
        payload.topic
    );
    Ok(ContactReceipt::accepted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Alex Petridis".to_string(),
            email: "alex@example.com".to_string(),
            topic: "wholesale".to_string(),
            message: "Interested in carrying your oils in our shops.".to_string(),
            website: String::new(),
            captcha_token: "tok-123".to_string(),
        }
    }

    #[test]
    fn accepts_valid_submission() {
        let receipt = submit_contact(valid_form()).unwrap();
        assert!(receipt.success);
    }

    #[test]
    fn honeypot_is_acknowledged_but_dropped() {
        let form = ContactForm {
            website: "https://spam.example".to_string(),
            ..valid_form()
        };
        let receipt = submit_contact(form).unwrap();
        assert!(receipt.success);
    }

    #[test]
    fn rejects_unknown_topic() {
        let form = ContactForm {
            topic: "lottery".to_string(),
            ..valid_form()
        };
        assert!(matches!(submit_contact(form), Err(ServiceError::Form(_))));
    }

    #[test]
    fn rejects_invalid_email() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        assert!(matches!(submit_contact(form), Err(ServiceError::Form(_))));
    }
}
