use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{ContactTopic, NonEmptyString, TypeConstraintError};

/// Raw contact form body. `website` is the honeypot field: hidden in the
/// rendered form, so any value in it marks an automated submission.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub topic: String,
    #[validate(length(min = 10))]
    pub message: String,
    #[serde(default)]
    pub website: String,
    #[validate(length(min = 1))]
    pub captcha_token: String,
}

/// Validated contact submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactPayload {
    pub name: NonEmptyString,
    pub email: String,
    pub topic: ContactTopic,
    pub message: NonEmptyString,
    pub captcha_token: String,
}

#[derive(Debug, Error)]
pub enum ContactFormError {
    #[error("Contact form validation failed: {0}")]
    Validation(String),
    #[error("Contact form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ContactFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ContactFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ContactForm> for ContactPayload {
    type Error = ContactFormError;

    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: NonEmptyString::new(value.name)?,
            email: value.email.trim().to_string(),
            topic: ContactTopic::try_from(value.topic.as_str())?,
            message: NonEmptyString::new(value.message)?,
            captcha_token: value.captcha_token,
        })
    }
}
