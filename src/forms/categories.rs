use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{DocumentId, NonEmptyString, Slug, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub parent_category_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category form validation failed: {0}")]
    Validation(String),
    #[error("Category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CategoryForm> for NewCategory {
    type Error = CategoryFormError;

    fn try_from(value: CategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            slug: Slug::new(value.slug)?,
            name: NonEmptyString::new(value.name)?,
            description: value.description,
            hero_image: value.hero_image,
            order: value.order.unwrap_or(100),
            parent_category_id: value
                .parent_category_id
                .map(DocumentId::new)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_default_order() {
        let form = CategoryForm {
            slug: "oils".to_string(),
            name: "Olive Oils".to_string(),
            description: None,
            hero_image: None,
            order: None,
            parent_category_id: None,
        };
        let payload: NewCategory = form.try_into().unwrap();
        assert_eq!(payload.order, 100);
    }

    #[test]
    fn rejects_invalid_slug() {
        let form = CategoryForm {
            slug: "Olive Oils".to_string(),
            name: "Olive Oils".to_string(),
            description: None,
            hero_image: None,
            order: None,
            parent_category_id: None,
        };
        let payload: Result<NewCategory, _> = form.try_into();
        assert!(payload.is_err());
    }
}
