use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{Award, Certification, NewProduct, RetailerLink, SeoBlock};
use crate::domain::types::{DocumentId, NonEmptyString, Slug, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub category_id: String,
    #[serde(default)]
    pub short_copy: String,
    #[serde(default)]
    pub long_copy: String,
    #[serde(default)]
    pub variety: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub specs: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub nutrition: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub related_recipe_ids: Vec<String>,
    #[serde(default)]
    pub retailer_links: Vec<RetailerLink>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub seo: Option<SeoBlock>,
}

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("Product form validation failed: {0}")]
    Validation(String),
    #[error("Product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ProductForm> for NewProduct {
    type Error = ProductFormError;

    fn try_from(value: ProductForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            slug: Slug::new(value.slug)?,
            title: NonEmptyString::new(value.title)?,
            category_id: DocumentId::new(value.category_id)?,
            short_copy: value.short_copy,
            long_copy: value.long_copy,
            variety: value.variety,
            images: value.images,
            specs: value.specs,
            nutrition: value.nutrition,
            certifications: value.certifications,
            awards: value.awards,
            related_recipe_ids: value
                .related_recipe_ids
                .into_iter()
                .map(DocumentId::new)
                .collect::<Result<_, _>>()?,
            retailer_links: value.retailer_links,
            featured: value.featured,
            seo: value.seo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_form() -> ProductForm {
        ProductForm {
            slug: "extra-virgin-500ml".to_string(),
            title: "Extra Virgin Olive Oil 500ml".to_string(),
            category_id: "oils".to_string(),
            short_copy: String::new(),
            long_copy: String::new(),
            variety: None,
            images: vec![],
            specs: None,
            nutrition: None,
            certifications: vec![],
            awards: vec![],
            related_recipe_ids: vec![],
            retailer_links: vec![],
            featured: None,
            seo: None,
        }
    }

    #[test]
    fn converts_minimal_form() {
        let payload: NewProduct = minimal_form().try_into().unwrap();
        assert_eq!(payload.slug, "extra-virgin-500ml");
        assert!(payload.images.is_empty());
    }

    #[test]
    fn rejects_blank_title() {
        let form = ProductForm {
            title: "   ".to_string(),
            ..minimal_form()
        };
        let payload: Result<NewProduct, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn converts_related_recipe_ids() {
        let form = ProductForm {
            related_recipe_ids: vec!["r1".to_string(), "r2".to_string()],
            ..minimal_form()
        };
        let payload: NewProduct = form.try_into().unwrap();
        assert_eq!(payload.related_recipe_ids.len(), 2);
    }
}
