use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::SeoBlock;
use crate::domain::recipe::{Ingredient, NewRecipe, RecipeTimes};
use crate::domain::types::{
    Difficulty, DocumentId, NonEmptyString, ServingCount, Slug, TypeConstraintError,
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeForm {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub times: RecipeTimes,
    pub servings: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_product_ids: Vec<String>,
    #[validate(length(min = 1))]
    pub difficulty: String,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub seo: Option<SeoBlock>,
}

#[derive(Debug, Error)]
pub enum RecipeFormError {
    #[error("Recipe form validation failed: {0}")]
    Validation(String),
    #[error("Recipe form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for RecipeFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for RecipeFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<RecipeForm> for NewRecipe {
    type Error = RecipeFormError;

    fn try_from(value: RecipeForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            slug: Slug::new(value.slug)?,
            title: NonEmptyString::new(value.title)?,
            hero_image: value.hero_image,
            description: value.description,
            ingredients: value.ingredients,
            steps: value.steps,
            times: value.times,
            servings: ServingCount::new(value.servings)?,
            tags: value.tags,
            related_product_ids: value
                .related_product_ids
                .into_iter()
                .map(DocumentId::new)
                .collect::<Result<_, _>>()?,
            difficulty: Difficulty::try_from(value.difficulty.as_str())?,
            featured: value.featured,
            seo: value.seo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_form() -> RecipeForm {
        RecipeForm {
            slug: "greek-salad".to_string(),
            title: "Greek Salad".to_string(),
            hero_image: String::new(),
            description: String::new(),
            ingredients: vec![],
            steps: vec![],
            times: RecipeTimes::default(),
            servings: 4,
            tags: vec![],
            related_product_ids: vec![],
            difficulty: "easy".to_string(),
            featured: None,
            seo: None,
        }
    }

    #[test]
    fn converts_minimal_form() {
        let payload: NewRecipe = minimal_form().try_into().unwrap();
        assert_eq!(payload.difficulty, Difficulty::Easy);
        assert_eq!(payload.servings.get(), 4);
    }

    #[test]
    fn rejects_zero_servings() {
        let form = RecipeForm {
            servings: 0,
            ..minimal_form()
        };
        let payload: Result<NewRecipe, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let form = RecipeForm {
            difficulty: "expert".to_string(),
            ..minimal_form()
        };
        let payload: Result<NewRecipe, _> = form.try_into();
        assert!(payload.is_err());
    }
}
