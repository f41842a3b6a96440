use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::editorial::{NewStoryPost, NewSustainabilityMetric, NewSustainabilityPost};
use crate::domain::types::{NonEmptyString, Pillar, Slug, TypeConstraintError};

#[derive(Debug, Error)]
pub enum EditorialFormError {
    #[error("Editorial form validation failed: {0}")]
    Validation(String),
    #[error("Editorial form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for EditorialFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for EditorialFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StoryForm {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub published_on: Option<String>,
}

impl TryFrom<StoryForm> for NewStoryPost {
    type Error = EditorialFormError;

    fn try_from(value: StoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            slug: Slug::new(value.slug)?,
            title: NonEmptyString::new(value.title)?,
            excerpt: value.excerpt,
            content: value.content,
            hero_image: value.hero_image,
            published_on: value.published_on,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityPostForm {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[validate(length(min = 1))]
    pub pillar: String,
    #[serde(default)]
    pub badges: Vec<String>,
}

impl TryFrom<SustainabilityPostForm> for NewSustainabilityPost {
    type Error = EditorialFormError;

    fn try_from(value: SustainabilityPostForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            slug: Slug::new(value.slug)?,
            title: NonEmptyString::new(value.title)?,
            excerpt: value.excerpt,
            content: value.content,
            pillar: Pillar::try_from(value.pillar.as_str())?,
            badges: value.badges,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityMetricForm {
    #[validate(length(min = 1))]
    pub label: String,
    #[validate(length(min = 1))]
    pub value: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub footnote: Option<String>,
}

impl TryFrom<SustainabilityMetricForm> for NewSustainabilityMetric {
    type Error = EditorialFormError;

    fn try_from(value: SustainabilityMetricForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            label: NonEmptyString::new(value.label)?,
            value: value.value,
            unit: value.unit,
            footnote: value.footnote,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sustainability_post_requires_known_pillar() {
        let form = SustainabilityPostForm {
            slug: "regenerative-groves".to_string(),
            title: "Regenerative Groves".to_string(),
            excerpt: String::new(),
            content: String::new(),
            pillar: "marketing".to_string(),
            badges: vec![],
        };
        let payload: Result<NewSustainabilityPost, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn story_converts() {
        let form = StoryForm {
            slug: "the-first-harvest".to_string(),
            title: "The First Harvest".to_string(),
            excerpt: "Where it all began.".to_string(),
            content: String::new(),
            hero_image: None,
            published_on: Some("2019-11-02".to_string()),
        };
        let payload: NewStoryPost = form.try_into().unwrap();
        assert_eq!(payload.slug, "the-first-harvest");
    }
}
