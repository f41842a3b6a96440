//! Error conversion glue between the form, domain and service layers.
//!
//! The domain layer must not depend on service/repository error types;
//! conversions from its constraint errors live here instead.

use crate::domain::types::TypeConstraintError;
use crate::forms::categories::CategoryFormError;
use crate::forms::contact::ContactFormError;
use crate::forms::editorial::EditorialFormError;
use crate::forms::locations::LocationFormError;
use crate::forms::products::ProductFormError;
use crate::forms::recipes::RecipeFormError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<CategoryFormError> for ServiceError {
    fn from(val: CategoryFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<ProductFormError> for ServiceError {
    fn from(val: ProductFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<RecipeFormError> for ServiceError {
    fn from(val: RecipeFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<LocationFormError> for ServiceError {
    fn from(val: LocationFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<EditorialFormError> for ServiceError {
    fn from(val: EditorialFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<ContactFormError> for ServiceError {
    fn from(val: ContactFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
