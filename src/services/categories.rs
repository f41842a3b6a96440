//! Category admin operations.
//!
//! Categories are the one entity with a structural invariant the schemaless
//! store cannot enforce: the hierarchy is exactly two levels deep. Writes
//! that would create a deeper chain are rejected here.

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::DocumentId;
use crate::repository::{FieldFilter, Repository};

use super::admin::{self, map_repo_error};
use super::{ServiceError, ServiceResult};

fn ensure_valid_parent(
    parent_id: Option<&DocumentId>,
    own_id: Option<&DocumentId>,
    repo: &Repository<Category>,
) -> ServiceResult<()> {
    let Some(parent_id) = parent_id else {
        return Ok(());
    };
    if own_id == Some(parent_id) {
        return Err(ServiceError::Form(
            "a category cannot be its own parent".to_string(),
        ));
    }
    match repo.get_by_id(parent_id) {
        Ok(Some(parent)) if parent.is_subcategory() => Err(ServiceError::Form(format!(
            "category {} is itself a subcategory; the hierarchy is two levels deep",
            parent.slug
        ))),
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ServiceError::Form(format!(
            "parent category {parent_id} does not exist"
        ))),
        Err(e) => Err(map_repo_error(e, "load parent category")),
    }
}

fn has_children(id: &DocumentId, repo: &Repository<Category>) -> ServiceResult<bool> {
    repo.get_where(&FieldFilter::eq("parentCategoryId", id.as_str()))
        .map(|children| !children.is_empty())
        .map_err(|e| map_repo_error(e, "load subcategories"))
}

/// Persist a new category after checking the hierarchy invariant.
pub fn create_category(
    payload: &NewCategory,
    repo: &Repository<Category>,
) -> ServiceResult<DocumentId> {
    ensure_valid_parent(payload.parent_category_id.as_ref(), None, repo)?;
    admin::create_entity(payload, repo)
}

/// Update a category. Demoting a category that still has subcategories to a
/// subcategory would deepen the hierarchy and is rejected.
pub fn update_category(
    id: &DocumentId,
    payload: &NewCategory,
    repo: &Repository<Category>,
) -> ServiceResult<()> {
    ensure_valid_parent(payload.parent_category_id.as_ref(), Some(id), repo)?;
    if payload.parent_category_id.is_some() && has_children(id, repo)? {
        return Err(ServiceError::Form(
            "a category with subcategories cannot become a subcategory".to_string(),
        ));
    }
    admin::update_entity(id, payload, repo)
}

/// Delete a category. Subcategories and product references are left as-is;
/// the store enforces no referential integrity.
pub fn delete_category(id: &DocumentId, repo: &Repository<Category>) -> ServiceResult<()> {
    admin::delete_entity(id, repo)
}
