//! Admin CRUD service functions, generic over the entity type.
//!
//! The domain repositories are thin instantiations of one generic wrapper,
//! so their admin operations are too. Entity-specific invariants (category
//! hierarchy depth) live in their own modules and compose with these.

use serde::Serialize;

use crate::domain::types::DocumentId;
use crate::repository::{CollectionEntity, Repository, RepositoryError};

use super::{ServiceError, ServiceResult};

pub(super) fn map_repo_error(err: RepositoryError, action: &str) -> ServiceError {
    match err {
        RepositoryError::ReadOnly(collection) => {
            ServiceError::Form(format!("the {collection} collection is read-only"))
        }
        err => {
            log::error!("failed to {action}: {err}");
            ServiceError::Internal
        }
    }
}

/// List every entity in the collection.
pub fn list_entities<T: CollectionEntity>(repo: &Repository<T>) -> ServiceResult<Vec<T>> {
    repo.get_all()
        .map_err(|e| map_repo_error(e, T::COLLECTION.as_str()))
}

/// Fetch one entity; a missing id is [`ServiceError::NotFound`], so the
/// admin panel can tell a deleted record from an empty collection.
pub fn get_entity<T: CollectionEntity>(
    id: &DocumentId,
    repo: &Repository<T>,
) -> ServiceResult<T> {
    match repo.get_by_id(id) {
        Ok(Some(entity)) => Ok(entity),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(map_repo_error(e, T::COLLECTION.as_str())),
    }
}

/// Persist a new entity, returning the store-generated id.
pub fn create_entity<T: CollectionEntity>(
    payload: &T::New,
    repo: &Repository<T>,
) -> ServiceResult<DocumentId> {
    repo.create(payload)
        .map_err(|e| map_repo_error(e, T::COLLECTION.as_str()))
}

/// Merge the payload into an existing entity. The existence check runs
/// first so a stale admin form gets a 404 instead of silently no-opping.
pub fn update_entity<T: CollectionEntity, P: Serialize>(
    id: &DocumentId,
    payload: &P,
    repo: &Repository<T>,
) -> ServiceResult<()> {
    match repo.get_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => return Err(map_repo_error(e, T::COLLECTION.as_str())),
    }
    repo.update(id, payload)
        .map_err(|e| map_repo_error(e, T::COLLECTION.as_str()))
}

/// Delete an existing entity; a missing id is [`ServiceError::NotFound`].
pub fn delete_entity<T: CollectionEntity>(
    id: &DocumentId,
    repo: &Repository<T>,
) -> ServiceResult<()> {
    match repo.get_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => return Err(map_repo_error(e, T::COLLECTION.as_str())),
    }
    repo.delete(id)
        .map_err(|e| map_repo_error(e, T::COLLECTION.as_str()))
}
