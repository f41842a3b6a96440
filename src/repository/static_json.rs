//! Read-only [`DocumentStore`] backed by the bundled JSON fixture data.
//!
//! Each collection is one JSON array file in the data directory
//! (`categories.json`, `products.json`, ...). Every document is validated
//! against the typed entity schema at load time; a malformed fixture fails
//! the load rather than surfacing later as a half-broken page.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::category::Category;
use crate::domain::editorial::{StoryPost, SustainabilityMetric, SustainabilityPost};
use crate::domain::location::Location;
use crate::domain::product::Product;
use crate::domain::recipe::Recipe;
use crate::domain::types::{DocumentId, Slug};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    Collection, Document, DocumentStore, FieldFilter, SortDirection, sort_documents,
};

/// In-memory store serving the bundled fixture collections. Rejects writes.
pub struct StaticJsonStore {
    collections: HashMap<Collection, Vec<Document>>,
}

impl StaticJsonStore {
    /// Load every collection file under `data_dir`. A missing file yields an
    /// empty collection; a file that fails to parse or validate aborts the
    /// load.
    pub fn load(data_dir: &Path) -> RepositoryResult<Self> {
        let mut collections = HashMap::new();
        for collection in Collection::ALL {
            let path = fixture_path(data_dir, collection);
            let documents = if path.exists() {
                load_fixture(&path, collection)?
            } else {
                log::warn!(
                    "static data file {} not found, serving {} as empty",
                    path.display(),
                    collection
                );
                Vec::new()
            };
            collections.insert(collection, documents);
        }
        Ok(Self { collections })
    }

    fn documents(&self, collection: Collection) -> Vec<Document> {
        self.collections
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }
}

fn fixture_path(data_dir: &Path, collection: Collection) -> PathBuf {
    data_dir.join(format!("{}.json", collection.as_str()))
}

fn load_fixture(path: &Path, collection: Collection) -> RepositoryResult<Vec<Document>> {
    let static_err = |reason: String| RepositoryError::StaticData {
        path: path.display().to_string(),
        reason,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| static_err(e.to_string()))?;
    let entries: Vec<Map<String, Value>> =
        serde_json::from_str(&raw).map_err(|e| static_err(e.to_string()))?;

    let mut documents = Vec::with_capacity(entries.len());
    for mut fields in entries {
        let id = match fields.remove("id") {
            Some(Value::String(id)) => DocumentId::new(id)
                .map_err(|e| static_err(e.to_string()))?,
            _ => return Err(static_err("document is missing a string id".to_string())),
        };
        let document = Document::new(id, fields);
        validate_shape(collection, &document).map_err(|e| {
            static_err(format!("document {}: {e}", document.id))
        })?;
        documents.push(document);
    }
    Ok(documents)
}

/// Check a fixture document against the typed schema for its collection.
fn validate_shape(collection: Collection, document: &Document) -> Result<(), serde_json::Error> {
    let doc = document.clone();
    match collection {
        Collection::Products => doc.decode::<Product>().map(drop),
        Collection::Categories => doc.decode::<Category>().map(drop),
        Collection::Recipes => doc.decode::<Recipe>().map(drop),
        Collection::Locations => doc.decode::<Location>().map(drop),
        Collection::Stories => doc.decode::<StoryPost>().map(drop),
        Collection::SustainabilityPosts => doc.decode::<SustainabilityPost>().map(drop),
        Collection::SustainabilityMetrics => doc.decode::<SustainabilityMetric>().map(drop),
    }
}

impl DocumentStore for StaticJsonStore {
    fn fetch_all(&self, collection: Collection) -> RepositoryResult<Vec<Document>> {
        Ok(self.documents(collection))
    }

    fn fetch_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> RepositoryResult<Option<Document>> {
        Ok(self
            .documents(collection)
            .into_iter()
            .find(|doc| &doc.id == id))
    }

    fn fetch_by_slug(
        &self,
        collection: Collection,
        slug: &Slug,
    ) -> RepositoryResult<Option<Document>> {
        Ok(self
            .documents(collection)
            .into_iter()
            .find(|doc| doc.slug() == Some(slug.as_str())))
    }

    fn fetch_where(
        &self,
        collection: Collection,
        filter: &FieldFilter,
    ) -> RepositoryResult<Vec<Document>> {
        let mut docs = self.documents(collection);
        docs.retain(|doc| filter.matches(&doc.fields));
        Ok(docs)
    }

    fn fetch_ordered(
        &self,
        collection: Collection,
        field: &str,
        direction: SortDirection,
    ) -> RepositoryResult<Vec<Document>> {
        let mut docs = self.documents(collection);
        sort_documents(&mut docs, field, direction);
        Ok(docs)
    }

    fn insert(
        &self,
        collection: Collection,
        _fields: Map<String, Value>,
    ) -> RepositoryResult<DocumentId> {
        Err(RepositoryError::ReadOnly(collection.as_str()))
    }

    fn merge(
        &self,
        collection: Collection,
        _id: &DocumentId,
        _patch: Map<String, Value>,
    ) -> RepositoryResult<()> {
        Err(RepositoryError::ReadOnly(collection.as_str()))
    }

    fn remove(&self, collection: Collection, _id: &DocumentId) -> RepositoryResult<()> {
        Err(RepositoryError::ReadOnly(collection.as_str()))
    }
}
