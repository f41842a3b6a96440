//! Generic document repository.
//!
//! Content lives in named collections of schemaless JSON documents. The
//! [`DocumentStore`] trait is the single seam between the application and the
//! backing store; [`DieselDocumentStore`] persists documents in SQLite,
//! [`StaticJsonStore`] serves the bundled fixture data read-only, and the
//! typed [`Repository`] wrapper maps documents to domain entities.
//!
//! Store handles are explicit: every store is constructed from its inputs and
//! passed around as an `Arc<dyn DocumentStore>`, so tests can substitute
//! their own implementation.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::domain::category::{Category, NewCategory};
use crate::domain::editorial::{
    NewStoryPost, NewSustainabilityMetric, NewSustainabilityPost, StoryPost, SustainabilityMetric,
    SustainabilityPost,
};
use crate::domain::location::{Location, NewLocation};
use crate::domain::product::{NewProduct, Product};
use crate::domain::recipe::{NewRecipe, Recipe};
use crate::domain::types::{DocumentId, Slug};

pub mod document;
pub mod errors;
pub mod static_json;

pub use document::DieselDocumentStore;
pub use errors::{RepositoryError, RepositoryResult};
pub use static_json::StaticJsonStore;

/// The named collections this application stores documents in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Categories,
    Recipes,
    Locations,
    Stories,
    SustainabilityPosts,
    SustainabilityMetrics,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Products,
        Collection::Categories,
        Collection::Recipes,
        Collection::Locations,
        Collection::Stories,
        Collection::SustainabilityPosts,
        Collection::SustainabilityMetrics,
    ];

    /// Collection name used in persistence and fixture file names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Categories => "categories",
            Self::Recipes => "recipes",
            Self::Locations => "locations",
            Self::Stories => "stories",
            Self::SustainabilityPosts => "sustainability_posts",
            Self::SustainabilityMetrics => "sustainability_metrics",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A schemaless document: a store-assigned id plus its JSON fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: DocumentId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// The document's slug field, if it carries one.
    pub fn slug(&self) -> Option<&str> {
        self.fields.get("slug").and_then(Value::as_str)
    }

    /// Map the document onto a typed entity, injecting the id.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id.into_inner()));
        serde_json::from_value(Value::Object(fields))
    }
}

/// Serialize a payload into document fields, dropping any id it carries.
pub(crate) fn encode_fields<P: Serialize>(payload: &P) -> RepositoryResult<Map<String, Value>> {
    match serde_json::to_value(payload)? {
        Value::Object(mut fields) => {
            fields.remove("id");
            Ok(fields)
        }
        _ => Err(RepositoryError::NotAnObject),
    }
}

/// Filter operator pushed down to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOp {
    /// Field equals the given value.
    Eq,
    /// Field is an array containing the given value.
    ArrayContains,
}

/// A single-field filter evaluated against serialized field names.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

impl FieldFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Eq,
            value: value.into(),
        }
    }

    pub fn array_contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::ArrayContains,
            value: value.into(),
        }
    }

    /// Evaluate the filter against a document's fields. A missing field
    /// never matches.
    pub fn matches(&self, fields: &Map<String, Value>) -> bool {
        let Some(actual) = fields.get(&self.field) else {
            return false;
        };
        match self.op {
            FilterOp::Eq => actual == &self.value,
            FilterOp::ArrayContains => actual
                .as_array()
                .is_some_and(|items| items.contains(&self.value)),
        }
    }
}

/// Sort direction for [`DocumentStore::fetch_ordered`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Total order over JSON scalars used by `fetch_ordered`: null, then
/// booleans, then numbers, then strings; arrays and objects sort last.
pub(crate) fn compare_field_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None | Some(Value::Null) => 0,
            Some(Value::Bool(_)) => 1,
            Some(Value::Number(_)) => 2,
            Some(Value::String(_)) => 3,
            Some(Value::Array(_)) | Some(Value::Object(_)) => 4,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Sort documents by a field. Stable, so equal keys keep store order.
pub(crate) fn sort_documents(docs: &mut [Document], field: &str, direction: SortDirection) {
    docs.sort_by(|a, b| {
        let ordering = compare_field_values(a.fields.get(field), b.fields.get(field));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Uniform CRUD and query operations over named document collections.
///
/// Every operation is a single attempt against the backing store; callers
/// that want degradation catch [`RepositoryError`] themselves.
pub trait DocumentStore: Send + Sync {
    /// Every document in the collection, in creation order. No pagination.
    fn fetch_all(&self, collection: Collection) -> RepositoryResult<Vec<Document>>;

    /// A single document by id. Absence is `None`, not an error.
    fn fetch_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> RepositoryResult<Option<Document>>;

    /// First document whose indexed slug matches.
    fn fetch_by_slug(
        &self,
        collection: Collection,
        slug: &Slug,
    ) -> RepositoryResult<Option<Document>>;

    /// Documents matching a single-field filter, in creation order.
    fn fetch_where(
        &self,
        collection: Collection,
        filter: &FieldFilter,
    ) -> RepositoryResult<Vec<Document>>;

    /// The full collection sorted by one field.
    fn fetch_ordered(
        &self,
        collection: Collection,
        field: &str,
        direction: SortDirection,
    ) -> RepositoryResult<Vec<Document>>;

    /// Insert a document, returning the store-generated id. The store does
    /// not validate the shape of `fields`.
    fn insert(
        &self,
        collection: Collection,
        fields: Map<String, Value>,
    ) -> RepositoryResult<DocumentId>;

    /// Shallow-merge `patch` into an existing document. Merging into a
    /// missing document is a silent no-op.
    fn merge(
        &self,
        collection: Collection,
        id: &DocumentId,
        patch: Map<String, Value>,
    ) -> RepositoryResult<()>;

    /// Delete a document by id. Deleting a missing document is not an error.
    fn remove(&self, collection: Collection, id: &DocumentId) -> RepositoryResult<()>;
}

/// Binds an entity type to its collection and creation payload.
pub trait CollectionEntity: DeserializeOwned {
    const COLLECTION: Collection;
    type New: Serialize;
}

impl CollectionEntity for Product {
    const COLLECTION: Collection = Collection::Products;
    type New = NewProduct;
}

impl CollectionEntity for Category {
    const COLLECTION: Collection = Collection::Categories;
    type New = NewCategory;
}

impl CollectionEntity for Recipe {
    const COLLECTION: Collection = Collection::Recipes;
    type New = NewRecipe;
}

impl CollectionEntity for Location {
    const COLLECTION: Collection = Collection::Locations;
    type New = NewLocation;
}

impl CollectionEntity for StoryPost {
    const COLLECTION: Collection = Collection::Stories;
    type New = NewStoryPost;
}

impl CollectionEntity for SustainabilityPost {
    const COLLECTION: Collection = Collection::SustainabilityPosts;
    type New = NewSustainabilityPost;
}

impl CollectionEntity for SustainabilityMetric {
    const COLLECTION: Collection = Collection::SustainabilityMetrics;
    type New = NewSustainabilityMetric;
}

/// Typed view over one collection of a [`DocumentStore`].
///
/// The six domain repositories are instantiations of this one generic
/// wrapper; it owns no state beyond the shared store handle and is cheap to
/// clone.
pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<T: CollectionEntity> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    fn decode_all(documents: Vec<Document>) -> RepositoryResult<Vec<T>> {
        documents
            .into_iter()
            .map(|doc| doc.decode::<T>().map_err(RepositoryError::from))
            .collect()
    }

    /// Every entity in the collection, in creation order.
    pub fn get_all(&self) -> RepositoryResult<Vec<T>> {
        Self::decode_all(self.store.fetch_all(T::COLLECTION)?)
    }

    /// A single entity by id, or `None`.
    pub fn get_by_id(&self, id: &DocumentId) -> RepositoryResult<Option<T>> {
        self.store
            .fetch_by_id(T::COLLECTION, id)?
            .map(|doc| doc.decode::<T>().map_err(RepositoryError::from))
            .transpose()
    }

    /// A single entity by slug, or `None`.
    pub fn get_by_slug(&self, slug: &Slug) -> RepositoryResult<Option<T>> {
        self.store
            .fetch_by_slug(T::COLLECTION, slug)?
            .map(|doc| doc.decode::<T>().map_err(RepositoryError::from))
            .transpose()
    }

    /// Entities matching a single-field filter.
    pub fn get_where(&self, filter: &FieldFilter) -> RepositoryResult<Vec<T>> {
        Self::decode_all(self.store.fetch_where(T::COLLECTION, filter)?)
    }

    /// The full collection sorted by one serialized field name.
    pub fn get_ordered(&self, field: &str, direction: SortDirection) -> RepositoryResult<Vec<T>> {
        Self::decode_all(self.store.fetch_ordered(T::COLLECTION, field, direction)?)
    }

    /// Persist a new entity, returning the store-generated id.
    pub fn create(&self, new: &T::New) -> RepositoryResult<DocumentId> {
        self.store.insert(T::COLLECTION, encode_fields(new)?)
    }

    /// Shallow-merge the serialized fields of `patch` into the document.
    pub fn update<P: Serialize>(&self, id: &DocumentId, patch: &P) -> RepositoryResult<()> {
        self.store.merge(T::COLLECTION, id, encode_fields(patch)?)
    }

    /// Delete by id. Idempotent.
    pub fn delete(&self, id: &DocumentId) -> RepositoryResult<()> {
        self.store.remove(T::COLLECTION, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_filter_eq_matches_scalars() {
        let filter = FieldFilter::eq("categoryId", "oils");
        let fields = json!({"categoryId": "oils"});
        assert!(filter.matches(fields.as_object().unwrap()));

        let fields = json!({"categoryId": "vinegars"});
        assert!(!filter.matches(fields.as_object().unwrap()));
    }

    #[test]
    fn field_filter_missing_field_never_matches() {
        let filter = FieldFilter::eq("featured", true);
        let fields = json!({"title": "Picual"});
        assert!(!filter.matches(fields.as_object().unwrap()));
    }

    #[test]
    fn field_filter_array_contains() {
        let filter = FieldFilter::array_contains("relatedProductIds", "prod-1");
        let fields = json!({"relatedProductIds": ["prod-1", "prod-2"]});
        assert!(filter.matches(fields.as_object().unwrap()));

        let fields = json!({"relatedProductIds": []});
        assert!(!filter.matches(fields.as_object().unwrap()));
    }

    #[test]
    fn decode_injects_document_id() {
        let doc = Document::new(
            DocumentId::new("cat-1").unwrap(),
            json!({"slug": "oils", "name": "Olive Oils"})
                .as_object()
                .cloned()
                .unwrap(),
        );
        let category: Category = doc.decode().unwrap();
        assert_eq!(category.id.as_str(), "cat-1");
        assert_eq!(category.order, 100);
    }

    #[test]
    fn encode_fields_strips_id() {
        let fields = encode_fields(&json!({"id": "x", "slug": "oils"})).unwrap();
        assert!(!fields.contains_key("id"));
        assert_eq!(fields.get("slug"), Some(&json!("oils")));
    }

    #[test]
    fn sort_documents_orders_numbers_before_strings() {
        let mut docs = vec![
            Document::new(
                DocumentId::new("a").unwrap(),
                json!({"order": "last"}).as_object().cloned().unwrap(),
            ),
            Document::new(
                DocumentId::new("b").unwrap(),
                json!({"order": 10}).as_object().cloned().unwrap(),
            ),
        ];
        sort_documents(&mut docs, "order", SortDirection::Asc);
        assert_eq!(docs[0].id.as_str(), "b");
    }
}
