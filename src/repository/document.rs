//! [`DocumentStore`] implementation backed by Diesel and SQLite.
//!
//! Documents are rows of a single `documents` table keyed by
//! `(collection, id)`, with the JSON fields stored as text and the slug
//! mirrored into an indexed column for the one query the store answers
//! directly. Filtering and ordering materialize the collection and evaluate
//! in memory; collections here are tens of documents.

use chrono::Utc;
use diesel::prelude::*;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::db::{DbConnection, DbPool};
use crate::domain::types::{DocumentId, Slug};
use crate::models::document::{DocumentRow, NewDocumentRow};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    Collection, Document, DocumentStore, FieldFilter, SortDirection, sort_documents,
};

/// Document store persisting collections in SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the store to be
/// passed around freely between handlers.
#[derive(Clone)]
pub struct DieselDocumentStore {
    pool: DbPool,
}

impl DieselDocumentStore {
    /// Create a new store from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    fn load_collection(&self, target: Collection) -> RepositoryResult<Vec<Document>> {
        use crate::schema::documents;

        let mut conn = self.conn()?;

        let rows = documents::table
            .filter(documents::collection.eq(target.as_str()))
            .order((documents::created_at.asc(), documents::id.asc()))
            .load::<DocumentRow>(&mut conn)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

impl DocumentStore for DieselDocumentStore {
    fn fetch_all(&self, collection: Collection) -> RepositoryResult<Vec<Document>> {
        self.load_collection(collection)
    }

    fn fetch_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> RepositoryResult<Option<Document>> {
        use crate::schema::documents;

        let mut conn = self.conn()?;

        let row = documents::table
            .filter(documents::collection.eq(collection.as_str()))
            .filter(documents::id.eq(id.as_str()))
            .first::<DocumentRow>(&mut conn)
            .optional()?;

        row.map(TryInto::try_into).transpose()
    }

    fn fetch_by_slug(
        &self,
        collection: Collection,
        slug: &Slug,
    ) -> RepositoryResult<Option<Document>> {
        use crate::schema::documents;

        let mut conn = self.conn()?;

        let row = documents::table
            .filter(documents::collection.eq(collection.as_str()))
            .filter(documents::slug.eq(Some(slug.as_str())))
            .order((documents::created_at.asc(), documents::id.asc()))
            .first::<DocumentRow>(&mut conn)
            .optional()?;

        row.map(TryInto::try_into).transpose()
    }

    fn fetch_where(
        &self,
        collection: Collection,
        filter: &FieldFilter,
    ) -> RepositoryResult<Vec<Document>> {
        let mut docs = self.load_collection(collection)?;
        docs.retain(|doc| filter.matches(&doc.fields));
        Ok(docs)
    }

    fn fetch_ordered(
        &self,
        collection: Collection,
        field: &str,
        direction: SortDirection,
    ) -> RepositoryResult<Vec<Document>> {
        let mut docs = self.load_collection(collection)?;
        sort_documents(&mut docs, field, direction);
        Ok(docs)
    }

    fn insert(
        &self,
        collection: Collection,
        fields: Map<String, Value>,
    ) -> RepositoryResult<DocumentId> {
        use crate::schema::documents;

        let mut conn = self.conn()?;

        let id = Uuid::new_v4().simple().to_string();
        let slug = fields.get("slug").and_then(Value::as_str).map(String::from);
        let serialized = serde_json::to_string(&Value::Object(fields))?;
        let now = Utc::now().naive_utc();

        let row = NewDocumentRow {
            collection: collection.as_str(),
            id: &id,
            slug: slug.as_deref(),
            fields: &serialized,
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(documents::table)
            .values(row)
            .execute(&mut conn)?;

        DocumentId::new(id).map_err(|e| RepositoryError::Validation(e.to_string()))
    }

    fn merge(
        &self,
        collection: Collection,
        id: &DocumentId,
        patch: Map<String, Value>,
    ) -> RepositoryResult<()> {
        use crate::schema::documents;

        let mut conn = self.conn()?;

        conn.transaction(|conn| {
            let row = documents::table
                .filter(documents::collection.eq(collection.as_str()))
                .filter(documents::id.eq(id.as_str()))
                .first::<DocumentRow>(conn)
                .optional()?;

            // Merging into a missing document is a silent no-op.
            let Some(row) = row else {
                return Ok(());
            };

            let mut fields: Map<String, Value> = serde_json::from_str(&row.fields)?;
            for (key, value) in patch {
                fields.insert(key, value);
            }

            let slug = fields.get("slug").and_then(Value::as_str).map(String::from);
            let serialized = serde_json::to_string(&Value::Object(fields))?;

            diesel::update(
                documents::table
                    .filter(documents::collection.eq(collection.as_str()))
                    .filter(documents::id.eq(id.as_str())),
            )
            .set((
                documents::fields.eq(serialized),
                documents::slug.eq(slug),
                documents::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(conn)?;

            Ok(())
        })
    }

    fn remove(&self, collection: Collection, id: &DocumentId) -> RepositoryResult<()> {
        use crate::schema::documents;

        let mut conn = self.conn()?;

        diesel::delete(
            documents::table
                .filter(documents::collection.eq(collection.as_str()))
                .filter(documents::id.eq(id.as_str())),
        )
        .execute(&mut conn)?;

        Ok(())
    }
}
