use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::DocumentId;
use crate::repository::Document;
use crate::repository::errors::RepositoryError;

/// Diesel model representing one row of the `documents` table.
#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::schema::documents)]
pub struct DocumentRow {
    pub collection: String,
    pub id: String,
    pub slug: Option<String>,
    pub fields: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`DocumentRow`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::documents)]
pub struct NewDocumentRow<'a> {
    pub collection: &'a str,
    pub id: &'a str,
    pub slug: Option<&'a str>,
    pub fields: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<DocumentRow> for Document {
    type Error = RepositoryError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let fields = serde_json::from_str(&row.fields)?;
        let id =
            DocumentId::new(row.id).map_err(|e| RepositoryError::Validation(e.to_string()))?;
        Ok(Document::new(id, fields))
    }
}
