use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::Document as DomainDocument;
use crate::infrastructure::database::schema::documents;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DocumentModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    pub uploaded_by: String,
    pub upload_date: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewDocumentModel {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    pub uploaded_by: String,
    pub upload_date: DateTime<Utc>,
}

/// Only the mutable columns; content, uploader and upload date never change.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DocumentChangesModel {
    pub title: String,
    pub description: String,
}

impl From<&DomainDocument> for NewDocumentModel {
    fn from(document: &DomainDocument) -> Self {
        Self {
            id: document.id(),
            title: document.title().to_string(),
            description: document.description().to_string(),
            content: document.content().to_string(),
            uploaded_by: document.uploaded_by().to_string(),
            upload_date: document.upload_date(),
        }
    }
}

impl From<&DomainDocument> for DocumentChangesModel {
    fn from(document: &DomainDocument) -> Self {
        Self {
            title: document.title().to_string(),
            description: document.description().to_string(),
        }
    }
}

impl From<DocumentModel> for DomainDocument {
    fn from(model: DocumentModel) -> Self {
        DomainDocument::restore(
            model.id,
            model.title,
            model.description,
            model.content,
            model.uploaded_by,
            model.upload_date,
        )
    }
}
