use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::Document;

#[derive(Debug, Error)]
pub enum DocumentRepositoryError {
    #[error("Document not found: {0}")]
    NotFound(Uuid),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn save(&self, document: &Document) -> Result<Uuid, DocumentRepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Document>, DocumentRepositoryError>;
    /// All documents, oldest upload first.
    async fn find_all(&self) -> Result<Vec<Document>, DocumentRepositoryError>;
    async fn update(&self, document: &Document) -> Result<(), DocumentRepositoryError>;
    /// Deletes the document together with its FAQs. Returns false when the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, DocumentRepositoryError>;
}
