use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::Faq;

#[derive(Debug, Error)]
pub enum FaqRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FaqRepository: Send + Sync {
    async fn save(&self, faq: &Faq) -> Result<(), FaqRepositoryError>;
    /// FAQs of one document in generation order.
    async fn find_by_document_id(&self, document_id: Uuid) -> Result<Vec<Faq>, FaqRepositoryError>;
}
