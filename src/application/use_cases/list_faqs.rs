use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::ApplicationError;
use crate::domain::entities::{Document, Faq};
use crate::domain::repositories::{DocumentRepository, FaqRepository};

#[derive(Debug, Clone)]
pub struct ListFaqsResponse {
    pub document: Document,
    pub faqs: Vec<Faq>,
}

pub struct ListFaqsUseCase {
    document_repository: Arc<dyn DocumentRepository>,
    faq_repository: Arc<dyn FaqRepository>,
}

impl ListFaqsUseCase {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        faq_repository: Arc<dyn FaqRepository>,
    ) -> Self {
        Self {
            document_repository,
            faq_repository,
        }
    }

    pub async fn execute(&self, document_id: Uuid) -> Result<ListFaqsResponse, ApplicationError> {
        let document = self
            .document_repository
            .find_by_id(document_id)
            .await?
            .ok_or(ApplicationError::NotFound(document_id))?;

        let faqs = self.faq_repository.find_by_document_id(document_id).await?;

        Ok(ListFaqsResponse { document, faqs })
    }
}
