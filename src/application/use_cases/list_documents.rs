use std::sync::Arc;

use crate::application::errors::ApplicationError;
use crate::domain::entities::Document;
use crate::domain::repositories::DocumentRepository;

pub struct ListDocumentsUseCase {
    document_repository: Arc<dyn DocumentRepository>,
}

impl ListDocumentsUseCase {
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            document_repository,
        }
    }

    pub async fn execute(&self) -> Result<Vec<Document>, ApplicationError> {
        Ok(self.document_repository.find_all().await?)
    }
}
