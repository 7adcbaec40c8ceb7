use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::ApplicationError;
use crate::domain::repositories::DocumentRepository;

pub struct DeleteDocumentUseCase {
    document_repository: Arc<dyn DocumentRepository>,
}

impl DeleteDocumentUseCase {
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            document_repository,
        }
    }

    /// Removes the document and, through the repository, all of its FAQs.
    pub async fn execute(&self, document_id: Uuid) -> Result<(), ApplicationError> {
        if !self.document_repository.delete(document_id).await? {
            return Err(ApplicationError::NotFound(document_id));
        }

        tracing::info!("Deleted document {} and its FAQs", document_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::FaqSynthesisService;
    use crate::application::use_cases::{ListFaqsUseCase, UploadDocumentUseCase};
    use crate::application::use_cases::upload_document::UploadDocumentRequest;
    use crate::domain::repositories::FaqRepository;
    use crate::test_support::{InMemoryStore, ScriptedGenerator};

    #[tokio::test]
    async fn test_delete_cascades_to_faqs() {
        let store = Arc::new(InMemoryStore::new());
        let synthesis = Arc::new(FaqSynthesisService::new(
            Arc::new(ScriptedGenerator::new(&["Q1", "Q2"], "A")),
            store.clone(),
        ));
        let upload = UploadDocumentUseCase::new(store.clone(), synthesis);
        let document_id = upload
            .execute(UploadDocumentRequest {
                title: "t".to_string(),
                description: "d".to_string(),
                content_type: Some("text/plain".to_string()),
                file_data: b"content".to_vec(),
                uploaded_by: "alice".to_string(),
            })
            .await
            .unwrap()
            .document_id;
        assert_eq!(store.find_by_document_id(document_id).await.unwrap().len(), 2);

        DeleteDocumentUseCase::new(store.clone())
            .execute(document_id)
            .await
            .unwrap();

        assert!(store.find_by_document_id(document_id).await.unwrap().is_empty());
        let err = ListFaqsUseCase::new(store.clone(), store.clone())
            .execute(document_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_unknown_document() {
        let store = Arc::new(InMemoryStore::new());
        let missing = Uuid::new_v4();

        let err = DeleteDocumentUseCase::new(store)
            .execute(missing)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("Document with ID {missing} not found.")
        );
    }
}
