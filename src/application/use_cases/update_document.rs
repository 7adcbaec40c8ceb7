use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::ApplicationError;
use crate::domain::repositories::DocumentRepository;

#[derive(Debug, Clone)]
pub struct UpdateDocumentRequest {
    pub document_id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateDocumentResponse {
    pub document_id: Uuid,
}

pub struct UpdateDocumentUseCase {
    document_repository: Arc<dyn DocumentRepository>,
}

impl UpdateDocumentUseCase {
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self {
            document_repository,
        }
    }

    pub async fn execute(
        &self,
        request: UpdateDocumentRequest,
    ) -> Result<UpdateDocumentResponse, ApplicationError> {
        let mut document = self
            .document_repository
            .find_by_id(request.document_id)
            .await?
            .ok_or(ApplicationError::NotFound(request.document_id))?;

        document.update_details(request.title.as_deref(), request.description.as_deref())?;
        self.document_repository.update(&document).await?;

        tracing::info!("Updated document {}", document.id());

        Ok(UpdateDocumentResponse {
            document_id: document.id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Document;
    use crate::test_support::InMemoryStore;

    async fn seeded() -> (Arc<InMemoryStore>, Uuid) {
        let store = Arc::new(InMemoryStore::new());
        let document = Document::new("Sky", "Colours", "The sky is blue.", "alice".to_string())
            .unwrap();
        let id = DocumentRepository::save(store.as_ref(), &document).await.unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn test_update_title_only() {
        let (store, id) = seeded().await;
        let use_case = UpdateDocumentUseCase::new(store.clone());

        let response = use_case
            .execute(UpdateDocumentRequest {
                document_id: id,
                title: Some("  Weather ".to_string()),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(response.document_id, id);
        let document = &store.documents()[0];
        assert_eq!(document.title(), "Weather");
        assert_eq!(document.description(), "Colours");
    }

    #[tokio::test]
    async fn test_update_without_fields_is_rejected() {
        let (store, id) = seeded().await;
        let before = store.documents();
        let use_case = UpdateDocumentUseCase::new(store.clone());

        let err = use_case
            .execute(UpdateDocumentRequest {
                document_id: id,
                title: None,
                description: Some("   ".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Validation(_)));
        assert_eq!(err.to_string(), "No fields provided to update.");
        assert_eq!(store.documents(), before);
    }

    #[tokio::test]
    async fn test_update_unknown_document() {
        let (store, _) = seeded().await;
        let use_case = UpdateDocumentUseCase::new(store);
        let missing = Uuid::new_v4();

        let err = use_case
            .execute(UpdateDocumentRequest {
                document_id: missing,
                title: Some("t".to_string()),
                description: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound(id) if id == missing));
    }
}
