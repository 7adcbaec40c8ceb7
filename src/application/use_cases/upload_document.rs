use std::sync::Arc;
use uuid::Uuid;

use crate::application::errors::ApplicationError;
use crate::application::services::FaqSynthesisService;
use crate::domain::entities::Document;
use crate::domain::repositories::DocumentRepository;

pub const ALLOWED_CONTENT_TYPES: &[&str] = &["text/plain"];

#[derive(Debug, Clone)]
pub struct UploadDocumentRequest {
    pub title: String,
    pub description: String,
    pub content_type: Option<String>,
    pub file_data: Vec<u8>,
    pub uploaded_by: String,
}

#[derive(Debug, Clone)]
pub struct UploadDocumentResponse {
    pub document_id: Uuid,
    pub faqs_created: usize,
}

pub struct UploadDocumentUseCase {
    document_repository: Arc<dyn DocumentRepository>,
    faq_synthesis: Arc<FaqSynthesisService>,
}

impl UploadDocumentUseCase {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        faq_synthesis: Arc<FaqSynthesisService>,
    ) -> Self {
        Self {
            document_repository,
            faq_synthesis,
        }
    }

    pub async fn execute(
        &self,
        request: UploadDocumentRequest,
    ) -> Result<UploadDocumentResponse, ApplicationError> {
        if !is_allowed_content_type(request.content_type.as_deref()) {
            return Err(ApplicationError::Validation(format!(
                "Invalid file type. Only the following types are allowed: {}",
                ALLOWED_CONTENT_TYPES.join(", ")
            )));
        }

        let content = String::from_utf8(request.file_data).map_err(|_| {
            ApplicationError::Validation("The uploaded document is not valid UTF-8 text.".to_string())
        })?;

        let document = Document::new(
            &request.title,
            &request.description,
            &content,
            request.uploaded_by,
        )?;

        let document_id = self.document_repository.save(&document).await?;
        tracing::info!(
            "Stored document {} uploaded by {}",
            document_id,
            document.uploaded_by()
        );

        match self
            .faq_synthesis
            .synthesize(document_id, document.content())
            .await
        {
            Ok(faqs) => Ok(UploadDocumentResponse {
                document_id,
                faqs_created: faqs.len(),
            }),
            Err(e) => {
                tracing::warn!(
                    "FAQ synthesis failed for document {}, removing it: {}",
                    document_id,
                    e
                );
                if let Err(cleanup) = self.document_repository.delete(document_id).await {
                    tracing::error!(
                        "Failed to remove document {} after synthesis failure: {}",
                        document_id,
                        cleanup
                    );
                }
                Err(e.into())
            }
        }
    }
}

/// Compares the mime essence, so `text/plain; charset=utf-8` is accepted.
fn is_allowed_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    ALLOWED_CONTENT_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(essence))
}
