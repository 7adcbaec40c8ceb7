use thiserror::Error;
use uuid::Uuid;

use crate::application::services::FaqSynthesisError;
use crate::domain::entities::document::DocumentValidationError;
use crate::domain::repositories::{
    document_repository::DocumentRepositoryError, faq_repository::FaqRepositoryError,
};

/// Every way a use case can fail.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Validation(String),
    #[error("Document with ID {0} not found.")]
    NotFound(Uuid),
    #[error("{0}")]
    Generation(String),
    #[error("{0}")]
    Internal(String),
}

impl From<DocumentValidationError> for ApplicationError {
    fn from(error: DocumentValidationError) -> Self {
        ApplicationError::Validation(error.to_string())
    }
}

impl From<DocumentRepositoryError> for ApplicationError {
    fn from(error: DocumentRepositoryError) -> Self {
        match error {
            DocumentRepositoryError::NotFound(id) => ApplicationError::NotFound(id),
            other => ApplicationError::Internal(other.to_string()),
        }
    }
}

impl From<FaqRepositoryError> for ApplicationError {
    fn from(error: FaqRepositoryError) -> Self {
        ApplicationError::Internal(error.to_string())
    }
}

impl From<FaqSynthesisError> for ApplicationError {
    fn from(error: FaqSynthesisError) -> Self {
        match error {
            FaqSynthesisError::RepositoryError(msg) => ApplicationError::Internal(msg),
            other => ApplicationError::Generation(other.to_string()),
        }
    }
}
