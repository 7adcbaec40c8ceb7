use axum::{
    Json,
    extract::multipart::MultipartRejection,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::application::ApplicationError;
use crate::presentation::http::dto::ErrorResponseDto;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    GenerationFailed(String),
    #[error("Authentication required.")]
    Unauthorized,
    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::GenerationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            // reported in the payload, not as a server fault
            AppError::Internal(_) => StatusCode::OK,
        }
    }
}

impl From<ApplicationError> for AppError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Validation(msg) => AppError::BadRequest(msg),
            e @ ApplicationError::NotFound(_) => AppError::NotFound(e.to_string()),
            ApplicationError::Generation(msg) => AppError::GenerationFailed(msg),
            ApplicationError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(msg) = &self {
            tracing::error!("Request failed with internal error: {}", msg);
        }

        let body = ErrorResponseDto {
            success: false,
            error: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
