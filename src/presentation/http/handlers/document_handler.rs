use axum::{
    Json,
    extract::{
        Multipart, Path, Query, State,
        multipart::MultipartRejection,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::use_cases::{
    DeleteDocumentUseCase, ListDocumentsUseCase, ListFaqsUseCase, UpdateDocumentUseCase,
    UploadDocumentUseCase, update_document::UpdateDocumentRequest,
    upload_document::UploadDocumentRequest,
};
use crate::presentation::http::dto::{
    DocumentFaqsResponseDto, DocumentResponseDto, MessageResponseDto, UpdateDocumentQuery,
    UpdateDocumentResponseDto, UploadDocumentResponseDto,
};
use crate::presentation::http::error::AppError;
use crate::presentation::http::extractors::CurrentUser;

pub struct DocumentHandler {
    upload_use_case: Arc<UploadDocumentUseCase>,
    update_use_case: Arc<UpdateDocumentUseCase>,
    delete_use_case: Arc<DeleteDocumentUseCase>,
    list_documents_use_case: Arc<ListDocumentsUseCase>,
    list_faqs_use_case: Arc<ListFaqsUseCase>,
}

impl DocumentHandler {
    pub fn new(
        upload_use_case: Arc<UploadDocumentUseCase>,
        update_use_case: Arc<UpdateDocumentUseCase>,
        delete_use_case: Arc<DeleteDocumentUseCase>,
        list_documents_use_case: Arc<ListDocumentsUseCase>,
        list_faqs_use_case: Arc<ListFaqsUseCase>,
    ) -> Self {
        Self {
            upload_use_case,
            update_use_case,
            delete_use_case,
            list_documents_use_case,
            list_faqs_use_case,
        }
    }

    /// Multipart fields: `title`, `description` and the `file` itself.
    pub async fn upload_document(
        State(handler): State<Arc<DocumentHandler>>,
        CurrentUser(username): CurrentUser,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let mut multipart = multipart?;
        let mut title = None;
        let mut description = None;
        let mut file = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to process form: {}", e)))?
        {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("title") => title = Some(read_text(field).await?),
                Some("description") => description = Some(read_text(field).await?),
                Some("file") => {
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await.map_err(|e| {
                        AppError::BadRequest(format!("Failed to read file data: {}", e))
                    })?;
                    file = Some((content_type, data.to_vec()));
                }
                _ => {}
            }
        }

        let (content_type, file_data) =
            file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

        let request = UploadDocumentRequest {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
            content_type,
            file_data,
            uploaded_by: username,
        };

        let response = handler.upload_use_case.execute(request).await?;
        tracing::info!(
            "Document {} uploaded with {} FAQs",
            response.document_id,
            response.faqs_created
        );

        Ok((
            StatusCode::OK,
            Json(UploadDocumentResponseDto {
                success: true,
                document_id: response.document_id,
            }),
        ))
    }

    pub async fn update_document(
        State(handler): State<Arc<DocumentHandler>>,
        _user: CurrentUser,
        path: Result<Path<Uuid>, PathRejection>,
        query: Result<Query<UpdateDocumentQuery>, QueryRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Path(document_id) = path?;
        let Query(query) = query?;
        let request = UpdateDocumentRequest {
            document_id,
            title: query.title,
            description: query.description,
        };

        let response = handler.update_use_case.execute(request).await?;

        Ok(Json(UpdateDocumentResponseDto {
            success: true,
            document_id: response.document_id,
            message: "Document updated successfully.".to_string(),
        }))
    }

    pub async fn delete_document(
        State(handler): State<Arc<DocumentHandler>>,
        _user: CurrentUser,
        path: Result<Path<Uuid>, PathRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Path(document_id) = path?;
        handler.delete_use_case.execute(document_id).await?;

        Ok(Json(MessageResponseDto {
            success: true,
            message: "Document and associated FAQs deleted successfully.".to_string(),
        }))
    }

    pub async fn list_documents(
        State(handler): State<Arc<DocumentHandler>>,
    ) -> Result<impl IntoResponse, AppError> {
        let documents = handler.list_documents_use_case.execute().await?;

        let dtos: Vec<DocumentResponseDto> = documents
            .into_iter()
            .map(DocumentResponseDto::from)
            .collect();

        Ok(Json(dtos))
    }

    pub async fn list_faqs(
        State(handler): State<Arc<DocumentHandler>>,
        path: Result<Path<Uuid>, PathRejection>,
    ) -> Result<impl IntoResponse, AppError> {
        let Path(document_id) = path?;
        let response = handler.list_faqs_use_case.execute(document_id).await?;

        Ok(Json(DocumentFaqsResponseDto::from(response)))
    }
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read form field: {}", e)))
}
