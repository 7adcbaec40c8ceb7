use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::use_cases::list_faqs::ListFaqsResponse;
use crate::domain::entities::{Document, Faq};

pub const UPLOAD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize)]
pub struct UploadDocumentResponseDto {
    pub success: bool,
    pub document_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateDocumentQuery {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateDocumentResponseDto {
    pub success: bool,
    pub document_id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    pub uploaded_by: String,
    pub upload_date: String,
}

#[derive(Debug, Serialize)]
pub struct FaqResponseDto {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentFaqsResponseDto {
    pub document: DocumentResponseDto,
    pub faqs: Vec<FaqResponseDto>,
}

impl From<Document> for DocumentResponseDto {
    fn from(document: Document) -> Self {
        Self {
            id: document.id(),
            title: document.title().to_string(),
            description: document.description().to_string(),
            content: document.content().to_string(),
            uploaded_by: document.uploaded_by().to_string(),
            upload_date: document.upload_date().format(UPLOAD_DATE_FORMAT).to_string(),
        }
    }
}

impl From<Faq> for FaqResponseDto {
    fn from(faq: Faq) -> Self {
        Self {
            question: faq.question().to_string(),
            answer: faq.answer().to_string(),
        }
    }
}

impl From<ListFaqsResponse> for DocumentFaqsResponseDto {
    fn from(response: ListFaqsResponse) -> Self {
        Self {
            document: DocumentResponseDto::from(response.document),
            faqs: response.faqs.into_iter().map(FaqResponseDto::from).collect(),
        }
    }
}
