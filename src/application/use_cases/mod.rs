pub mod delete_document;
pub mod list_documents;
pub mod list_faqs;
pub mod update_document;
pub mod upload_document;

pub use delete_document::DeleteDocumentUseCase;
pub use list_documents::ListDocumentsUseCase;
pub use list_faqs::ListFaqsUseCase;
pub use update_document::UpdateDocumentUseCase;
pub use upload_document::UploadDocumentUseCase;
