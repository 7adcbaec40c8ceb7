pub mod document_repository;
pub mod faq_repository;

pub use document_repository::DocumentRepository;
pub use faq_repository::FaqRepository;
