pub mod postgres_document_repository;
pub mod postgres_faq_repository;

pub use postgres_document_repository::PostgresDocumentRepository;
pub use postgres_faq_repository::PostgresFaqRepository;
