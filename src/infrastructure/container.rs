use std::sync::Arc;

use crate::{
    application::{
        ports::TextGenerator,
        services::FaqSynthesisService,
        use_cases::{
            DeleteDocumentUseCase, ListDocumentsUseCase, ListFaqsUseCase, UpdateDocumentUseCase,
            UploadDocumentUseCase,
        },
    },
    config::AppConfig,
    domain::repositories::{DocumentRepository, FaqRepository},
    infrastructure::{
        database::{
            create_connection_pool,
            repositories::{PostgresDocumentRepository, PostgresFaqRepository},
            run_migrations,
        },
        external_services::HuggingFaceTextGenerator,
    },
    presentation::http::handlers::DocumentHandler,
};

pub struct AppContainer {
    // HTTP Handlers
    pub document_handler: Arc<DocumentHandler>,
}

impl AppContainer {
    pub fn new(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let db_pool = create_connection_pool(&config.database)?;
        run_migrations(&db_pool)?;

        let document_repository: Arc<dyn DocumentRepository> =
            Arc::new(PostgresDocumentRepository::new(db_pool.clone()));
        let faq_repository: Arc<dyn FaqRepository> =
            Arc::new(PostgresFaqRepository::new(db_pool));

        let generator = HuggingFaceTextGenerator::new(config.generation.clone())?;
        tracing::info!("Using generation endpoint {}", generator.endpoint());
        let text_generator: Arc<dyn TextGenerator> = Arc::new(generator);

        let faq_synthesis = Arc::new(FaqSynthesisService::new(
            text_generator,
            faq_repository.clone(),
        ));

        let upload_use_case = Arc::new(UploadDocumentUseCase::new(
            document_repository.clone(),
            faq_synthesis,
        ));
        let update_use_case = Arc::new(UpdateDocumentUseCase::new(document_repository.clone()));
        let delete_use_case = Arc::new(DeleteDocumentUseCase::new(document_repository.clone()));
        let list_documents_use_case =
            Arc::new(ListDocumentsUseCase::new(document_repository.clone()));
        let list_faqs_use_case = Arc::new(ListFaqsUseCase::new(
            document_repository,
            faq_repository,
        ));

        let document_handler = Arc::new(DocumentHandler::new(
            upload_use_case,
            update_use_case,
            delete_use_case,
            list_documents_use_case,
            list_faqs_use_case,
        ));

        Ok(Self { document_handler })
    }
}
