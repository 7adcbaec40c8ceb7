use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::presentation::http::handlers::DocumentHandler;

pub fn document_routes(document_handler: Arc<DocumentHandler>) -> Router {
    Router::new()
        .route("/upload_document/", post(DocumentHandler::upload_document))
        .route(
            "/update_document/{document_id}/",
            put(DocumentHandler::update_document),
        )
        .route(
            "/delete_document/{document_id}/",
            delete(DocumentHandler::delete_document),
        )
        .route("/documents/", get(DocumentHandler::list_documents))
        .route("/faqs/{document_id}/", get(DocumentHandler::list_faqs))
        .with_state(document_handler)
}
