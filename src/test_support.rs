//! In-memory collaborators shared by the unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use uuid::Uuid;

use crate::application::ports::{GenerationError, GenerationParams, TextGenerator};
use crate::domain::entities::{Document, Faq};
use crate::domain::repositories::{
    DocumentRepository, FaqRepository, document_repository::DocumentRepositoryError,
    faq_repository::FaqRepositoryError,
};

/// Backs both repositories so document deletes can cascade to FAQs.
#[derive(Default)]
pub struct InMemoryStore {
    documents: Mutex<Vec<Document>>,
    faqs: Mutex<Vec<Faq>>,
    fail_faq_saves_after: Mutex<Option<usize>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> Vec<Document> {
        self.documents.lock().unwrap().clone()
    }

    pub fn faqs(&self) -> Vec<Faq> {
        self.faqs.lock().unwrap().clone()
    }

    /// Makes every FAQ insert after the first `n` fail.
    pub fn fail_faq_saves_after(&self, n: usize) {
        *self.fail_faq_saves_after.lock().unwrap() = Some(n);
    }
}

#[async_trait]
impl DocumentRepository for InMemoryStore {
    async fn save(&self, document: &Document) -> Result<Uuid, DocumentRepositoryError> {
        self.documents.lock().unwrap().push(document.clone());
        Ok(document.id())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Document>, DocumentRepositoryError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id() == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Document>, DocumentRepositoryError> {
        Ok(self.documents())
    }

    async fn update(&self, document: &Document) -> Result<(), DocumentRepositoryError> {
        let mut documents = self.documents.lock().unwrap();
        let slot = documents
            .iter_mut()
            .find(|d| d.id() == document.id())
            .ok_or(DocumentRepositoryError::NotFound(document.id()))?;
        *slot = document.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DocumentRepositoryError> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|d| d.id() != id);
        let deleted = documents.len() < before;
        if deleted {
            self.faqs.lock().unwrap().retain(|f| !f.belongs_to_document(id));
        }
        Ok(deleted)
    }
}

#[async_trait]
impl FaqRepository for InMemoryStore {
    async fn save(&self, faq: &Faq) -> Result<(), FaqRepositoryError> {
        let mut faqs = self.faqs.lock().unwrap();
        if let Some(limit) = *self.fail_faq_saves_after.lock().unwrap() {
            if faqs.len() >= limit {
                return Err(FaqRepositoryError::DatabaseError(
                    "connection reset".to_string(),
                ));
            }
        }
        faqs.push(faq.clone());
        Ok(())
    }

    async fn find_by_document_id(&self, document_id: Uuid) -> Result<Vec<Faq>, FaqRepositoryError> {
        Ok(self
            .faqs()
            .into_iter()
            .filter(|f| f.belongs_to_document(document_id))
            .collect())
    }
}

/// Replays queued responses in order; once the queue is drained every call
/// answers with `fallback`.
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<Vec<String>, GenerationError>>>,
    fallback: Vec<String>,
    calls: Mutex<Vec<(String, GenerationParams)>>,
}

impl ScriptedGenerator {
    /// First call yields `questions`, every later call yields `answer`.
    pub fn new(questions: &[&str], answer: &str) -> Self {
        Self::scripted(
            vec![Ok(questions.iter().map(|q| q.to_string()).collect())],
            vec![answer.to_string()],
        )
    }

    pub fn scripted(
        responses: Vec<Result<Vec<String>, GenerationError>>,
        fallback: Vec<String>,
    ) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, GenerationParams)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<Vec<String>, GenerationError> {
        self.calls.lock().unwrap().push((prompt.to_string(), params));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(self.fallback.clone()))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
