use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::application::ports::{GenerationError, GenerationParams, TextGenerator};
use crate::domain::entities::Faq;
use crate::domain::repositories::FaqRepository;

pub const QUESTION_COUNT: u32 = 5;
pub const MAX_GENERATION_LENGTH: u32 = 256;
pub const NO_ANSWER_PLACEHOLDER: &str = "No answer available.";

#[derive(Debug, Error)]
pub enum FaqSynthesisError {
    #[error("FAQ generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("Failed to generate any FAQs from the provided document.")]
    NoQuestions,
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

pub struct FaqSynthesisService {
    text_generator: Arc<dyn TextGenerator>,
    faq_repository: Arc<dyn FaqRepository>,
}

impl FaqSynthesisService {
    pub fn new(
        text_generator: Arc<dyn TextGenerator>,
        faq_repository: Arc<dyn FaqRepository>,
    ) -> Self {
        Self {
            text_generator,
            faq_repository,
        }
    }

    /// Generates questions for `content`, answers each distinct one and stores
    /// every pair as soon as its answer is known.
    ///
    /// Pairs stored before a failure stay in the repository; callers that need
    /// all-or-nothing semantics must clean up themselves.
    pub async fn synthesize(
        &self,
        document_id: Uuid,
        content: &str,
    ) -> Result<Vec<Faq>, FaqSynthesisError> {
        let questions = self.generate_questions(content).await?;
        if questions.is_empty() {
            return Err(FaqSynthesisError::NoQuestions);
        }

        let mut seen = HashSet::new();
        let mut faqs = Vec::new();

        for question in questions {
            if !seen.insert(question.clone()) {
                continue;
            }

            let answer = self.answer_question(&question, content).await?;
            let faq = Faq::new(document_id, question, answer);

            self.faq_repository
                .save(&faq)
                .await
                .map_err(|e| FaqSynthesisError::RepositoryError(e.to_string()))?;

            faqs.push(faq);
        }

        tracing::info!(
            "Synthesized {} FAQs for document {} using {}",
            faqs.len(),
            document_id,
            self.text_generator.model_name()
        );

        Ok(faqs)
    }

    async fn generate_questions(&self, content: &str) -> Result<Vec<String>, FaqSynthesisError> {
        let prompt = question_prompt(content);
        let candidates = self
            .text_generator
            .generate(
                &prompt,
                GenerationParams::beam_search(MAX_GENERATION_LENGTH, QUESTION_COUNT),
            )
            .await?;

        tracing::debug!("Model returned {} question candidates", candidates.len());

        Ok(candidates
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn answer_question(
        &self,
        question: &str,
        content: &str,
    ) -> Result<String, FaqSynthesisError> {
        let prompt = answer_prompt(question, content);
        let candidates = self
            .text_generator
            .generate(&prompt, GenerationParams::single(MAX_GENERATION_LENGTH))
            .await?;

        Ok(candidates
            .into_iter()
            .next()
            .unwrap_or_else(|| NO_ANSWER_PLACEHOLDER.to_string()))
    }
}

fn question_prompt(content: &str) -> String {
    format!("Generate {QUESTION_COUNT} FAQs based on the following text:\n\n{content}")
}

fn answer_prompt(question: &str, content: &str) -> String {
    format!("Answer the question '{question}' based on the text: {content}")
}
