use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    id: Uuid,
    document_id: Uuid,
    question: String,
    answer: String,
    generated_date: DateTime<Utc>,
}

impl Faq {
    pub fn new(document_id: Uuid, question: String, answer: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id,
            question,
            answer,
            generated_date: Utc::now(),
        }
    }

    pub fn restore(
        id: Uuid,
        document_id: Uuid,
        question: String,
        answer: String,
        generated_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            document_id,
            question,
            answer,
            generated_date,
        }
    }

    // Getters
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document_id(&self) -> Uuid {
        self.document_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn generated_date(&self) -> DateTime<Utc> {
        self.generated_date
    }

    pub fn belongs_to_document(&self, document_id: Uuid) -> bool {
        self.document_id == document_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_creation() {
        let document_id = Uuid::new_v4();
        let faq = Faq::new(
            document_id,
            "What colour is the sky?".to_string(),
            "Blue.".to_string(),
        );

        assert_eq!(faq.document_id(), document_id);
        assert_eq!(faq.question(), "What colour is the sky?");
        assert_eq!(faq.answer(), "Blue.");
        assert!(faq.belongs_to_document(document_id));
        assert!(!faq.belongs_to_document(Uuid::new_v4()));
    }
}
