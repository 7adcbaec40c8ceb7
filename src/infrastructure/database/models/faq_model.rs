use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::Faq as DomainFaq;
use crate::infrastructure::database::schema::faqs;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(super::DocumentModel, foreign_key = document_id))]
#[diesel(table_name = faqs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FaqModel {
    pub id: Uuid,
    pub document_id: Uuid,
    pub question: String,
    pub answer: String,
    pub generated_date: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = faqs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewFaqModel {
    pub id: Uuid,
    pub document_id: Uuid,
    pub question: String,
    pub answer: String,
    pub generated_date: DateTime<Utc>,
}

impl From<&DomainFaq> for NewFaqModel {
    fn from(faq: &DomainFaq) -> Self {
        Self {
            id: faq.id(),
            document_id: faq.document_id(),
            question: faq.question().to_string(),
            answer: faq.answer().to_string(),
            generated_date: faq.generated_date(),
        }
    }
}

impl From<FaqModel> for DomainFaq {
    fn from(model: FaqModel) -> Self {
        DomainFaq::restore(
            model.id,
            model.document_id,
            model.question,
            model.answer,
            model.generated_date,
        )
    }
}
