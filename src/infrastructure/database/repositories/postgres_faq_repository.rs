use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::Faq;
use crate::domain::repositories::{FaqRepository, faq_repository::FaqRepositoryError};
use crate::infrastructure::database::models::{FaqModel, NewFaqModel};
use crate::infrastructure::database::schema::faqs;
use crate::infrastructure::database::{DbPool, get_connection_from_pool};

pub struct PostgresFaqRepository {
    pool: DbPool,
}

impl PostgresFaqRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaqRepository for PostgresFaqRepository {
    async fn save(&self, faq: &Faq) -> Result<(), FaqRepositoryError> {
        let new_faq = NewFaqModel::from(faq);
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = get_connection_from_pool(&pool).map_err(|e| {
                FaqRepositoryError::DatabaseError(format!("Failed to get database connection: {}", e))
            })?;

            diesel::insert_into(faqs::table)
                .values(&new_faq)
                .execute(&mut conn)
                .map_err(|e| FaqRepositoryError::DatabaseError(format!("Failed to save FAQ: {}", e)))
        })
        .await
        .map_err(|e| FaqRepositoryError::DatabaseError(format!("Task join error: {}", e)))??;

        Ok(())
    }

    async fn find_by_document_id(&self, document_id: Uuid) -> Result<Vec<Faq>, FaqRepositoryError> {
        let pool = self.pool.clone();

        let models = tokio::task::spawn_blocking(move || {
            let mut conn = get_connection_from_pool(&pool).map_err(|e| {
                FaqRepositoryError::DatabaseError(format!("Failed to get database connection: {}", e))
            })?;

            faqs::table
                .filter(faqs::document_id.eq(document_id))
                .order(faqs::generated_date.asc())
                .select(FaqModel::as_select())
                .load::<FaqModel>(&mut conn)
                .map_err(|e| FaqRepositoryError::DatabaseError(format!("Failed to list FAQs: {}", e)))
        })
        .await
        .map_err(|e| FaqRepositoryError::DatabaseError(format!("Task join error: {}", e)))??;

        Ok(models.into_iter().map(Faq::from).collect())
    }
}
