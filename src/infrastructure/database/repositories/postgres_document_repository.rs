use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::Document;
use crate::domain::repositories::{
    DocumentRepository, document_repository::DocumentRepositoryError,
};
use crate::infrastructure::database::models::{
    DocumentChangesModel, DocumentModel, NewDocumentModel,
};
use crate::infrastructure::database::schema::{documents, faqs};
use crate::infrastructure::database::{DbPool, connection::DbConnection, get_connection_from_pool};

pub struct PostgresDocumentRepository {
    pool: DbPool,
}

impl PostgresDocumentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Checks out a connection and runs `query` on the blocking thread pool.
    async fn run<T, F>(&self, query: F) -> Result<T, DocumentRepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut DbConnection) -> Result<T, DocumentRepositoryError> + Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = get_connection_from_pool(&pool)
                .map_err(|e| DocumentRepositoryError::DatabaseError(e.to_string()))?;
            query(&mut conn)
        })
        .await
        .map_err(|e| DocumentRepositoryError::DatabaseError(format!("Task join error: {}", e)))?
    }
}

#[async_trait]
impl DocumentRepository for PostgresDocumentRepository {
    async fn save(&self, document: &Document) -> Result<Uuid, DocumentRepositoryError> {
        let new_document = NewDocumentModel::from(document);

        self.run(move |conn| {
            diesel::insert_into(documents::table)
                .values(&new_document)
                .returning(documents::id)
                .get_result::<Uuid>(conn)
                .map_err(|e| {
                    DocumentRepositoryError::DatabaseError(format!("Failed to save document: {}", e))
                })
        })
        .await
    }

    async fn find_by_id(&self, document_id: Uuid) -> Result<Option<Document>, DocumentRepositoryError> {
        let result = self
            .run(move |conn| {
                documents::table
                    .find(document_id)
                    .select(DocumentModel::as_select())
                    .first::<DocumentModel>(conn)
                    .optional()
                    .map_err(|e| {
                        DocumentRepositoryError::DatabaseError(format!(
                            "Failed to find document: {}",
                            e
                        ))
                    })
            })
            .await?;

        Ok(result.map(Document::from))
    }

    async fn find_all(&self) -> Result<Vec<Document>, DocumentRepositoryError> {
        let models = self
            .run(|conn| {
                documents::table
                    .order(documents::upload_date.asc())
                    .select(DocumentModel::as_select())
                    .load::<DocumentModel>(conn)
                    .map_err(|e| {
                        DocumentRepositoryError::DatabaseError(format!(
                            "Failed to list documents: {}",
                            e
                        ))
                    })
            })
            .await?;

        Ok(models.into_iter().map(Document::from).collect())
    }

    async fn update(&self, document: &Document) -> Result<(), DocumentRepositoryError> {
        let document_id = document.id();
        let changes = DocumentChangesModel::from(document);

        let updated = self
            .run(move |conn| {
                diesel::update(documents::table.find(document_id))
                    .set(&changes)
                    .execute(conn)
                    .map_err(|e| {
                        DocumentRepositoryError::DatabaseError(format!(
                            "Failed to update document: {}",
                            e
                        ))
                    })
            })
            .await?;

        if updated == 0 {
            return Err(DocumentRepositoryError::NotFound(document_id));
        }
        Ok(())
    }

    async fn delete(&self, document_id: Uuid) -> Result<bool, DocumentRepositoryError> {
        let deleted = self
            .run(move |conn| {
                conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    let removed_faqs =
                        diesel::delete(faqs::table.filter(faqs::document_id.eq(document_id)))
                            .execute(conn)?;
                    let removed = diesel::delete(documents::table.find(document_id)).execute(conn)?;
                    tracing::debug!(
                        "Removed {} FAQs alongside document {}",
                        removed_faqs,
                        document_id
                    );
                    Ok(removed)
                })
                .map_err(|e| {
                    DocumentRepositoryError::DatabaseError(format!(
                        "Failed to delete document: {}",
                        e
                    ))
                })
            })
            .await?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::PgConnection;
    use diesel::r2d2::{ConnectionManager, Pool};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test(flavor = "current_thread")]
    async fn test_pool_checkout_does_not_block_runtime() {
        let manager = ConnectionManager::<PgConnection>::new("postgres://docfaq@127.0.0.1:1/docfaq");
        let pool = Pool::builder()
            .max_size(1)
            .min_idle(Some(0))
            .connection_timeout(Duration::from_millis(500))
            .build_unchecked(manager);
        let repository = PostgresDocumentRepository::new(pool);

        let ticks = Arc::new(AtomicUsize::new(0));
        let ticker = tokio::spawn({
            let ticks = ticks.clone();
            async move {
                loop {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    ticks.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        let result = repository.find_all().await;
        ticker.abort();

        assert!(matches!(
            result,
            Err(DocumentRepositoryError::DatabaseError(_))
        ));
        assert!(ticks.load(Ordering::SeqCst) >= 5);
    }
}
