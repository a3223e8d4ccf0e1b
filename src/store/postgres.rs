// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::{QuestionStore, StoreError};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// Postgres-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations in `./migrations`.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories =
            sqlx::query_as::<_, Category>(r#"SELECT id, type FROM categories ORDER BY id"#)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to fetch categories: {:?}", e);
                    e
                })?;

        Ok(categories)
    }

    async fn category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let category =
            sqlx::query_as::<_, Category>(r#"SELECT id, type FROM categories WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to fetch category {}: {:?}", id, e);
                    e
                })?;

        Ok(category)
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch questions: {:?}", e);
            e
        })?;

        Ok(questions)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let created = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create question: {:?}", e);
            e
        })?;

        Ok(created)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question {}: {:?}", id, e);
                e
            })?;

        Ok(result.rows_affected() > 0)
    }
}
