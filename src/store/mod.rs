// src/store/mod.rs

//! Backing-store abstraction for the question catalog.
//!
//! Stores persist and enumerate; they do not filter. Selection logic
//! (paging, search, category filtering, exclusion) lives in
//! [`crate::catalog`] and relies on the ordering guarantees below.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All categories, ordered by identity ascending.
    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn category(&self, id: i64) -> Result<Option<Category>, StoreError>;

    /// All questions, ordered by identity ascending.
    async fn questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Persists a question and returns it with its newly assigned identity.
    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Returns `false` when no question had this identity.
    async fn delete_question(&self, id: i64) -> Result<bool, StoreError>;
}
