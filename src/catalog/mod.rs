// src/catalog/mod.rs

//! The question catalog: listing, paging, search, category filtering and
//! play-round selection over a [`QuestionStore`].

pub mod pagination;

use std::{collections::HashSet, fmt, sync::Arc};

use crate::{
    config::QUESTIONS_PER_PAGE,
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    store::{QuestionStore, StoreError},
};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Missing or malformed input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced entity does not exist, or nothing matched a read.
    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One page of the question listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Number of questions across all pages.
    pub total_questions: usize,
}

#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn QuestionStore>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog").finish_non_exhaustive()
    }
}

impl Catalog {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// All categories, ordered by identity.
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.store.categories().await?)
    }

    /// Page `page` (1-based) of all questions ordered by identity, plus the total count.
    pub async fn list_questions(&self, page: usize) -> Result<QuestionPage, CatalogError> {
        let all = self.store.questions().await?;
        let questions = pagination::paginate(&all, page, QUESTIONS_PER_PAGE).to_vec();

        Ok(QuestionPage {
            questions,
            total_questions: all.len(),
        })
    }

    /// Questions whose text contains `term`, ignoring case.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, CatalogError> {
        if term.is_empty() {
            return Err(CatalogError::Validation(
                "search term must not be empty".to_string(),
            ));
        }

        let needle = term.to_lowercase();
        let found = self
            .store
            .questions()
            .await?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect();

        Ok(found)
    }

    /// Questions in `category_id`, ordered by identity.
    ///
    /// Fails with [`CatalogError::NotFound`] when no question matches, whether
    /// the category is unknown or merely empty.
    pub async fn questions_for_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, CatalogError> {
        let questions = self.category_questions(category_id).await?;

        if questions.is_empty() {
            return Err(CatalogError::NotFound(format!(
                "no questions in category {}",
                category_id
            )));
        }

        Ok(questions)
    }

    /// Questions in `category_id` whose identity is not in `exclude`.
    ///
    /// An empty result means every question was already asked. Only an
    /// unknown category is reported as [`CatalogError::NotFound`]. Entries
    /// of `exclude` that name no question in the category are ignored.
    pub async fn play_round(
        &self,
        category_id: i64,
        exclude: &HashSet<i64>,
    ) -> Result<Vec<Question>, CatalogError> {
        if self.store.category(category_id).await?.is_none() {
            return Err(CatalogError::NotFound(format!(
                "category {} does not exist",
                category_id
            )));
        }

        let mut questions = self.category_questions(category_id).await?;
        questions.retain(|q| !exclude.contains(&q.id));

        Ok(questions)
    }

    pub async fn create_question(&self, question: NewQuestion) -> Result<Question, CatalogError> {
        if question.question.trim().is_empty() {
            return Err(CatalogError::Validation(
                "question must not be blank".to_string(),
            ));
        }
        if question.answer.trim().is_empty() {
            return Err(CatalogError::Validation(
                "answer must not be blank".to_string(),
            ));
        }
        if self.store.category(question.category).await?.is_none() {
            return Err(CatalogError::Validation(format!(
                "category {} does not exist",
                question.category
            )));
        }

        let created = self.store.insert_question(question).await?;
        tracing::info!(id = created.id, category = created.category, "Question created");

        Ok(created)
    }

    /// Deleting an identity that does not exist is an error, not a no-op.
    pub async fn delete_question(&self, id: i64) -> Result<(), CatalogError> {
        if !self.store.delete_question(id).await? {
            return Err(CatalogError::NotFound(format!("question {} does not exist", id)));
        }

        tracing::info!(id, "Question deleted");
        Ok(())
    }

    async fn category_questions(&self, category_id: i64) -> Result<Vec<Question>, CatalogError> {
        let mut questions = self.store.questions().await?;
        questions.retain(|q| q.category == category_id);
        Ok(questions)
    }
}
