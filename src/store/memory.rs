// src/store/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{QuestionStore, StoreError};
use crate::{
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    seed,
};

#[derive(Debug)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_question_id: i64,
}

/// In-process store. Used when no database is configured, and in tests.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_corpus(Vec::new(), Vec::new())
    }

    /// Builds a store holding the given rows. New questions get identities
    /// above the largest one already present.
    pub fn with_corpus(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let categories: BTreeMap<i64, Category> =
            categories.into_iter().map(|c| (c.id, c)).collect();
        let questions: BTreeMap<i64, Question> =
            questions.into_iter().map(|q| (q.id, q)).collect();
        let next_question_id = questions.keys().next_back().map_or(1, |max| max + 1);

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        }
    }

    /// A store loaded with the sample corpus from [`crate::seed`].
    pub fn seeded() -> Self {
        Self::with_corpus(seed::categories(), seed::questions())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id;
        tables.next_question_id += 1;

        let created = question.with_id(id);
        tables.questions.insert(id, created.clone());
        Ok(created)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(category: i64) -> NewQuestion {
        NewQuestion {
            question: "Q".to_string(),
            answer: "A".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn identities_are_assigned_monotonically() {
        let store = MemoryStore::new();
        let first = store.insert_question(new_question(1)).await.unwrap();
        let second = store.insert_question(new_question(1)).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn identities_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.insert_question(new_question(1)).await.unwrap();
        assert!(store.delete_question(first.id).await.unwrap());
        let second = store.insert_question(new_question(1)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn seeded_corpus_continues_after_highest_identity() {
        let store = MemoryStore::seeded();
        let max = store.questions().await.unwrap().last().unwrap().id;
        let created = store.insert_question(new_question(3)).await.unwrap();
        assert_eq!(created.id, max + 1);
    }

    #[tokio::test]
    async fn questions_come_back_in_identity_order() {
        let q = |id| new_question(1).with_id(id);
        let store = MemoryStore::with_corpus(Vec::new(), vec![q(9), q(2), q(5)]);
        let ids: Vec<i64> = store
            .questions()
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[tokio::test]
    async fn deleting_unknown_identity_reports_false() {
        let store = MemoryStore::seeded();
        assert!(!store.delete_question(2000).await.unwrap());
    }
}
