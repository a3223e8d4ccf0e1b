// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::catalog::CatalogError;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question itself.
    pub question: String,

    pub answer: String,

    /// Identity of the category this question belongs to.
    /// Not enforced as a foreign key.
    pub category: i64,

    /// Expected to be 1-5, stored as given.
    pub difficulty: i32,
}

/// A question that has not been assigned an identity yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attaches a store-assigned identity.
    pub fn with_id(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// DTO for creating a new question.
/// Every field is optional at the wire level so that a missing or `null`
/// field surfaces as a validation error instead of a decoding failure.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(
        required(message = "question is required"),
        length(min = 1, message = "question must not be empty")
    )]
    pub question: Option<String>,
    #[validate(
        required(message = "answer is required"),
        length(min = 1, message = "answer must not be empty")
    )]
    pub answer: Option<String>,
    #[validate(required(message = "category is required"))]
    pub category: Option<i64>,
    #[validate(required(message = "difficulty is required"))]
    pub difficulty: Option<i32>,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = CatalogError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        req.validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let (Some(question), Some(answer), Some(category), Some(difficulty)) =
            (req.question, req.answer, req.category, req.difficulty)
        else {
            return Err(CatalogError::Validation(
                "question, answer, category and difficulty are required".to_string(),
            ));
        };

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}
