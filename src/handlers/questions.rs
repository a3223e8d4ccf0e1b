// src/handlers/questions.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    catalog::{Catalog, CatalogError, pagination},
    error::AppError,
    models::question::{CreateQuestionRequest, NewQuestion},
};

/// Query parameters for listing questions.
/// `page` stays a string so that junk values fall back to the first page.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

/// Query parameters for searching questions.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
}

/// Lists one page of questions, ordered by identity.
/// An unreadable query string falls back to the first page.
pub async fn list_questions(
    State(catalog): State<Catalog>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let page = match params {
        Ok(Query(params)) => pagination::page_from_param(params.page.as_deref()),
        Err(rejection) => {
            tracing::debug!("Unreadable listing query, using first page: {}", rejection);
            pagination::DEFAULT_PAGE
        }
    };

    let listing = catalog.list_questions(page).await.map_err(|e| match e {
        CatalogError::Store(e) => AppError::NotFound(e.to_string()),
        other => other.into(),
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": listing.questions,
        "total_questions": listing.total_questions,
    })))
}

/// Creates a question from `question`, `answer`, `category` and `difficulty`.
/// Any missing field, or a category that does not exist, is unprocessable.
pub async fn create_question(
    State(catalog): State<Catalog>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let new_question = NewQuestion::try_from(payload).map_err(|e| {
        tracing::warn!("Rejected question: {}", e);
        AppError::Unprocessable(e.to_string())
    })?;

    catalog
        .create_question(new_question)
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Question successfully inserted",
    })))
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(catalog): State<Catalog>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    catalog
        .delete_question(id)
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Successfully deleted",
    })))
}

/// Case-insensitive substring search over question text.
pub async fn search_questions(
    State(catalog): State<Catalog>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;

    let term = params
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Unprocessable("`title` is required".to_string()))?;

    let questions = catalog.search_questions(&term).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": questions,
    })))
}
