// src/handlers/categories.rs

use std::collections::HashSet;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    response::IntoResponse,
};

use crate::{
    catalog::{Catalog, CatalogError},
    error::AppError,
    models::category::PlayRoundRequest,
};

/// Lists all categories, ordered by identity.
pub async fn list_categories(State(catalog): State<Catalog>) -> Result<impl IntoResponse, AppError> {
    let categories = catalog.list_categories().await.map_err(|e| match e {
        CatalogError::Store(e) => AppError::NotFound(e.to_string()),
        other => other.into(),
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "categories": categories,
    })))
}

/// Lists every question in a category.
/// A category without questions is reported as not found.
pub async fn questions_for_category(
    State(catalog): State<Catalog>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let questions = catalog
        .questions_for_category(id)
        .await
        .map_err(|e| match e {
            CatalogError::NotFound(msg) => AppError::NotFound(msg),
            other => AppError::Unprocessable(other.to_string()),
        })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": questions,
    })))
}

/// Returns the questions of a category that were not asked yet.
///
/// Body: `{"previous_question": [ids...]}`.
pub async fn play_round(
    State(catalog): State<Catalog>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PlayRoundRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let exclude: HashSet<i64> = payload.previous_question.into_iter().collect();

    let questions = catalog.play_round(id, &exclude).await.map_err(|e| match e {
        CatalogError::NotFound(msg) => AppError::NotFound(msg),
        other => AppError::Unprocessable(other.to_string()),
    })?;

    tracing::debug!(
        category = id,
        excluded = exclude.len(),
        remaining = questions.len(),
        "Play round"
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "list_of_questions_to_play": questions,
    })))
}
