// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::{method_not_allowed_fallback, not_found_fallback},
    handlers::{categories, questions},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Registers the category and question routes.
/// * Answers unknown paths with 404 and wrong methods with 405, both in the error envelope.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let category_routes = Router::new()
        .route("/categories", get(categories::list_categories))
        .route("/categories/{id}", get(categories::questions_for_category))
        .route("/categories/{id}/play", post(categories::play_round));

    let question_routes = Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/{id}", delete(questions::delete_question));

    Router::new()
        .merge(category_routes)
        .merge(question_routes)
        .fallback(not_found_fallback)
        .method_not_allowed_fallback(method_not_allowed_fallback)
        // Global Middleware (outermost first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{
        catalog::Catalog,
        models::{
            category::Category,
            question::{NewQuestion, Question},
        },
        store::{MemoryStore, QuestionStore, StoreError},
    };

    /// Store whose every call fails, as if the database were unreachable.
    struct UnreachableStore;

    fn unreachable() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }

    #[async_trait::async_trait]
    impl QuestionStore for UnreachableStore {
        async fn categories(&self) -> Result<Vec<Category>, StoreError> {
            Err(unreachable())
        }

        async fn category(&self, _id: i64) -> Result<Option<Category>, StoreError> {
            Err(unreachable())
        }

        async fn questions(&self) -> Result<Vec<Question>, StoreError> {
            Err(unreachable())
        }

        async fn insert_question(&self, _question: NewQuestion) -> Result<Question, StoreError> {
            Err(unreachable())
        }

        async fn delete_question(&self, _id: i64) -> Result<bool, StoreError> {
            Err(unreachable())
        }
    }

    fn app_with(store: Arc<dyn QuestionStore>) -> Router {
        create_router(AppState {
            catalog: Catalog::new(store),
            config: Config::default(),
        })
    }

    fn app() -> Router {
        app_with(Arc::new(MemoryStore::seeded()))
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unknown_path_uses_error_envelope() {
        let response = app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"success": false, "error": 404, "message": "Resource not found"})
        );
    }

    #[tokio::test]
    async fn wrong_method_uses_error_envelope() {
        let response = app()
            .oneshot(Request::post("/categories").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await["error"], 405);
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let response = app()
            .oneshot(Request::delete("/questions/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Bad request");
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let response = app()
            .oneshot(
                Request::get("/categories")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn repeated_page_parameter_falls_back_to_first_page() {
        let response = app()
            .oneshot(
                Request::get("/questions?page=1&page=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total_questions"], 18);
        assert_eq!(body["questions"][0]["id"], 1);
    }

    #[tokio::test]
    async fn repeated_title_parameter_uses_error_envelope() {
        let response = app()
            .oneshot(
                Request::post("/questions/search?title=a&title=b")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"success": false, "error": 400, "message": "Bad request"})
        );
    }

    #[tokio::test]
    async fn store_faults_map_per_route() {
        let cases = [
            (
                Request::get("/categories").body(Body::empty()).unwrap(),
                StatusCode::NOT_FOUND,
            ),
            (
                Request::get("/questions").body(Body::empty()).unwrap(),
                StatusCode::NOT_FOUND,
            ),
            (
                Request::post("/questions/search?title=how")
                    .body(Body::empty())
                    .unwrap(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                Request::get("/categories/1").body(Body::empty()).unwrap(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                json_request(
                    Method::POST,
                    "/categories/1/play",
                    serde_json::json!({"previous_question": [1, 2]}),
                ),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                json_request(
                    Method::POST,
                    "/questions",
                    serde_json::json!({
                        "question": "How much is the fish?",
                        "answer": "12,50€",
                        "category": 3,
                        "difficulty": 2
                    }),
                ),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                Request::delete("/questions/1").body(Body::empty()).unwrap(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (request, expected) in cases {
            let uri = request.uri().to_string();
            let response = app_with(Arc::new(UnreachableStore))
                .oneshot(request)
                .await
                .unwrap();

            assert_eq!(response.status(), expected, "{uri}");
            let body = body_json(response).await;
            assert_eq!(body["success"], false, "{uri}");
            assert_eq!(body["error"], expected.as_u16(), "{uri}");
        }
    }
}
