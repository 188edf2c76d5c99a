//! Application route configuration.

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::user_routes;
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth)
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Protected user routes
        .merge(user_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        )))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "TeleWebManager API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.database.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    error: Some("database unreachable".to_string()),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, Method, Request},
    };
    use mockall::predicate::eq;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::infra::Database;
    use crate::services::MockUserService;

    const TOKEN: &str = "router-token";

    async fn app_with(service: MockUserService) -> Router {
        let database = Database::connect(&Config::new("sqlite::memory:", TOKEN))
            .await
            .unwrap();
        create_router(AppState::new(Arc::new(service), Arc::new(database), TOKEN))
    }

    fn request(method: Method, uri: &str, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_rejected_requests_never_reach_the_service() {
        // No expectations set: any service call would panic
        let app = app_with(MockUserService::new()).await;

        let cases = [
            (Method::GET, "/users/", None),
            (Method::POST, "/users/", None),
            (Method::GET, "/users/stats", Some("Bearer")),
            (Method::PUT, "/users/1", Some("Token router-token")),
            (Method::DELETE, "/users/1", Some("Bearer wrong-token")),
        ];

        for (method, uri, authorization) in cases {
            let response = app
                .clone()
                .oneshot(request(method, uri, authorization))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_authorized_request_reaches_the_service() {
        let mut service = MockUserService::new();
        service
            .expect_get_user()
            .with(eq(7))
            .times(1)
            .returning(|_| Err(AppError::NotFound));
        let app = app_with(service).await;

        let response = app
            .oneshot(request(Method::GET, "/users/7", Some("Bearer router-token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_stats_route_is_not_captured_by_id() {
        let mut service = MockUserService::new();
        service.expect_user_stats().times(1).returning(|| {
            Ok(crate::domain::UserStats {
                total: 0,
                online: 0,
                unique: 0,
            })
        });
        let app = app_with(service).await;

        let response = app
            .oneshot(request(Method::GET, "/users/stats", Some("Bearer router-token")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
