// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{authenticate, AuthenticatedUser, Role},
    models::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest},
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod hello;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/public", get(hello::public_endpoint))
        .route("/private", get(hello::private_endpoint))
        .route("/admin", get(hello::admin_endpoint))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .with_state(state.clone());

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        // The authentication gate wraps every route and runs exactly once
        // per request. It never rejects; protected handlers enforce.
        .layer(from_fn_with_state(state, authenticate))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        hello::public_endpoint,
        hello::private_endpoint,
        hello::admin_endpoint,
        health::health,
        health::liveness
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            MessageResponse,
            AuthenticatedUser,
            Role,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    tags(
        (name = "Auth", description = "Registration and token issuance"),
        (name = "Hello", description = "Probe endpoints"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_with_bearer(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn login_token(app: &Router, username: &str, password: &str) -> String {
        let response = app
            .clone()
            .oneshot(json_post(
                "/api/auth/login",
                serde_json::json!({ "username": username, "password": password }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::for_tests());
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn health_probes_are_unauthenticated() {
        let app = router(AppState::for_tests());

        let health = app
            .clone()
            .oneshot(get_with_bearer("/health", None))
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let live = app.oneshot(get_with_bearer("/health/live", None)).await.unwrap();
        assert_eq!(live.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn public_endpoint_needs_no_token() {
        let app = router(AppState::for_tests());
        let response = app.oneshot(get_with_bearer("/api/public", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Hello - public");
    }

    #[tokio::test]
    async fn private_endpoint_rejects_anonymous_requests() {
        let app = router(AppState::for_tests());
        let response = app
            .oneshot(get_with_bearer("/api/private", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn private_endpoint_rejects_garbage_tokens_with_401_not_500() {
        let app = router(AppState::for_tests());
        let response = app
            .oneshot(get_with_bearer("/api/private", Some("totally.bogus.token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn register_login_then_access_private_endpoint() {
        let app = router(AppState::for_tests());

        let registered = app
            .clone()
            .oneshot(json_post(
                "/api/auth/register",
                serde_json::json!({ "username": "alice", "password": "password123" }),
            ))
            .await
            .unwrap();
        assert_eq!(registered.status(), StatusCode::OK);

        let token = login_token(&app, "alice", "password123").await;

        let response = app
            .oneshot(get_with_bearer("/api/private", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            "Hello - private (authenticated)"
        );
    }

    #[tokio::test]
    async fn admin_endpoint_forbids_a_registered_user() {
        let app = router(AppState::for_tests());

        app.clone()
            .oneshot(json_post(
                "/api/auth/register",
                serde_json::json!({ "username": "alice", "password": "password123" }),
            ))
            .await
            .unwrap();

        let token = login_token(&app, "alice", "password123").await;

        let response = app
            .oneshot(get_with_bearer("/api/admin", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn admin_endpoint_admits_a_provisioned_admin() {
        let state = AppState::for_tests();
        let app = router(state.clone());

        state
            .users
            .write()
            .await
            .create_user("root", "rootpass", vec![Role::Admin])
            .unwrap();

        let token = login_token(&app, "root", "rootpass").await;

        let response = app
            .clone()
            .oneshot(get_with_bearer("/api/admin", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Hello - admin");

        let anonymous = app.oneshot(get_with_bearer("/api/admin", None)).await.unwrap();
        assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn deleted_user_token_is_anonymous_on_private_endpoint() {
        let state = AppState::for_tests();
        let app = router(state.clone());

        app.clone()
            .oneshot(json_post(
                "/api/auth/register",
                serde_json::json!({ "username": "alice", "password": "password123" }),
            ))
            .await
            .unwrap();

        let token = login_token(&app, "alice", "password123").await;
        state.users.write().await.remove("alice");

        let response = app
            .oneshot(get_with_bearer("/api/private", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn bad_credentials_cannot_log_in() {
        let app = router(AppState::for_tests());

        app.clone()
            .oneshot(json_post(
                "/api/auth/register",
                serde_json::json!({ "username": "alice", "password": "password123" }),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_post(
                "/api/auth/login",
                serde_json::json!({ "username": "alice", "password": "nope" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
