// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential exchange: registration and login.
//!
//! This layer decides *when* to hash, verify, and issue; the actual
//! credential storage and hashing live in the user store, and token
//! issuance in the token service.

use std::collections::HashMap;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::{
    auth::{AuthError, Role},
    error::ApiError,
    models::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest},
    state::AppState,
    store::StoreError,
};

/// Register a new user - POST /api/auth/register
///
/// New users get the default role set. A username conflict is reported
/// without touching the stored identity.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 400, description = "Username already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, Response> {
    let mut users = state.users.write().await;

    match users.create_user(&request.username, &request.password, vec![Role::default()]) {
        Ok(user) => {
            info!(username = %user.username, "user registered");
            Ok(Json(MessageResponse::new("User registered")))
        }
        Err(StoreError::UsernameTaken) => Err(AuthError::UsernameTaken.into_response()),
        Err(StoreError::InvalidUsername) => {
            Err(ApiError::bad_request("Username must not be empty").into_response())
        }
        Err(StoreError::Hash(e)) => {
            warn!(error = %e, "password hashing failed during registration");
            Err(ApiError::internal("Registration failed").into_response())
        }
    }
}

/// Exchange credentials for a bearer token - POST /api/auth/login
///
/// Unknown usernames and wrong passwords produce the identical failure so
/// the endpoint cannot be used to enumerate accounts.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Token issued", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, Response> {
    let users = state.users.read().await;

    if !users.verify_credentials(&request.username, &request.password) {
        warn!(username = %request.username, "failed login attempt");
        return Err(AuthError::InvalidCredentials.into_response());
    }

    let user = users
        .find(&request.username)
        .ok_or_else(|| AuthError::InvalidCredentials.into_response())?;
    drop(users);

    let mut extra = HashMap::new();
    extra.insert("roles".to_string(), serde_json::json!(user.roles));

    let token = state.tokens.issue(&user.username, extra).map_err(|e| {
        warn!(error = %e, "token issuance failed");
        ApiError::internal("Login failed").into_response()
    })?;

    info!(username = %user.username, "login successful");
    Ok(Json(AuthResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn register_alice(state: &AppState) {
        register(
            State(state.clone()),
            Json(RegisterRequest {
                username: "alice".to_string(),
                password: "password123".to_string(),
            }),
        )
        .await
        .expect("registration succeeds");
    }

    async fn status_and_body(response: Response) -> (StatusCode, Vec<u8>) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn register_then_login_issues_a_token_for_the_username() {
        let state = AppState::for_tests();
        register_alice(&state).await;

        let Json(response) = login(
            State(state.clone()),
            Json(LoginRequest {
                username: "alice".to_string(),
                password: "password123".to_string(),
            }),
        )
        .await
        .expect("login succeeds");

        assert_eq!(
            state.tokens.extract_subject(&response.token).unwrap(),
            "alice"
        );
    }

    #[tokio::test]
    async fn issued_token_carries_the_role_summary() {
        let state = AppState::for_tests();
        register_alice(&state).await;

        let Json(response) = login(
            State(state.clone()),
            Json(LoginRequest {
                username: "alice".to_string(),
                password: "password123".to_string(),
            }),
        )
        .await
        .unwrap();

        let claims = state.tokens.decode_and_verify(&response.token).unwrap();
        assert_eq!(claims.extra["roles"], serde_json::json!(["user"]));
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let state = AppState::for_tests();
        register_alice(&state).await;

        let err = register(
            State(state.clone()),
            Json(RegisterRequest {
                username: "alice".to_string(),
                password: "other".to_string(),
            }),
        )
        .await
        .expect_err("duplicate must conflict");

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        // The original credentials still work.
        assert!(state
            .users
            .read()
            .await
            .verify_credentials("alice", "password123"));
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let state = AppState::for_tests();
        register_alice(&state).await;

        let wrong_password = login(
            State(state.clone()),
            Json(LoginRequest {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await
        .expect_err("wrong password fails");

        let unknown_user = login(
            State(state.clone()),
            Json(LoginRequest {
                username: "nobody".to_string(),
                password: "password123".to_string(),
            }),
        )
        .await
        .expect_err("unknown user fails");

        let (status_a, body_a) = status_and_body(wrong_password).await;
        let (status_b, body_b) = status_and_body(unknown_user).await;

        assert_eq!(status_a, StatusCode::UNAUTHORIZED);
        assert_eq!(status_a, status_b);
        assert_eq!(body_a, body_b);
    }
}
