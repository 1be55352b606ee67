// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Authentication error type.
///
/// These never cross the gate boundary: the gate degrades every failure to
/// an anonymous request. They surface only from the explicit verification
/// APIs, the credential-exchange endpoints, and the `Auth` extractor.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Token is malformed or its signature does not verify.
    ///
    /// Deliberately a single variant: callers must not be able to tell a
    /// parse failure from a signature mismatch.
    InvalidToken,
    /// Login failed. Uniform for unknown usernames and wrong passwords.
    InvalidCredentials,
    /// Registration conflict.
    UsernameTaken,
    /// A protected endpoint was reached with an anonymous context.
    AuthenticationRequired,
    /// The principal lacks a required role.
    InsufficientPermissions,
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidToken => "invalid_token",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::UsernameTaken => "username_taken",
            AuthError::AuthenticationRequired => "authentication_required",
            AuthError::InsufficientPermissions => "insufficient_permissions",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidToken
            | AuthError::InvalidCredentials
            | AuthError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            AuthError::UsernameTaken => StatusCode::BAD_REQUEST,
            AuthError::InsufficientPermissions => StatusCode::FORBIDDEN,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidToken => write!(f, "Token is invalid"),
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::UsernameTaken => write!(f, "Username already taken"),
            AuthError::AuthenticationRequired => write!(f, "Authentication required"),
            AuthError::InsufficientPermissions => {
                write!(f, "Insufficient permissions for this operation")
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}
