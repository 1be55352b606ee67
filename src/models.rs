// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response data structures used by the REST API, plus the
//! stored [`User`] identity. All wire types derive `Serialize`/`Deserialize`
//! and `ToSchema` for automatic JSON handling and OpenAPI documentation.
//!
//! The `password_hash` field on [`User`] is never serialized; only the
//! credential store reads it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::Role;

/// A stored user identity.
///
/// Owned by the credential store. The authentication gate only ever reads
/// users by username; nothing in the token path mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier for this user.
    pub id: Uuid,
    /// Unique, stable username. Doubles as the token subject.
    pub username: String,
    /// bcrypt hash of the password - never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Roles granted to this user.
    pub roles: Vec<Role>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Registration request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response carrying the bearer token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// Compact JWT to present as `Authorization: Bearer <token>`.
    pub token: String,
}

/// Plain confirmation message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
