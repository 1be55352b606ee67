// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Probe endpoints demonstrating the authentication gate's effect.
//!
//! `/api/public` is reachable by anyone; `/api/private` requires the gate to
//! have installed a principal, enforced by the [`Auth`] extractor; and
//! `/api/admin` additionally requires the principal to hold the admin role.

use tracing::debug;

use crate::auth::{Auth, AuthError, Role};

/// Public probe - GET /api/public
#[utoipa::path(
    get,
    path = "/api/public",
    tag = "Hello",
    responses((status = 200, description = "Always reachable", body = String))
)]
pub async fn public_endpoint() -> &'static str {
    "Hello - public"
}

/// Protected probe - GET /api/private
///
/// Anonymous requests are rejected with 401 by the extractor, not by the
/// authentication gate itself.
#[utoipa::path(
    get,
    path = "/api/private",
    tag = "Hello",
    responses(
        (status = 200, description = "Authenticated", body = String),
        (status = 401, description = "Anonymous context")
    )
)]
pub async fn private_endpoint(Auth(user): Auth) -> &'static str {
    debug!(username = %user.username, "private endpoint accessed");
    "Hello - private (authenticated)"
}

/// Admin probe - GET /api/admin
///
/// Authenticated principals without the admin role get 403; registration only
/// grants the user role, so this is reachable solely by operator-provisioned
/// accounts.
#[utoipa::path(
    get,
    path = "/api/admin",
    tag = "Hello",
    responses(
        (status = 200, description = "Admin principal", body = String),
        (status = 401, description = "Anonymous context"),
        (status = 403, description = "Principal lacks the admin role")
    )
)]
pub async fn admin_endpoint(Auth(user): Auth) -> Result<&'static str, AuthError> {
    if !user.has_role(Role::Admin) {
        debug!(username = %user.username, "admin endpoint refused");
        return Err(AuthError::InsufficientPermissions);
    }
    debug!(username = %user.username, "admin endpoint accessed");
    Ok("Hello - admin")
}
