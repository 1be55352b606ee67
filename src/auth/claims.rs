// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT claims and the authenticated principal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::roles::Role;
use crate::models::User;

/// Claims carried inside an issued token.
///
/// `sub`/`iat`/`exp` are the registered claims the verifier cares about;
/// everything else the issuer attaches (e.g. a role summary) lands in the
/// flattened `extra` map and survives a round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued for.
    pub sub: String,

    /// Issued-at timestamp (epoch seconds).
    pub iat: i64,

    /// Expiration timestamp (epoch seconds). `exp > iat` at issuance.
    pub exp: i64,

    /// Open map of custom attributes.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Authenticated principal installed into the request's extensions.
///
/// Built from the stored identity after the gate's lookup succeeds - never
/// directly from token claims, so a token naming a deleted user can never
/// produce a principal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Stable user id.
    pub user_id: String,

    /// Username (equals the token subject).
    pub username: String,

    /// Roles granted to this user by the identity store.
    pub roles: Vec<Role>,
}

impl AuthenticatedUser {
    /// Build the principal from a stored identity.
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id.to_string(),
            username: user.username.clone(),
            roles: user.roles.clone(),
        }
    }

    /// Check whether this principal holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
