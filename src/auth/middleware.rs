// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication gate.
//!
//! Runs exactly once per inbound request, before any handler. It never
//! rejects and never short-circuits: every failure path - missing header,
//! wrong scheme, invalid or expired token, unknown subject - leaves the
//! request anonymous and passes it on. Endpoints that require a principal
//! enforce that separately via the [`super::extractor::Auth`] extractor.
//!
//! Per request the gate either installs one [`AuthenticatedUser`] into the
//! request's extensions or installs nothing. The extensions die with the
//! request, so nothing authenticated here can leak across requests.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use super::claims::AuthenticatedUser;
use crate::state::AppState;

/// Bearer scheme prefix in the `Authorization` header.
const BEARER_PREFIX: &str = "Bearer ";

/// Authentication middleware.
///
/// Apply with `axum::middleware::from_fn_with_state(state, authenticate)` on
/// the router so it runs for every route, exactly once.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(user) = resolve_principal(&state, request.headers()).await {
        request.extensions_mut().insert(user);
    }
    next.run(request).await
}

/// Resolve the request's bearer token to a principal, or `None` for
/// anonymous. All verification failures funnel into `None`.
async fn resolve_principal(state: &AppState, headers: &HeaderMap) -> Option<AuthenticatedUser> {
    let header = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?;

    let token = header.strip_prefix(BEARER_PREFIX)?;

    if !state.tokens.validate(token) {
        debug!("bearer token failed validation, continuing anonymously");
        return None;
    }

    // validate() just succeeded, so the subject must decode; treat any
    // inconsistency as anonymous all the same.
    let subject = state.tokens.extract_subject(token).ok()?;

    // A token naming an identity that no longer exists must never grant
    // access, however well-signed it is.
    let Some(user) = state.users.read().await.find(&subject) else {
        debug!(subject = %subject, "token subject unknown, continuing anonymously");
        return None;
    };

    Some(AuthenticatedUser::from_user(&user))
}
