// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::TokenService;
use crate::store::InMemoryUserStore;

/// Shared application state.
///
/// The token service is immutable after startup; the user store sits behind
/// its own lock. Nothing here is request-scoped - per-request authentication
/// results live in the request's extensions, never in shared state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<RwLock<InMemoryUserStore>>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(users: InMemoryUserStore, tokens: TokenService) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
            tokens: Arc::new(tokens),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State with an empty store and a fixed test secret and TTL.
    pub fn for_tests() -> Self {
        Self::new(
            InMemoryUserStore::new(),
            TokenService::new("test-secret-32-bytes-minimum", 3_600_000),
        )
    }
}
