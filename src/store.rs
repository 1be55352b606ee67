// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory user store.
//!
//! This is the credential-storage collaborator the authentication core
//! depends on: it owns password hashing and the username -> identity lookup.
//! The token path never mutates users; the gate only calls [`InMemoryUserStore::find`].

use std::collections::HashMap;

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use uuid::Uuid;

use crate::auth::Role;
use crate::models::User;

/// Errors surfaced by the user store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("username is already taken")]
    UsernameTaken,

    #[error("username must not be empty")]
    InvalidUsername,

    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// User storage keyed by username.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, User>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new user with a bcrypt-hashed password.
    ///
    /// Fails without touching existing users if the username is already
    /// taken. The username must be non-empty: it becomes the token subject.
    pub fn create_user(
        &mut self,
        username: &str,
        password: &str,
        roles: Vec<Role>,
    ) -> Result<User, StoreError> {
        if username.trim().is_empty() {
            return Err(StoreError::InvalidUsername);
        }
        if self.users.contains_key(username) {
            return Err(StoreError::UsernameTaken);
        }

        let password_hash = hash(password, DEFAULT_COST)?;
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            roles,
            created_at: Utc::now().to_rfc3339(),
        };

        self.users.insert(username.to_string(), user.clone());
        Ok(user)
    }

    /// Verify a username/password pair.
    ///
    /// Returns a plain bool: an unknown username and a wrong password are
    /// indistinguishable to the caller, which prevents username enumeration.
    pub fn verify_credentials(&self, username: &str, password: &str) -> bool {
        match self.users.get(username) {
            Some(user) => verify(password, &user.password_hash).unwrap_or(false),
            None => false,
        }
    }

    /// Look up a user by username.
    pub fn find(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }

    /// Remove a user. Returns whether a user was removed.
    ///
    /// Tokens issued for a removed user keep verifying cryptographically,
    /// but the authentication gate treats the missing lookup as anonymous.
    pub fn remove(&mut self, username: &str) -> bool {
        self.users.remove(username).is_some()
    }
}
