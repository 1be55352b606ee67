// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Stateless bearer-token authentication for the API.
//!
//! ## Auth Flow
//!
//! 1. Client registers or logs in with username + password
//!    (`/api/auth/register`, `/api/auth/login`)
//! 2. On login the server issues an HS256-signed JWT
//!    (subject = username, `roles` claim, configured TTL)
//! 3. Client sends `Authorization: Bearer <token>` on later requests
//! 4. The authentication gate (middleware) runs once per request:
//!    - verifies signature and expiry
//!    - resolves the subject against the user store
//!    - on success installs an [`AuthenticatedUser`] into the request's
//!      extensions; on any failure it leaves the request anonymous
//! 5. Protected handlers require the principal via the [`Auth`] extractor,
//!    which converts an anonymous context into a 401
//!
//! ## Security
//!
//! - The signing key is derived from the configured secret at startup and
//!   never changes while the process runs
//! - Signature comparison is constant-time (inside `jsonwebtoken`)
//! - Malformed tokens and bad signatures are indistinguishable to callers
//! - The gate itself never rejects a request; every failure degrades to an
//!   anonymous context

pub mod claims;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod roles;
pub mod token;

pub use claims::{AuthenticatedUser, Claims};
pub use error::AuthError;
pub use extractor::Auth;
pub use middleware::authenticate;
pub use roles::Role;
pub use token::TokenService;
