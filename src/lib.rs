// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer Auth Server - Stateless JWT Authentication Service
//!
//! This crate exchanges username/password credentials for HS256-signed
//! bearer tokens and authenticates every inbound request through a
//! non-rejecting middleware gate that installs the caller's identity into
//! the request's processing context.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Token issuance/verification, gate middleware, extractor
//! - `config` - Environment configuration (fail-fast on a missing secret)
//! - `store` - In-memory user store (bcrypt credential hashing)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
