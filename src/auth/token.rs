// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token issuance and verification (HS256).
//!
//! Integrity and freshness are deliberately separate:
//! [`TokenService::decode_and_verify`] checks structure and signature only,
//! while [`TokenService::validate`] applies the expiry policy on top. A
//! decode failure is always collapsed into the single uniform
//! [`AuthError::InvalidToken`] so callers cannot distinguish a malformed
//! token from a forged one.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use super::claims::Claims;
use super::error::AuthError;

/// Issues and verifies compact HS256 tokens.
///
/// The signing key is derived once from the configured secret and is
/// immutable for the process lifetime. Cloned nowhere; shared via `Arc` in
/// [`crate::state::AppState`].
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Build the service from the configured secret and TTL.
    ///
    /// The secret is the UTF-8 bytes of the configuration value; a non-empty
    /// secret and a positive TTL are enforced at startup by
    /// [`crate::config::Config::from_env`].
    pub fn new(secret: &str, ttl_ms: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::milliseconds(ttl_ms),
        }
    }

    /// Issue a token for `subject` with the current time as issued-at.
    pub fn issue(
        &self,
        subject: &str,
        extra: HashMap<String, serde_json::Value>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(subject, extra, Utc::now())
    }

    /// Issue a token with an explicit issuance instant.
    ///
    /// Deterministic given identical inputs and timestamp. Claim timestamps
    /// are epoch seconds, so the configured TTL is truncated to whole
    /// seconds here. An empty subject is refused: it could never name an
    /// identity, and the verifier would reject it anyway.
    pub fn issue_at(
        &self,
        subject: &str,
        extra: HashMap<String, serde_json::Value>,
        now: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        if subject.is_empty() {
            return Err(ErrorKind::InvalidSubject.into());
        }

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            extra,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Decode a token and verify its structure and signature.
    ///
    /// Expiry is *not* checked here; the returned claims still carry `exp`
    /// for [`TokenService::validate_at`] to evaluate. Any parse or signature
    /// failure returns the uniform [`AuthError::InvalidToken`].
    pub fn decode_and_verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            debug!(error = %e, "token failed decode/verification");
            AuthError::InvalidToken
        })?;

        // An empty subject can never name an identity.
        if data.claims.sub.is_empty() {
            return Err(AuthError::InvalidToken);
        }

        Ok(data.claims)
    }

    /// Check a token's signature and expiry against the current time.
    pub fn validate(&self, token: &str) -> bool {
        self.validate_at(token, Utc::now())
    }

    /// Check a token's signature and expiry against an explicit instant.
    ///
    /// A token is valid strictly before its expiry instant (`now < exp`);
    /// at the instant itself it is already expired. Decode failures become
    /// `false` - this boundary never propagates an error.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> bool {
        match self.decode_and_verify(token) {
            Ok(claims) => now.timestamp() < claims.exp,
            Err(_) => false,
        }
    }

    /// Extract the subject from a verified token.
    ///
    /// Unlike [`TokenService::validate`], this propagates
    /// [`AuthError::InvalidToken`] so callers that need a reason get one.
    pub fn extract_subject(&self, token: &str) -> Result<String, AuthError> {
        Ok(self.decode_and_verify(token)?.sub)
    }
}
