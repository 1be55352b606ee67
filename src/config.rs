// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup. A missing or
//! empty signing secret is a fatal startup error: the process refuses to bind
//! a listener rather than serve requests it cannot authenticate.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JWT_SECRET` | HMAC-SHA256 signing secret | Required, non-empty |
//! | `JWT_EXPIRATION_MS` | Token time-to-live in milliseconds | `3600000` (1h) |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Environment variable name for the JWT signing secret.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Environment variable name for the token time-to-live (milliseconds).
pub const JWT_EXPIRATION_MS_ENV: &str = "JWT_EXPIRATION_MS";

/// Default token time-to-live: one hour.
pub const DEFAULT_JWT_EXPIRATION_MS: i64 = 3_600_000;

/// Configuration errors that prevent the process from starting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{JWT_SECRET_ENV} must be set to a non-empty signing secret")]
    MissingSecret,

    #[error("{JWT_EXPIRATION_MS_ENV} must be a positive number of milliseconds: {0}")]
    InvalidExpiration(String),

    #[error("PORT must be a valid TCP port: {0}")]
    InvalidPort(String),
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HMAC signing secret. Never logged.
    pub jwt_secret: String,
    /// Token time-to-live in milliseconds.
    pub jwt_expiration_ms: i64,
    /// Server bind address.
    pub host: String,
    /// Server bind port.
    pub port: u16,
    /// Emit JSON logs instead of human-readable ones.
    pub log_json: bool,
}

impl Config {
    /// Load and validate configuration from the environment.
    ///
    /// Fails fast on a missing/empty secret or an unparsable TTL or port so
    /// the process exits before accepting any traffic.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var(JWT_SECRET_ENV).unwrap_or_default();
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        let jwt_expiration_ms = match env::var(JWT_EXPIRATION_MS_ENV) {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidExpiration(raw))?,
            Err(_) => DEFAULT_JWT_EXPIRATION_MS,
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 8080,
        };

        let log_json = env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            jwt_secret,
            jwt_expiration_ms,
            host,
            port,
            log_json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-variable manipulation is process-global, so every test
    // runs under one lock and restores what it touched.
    fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
        static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
        let _guard = LOCK.lock().unwrap();

        let saved: Vec<(String, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (k.to_string(), env::var(k).ok()))
            .collect();

        for (key, value) in vars {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(&key, v),
                None => env::remove_var(&key),
            }
        }
    }

    #[test]
    fn missing_secret_is_fatal() {
        with_env(&[(JWT_SECRET_ENV, None)], || {
            assert!(matches!(
                Config::from_env(),
                Err(ConfigError::MissingSecret)
            ));
        });
    }

    #[test]
    fn blank_secret_is_fatal() {
        with_env(&[(JWT_SECRET_ENV, Some("   "))], || {
            assert!(matches!(
                Config::from_env(),
                Err(ConfigError::MissingSecret)
            ));
        });
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        with_env(
            &[
                (JWT_SECRET_ENV, Some("test-secret-32-bytes-minimum")),
                (JWT_EXPIRATION_MS_ENV, None),
                ("HOST", None),
                ("PORT", None),
                ("LOG_FORMAT", None),
            ],
            || {
                let config = Config::from_env().expect("config loads");
                assert_eq!(config.jwt_expiration_ms, DEFAULT_JWT_EXPIRATION_MS);
                assert_eq!(config.host, "0.0.0.0");
                assert_eq!(config.port, 8080);
                assert!(!config.log_json);
            },
        );
    }

    #[test]
    fn non_positive_expiration_is_rejected() {
        with_env(
            &[
                (JWT_SECRET_ENV, Some("test-secret-32-bytes-minimum")),
                (JWT_EXPIRATION_MS_ENV, Some("0")),
            ],
            || {
                assert!(matches!(
                    Config::from_env(),
                    Err(ConfigError::InvalidExpiration(_))
                ));
            },
        );
    }

    #[test]
    fn json_log_format_is_recognized() {
        with_env(
            &[
                (JWT_SECRET_ENV, Some("test-secret-32-bytes-minimum")),
                (JWT_EXPIRATION_MS_ENV, None),
                ("PORT", None),
                ("LOG_FORMAT", Some("JSON")),
            ],
            || {
                let config = Config::from_env().expect("config loads");
                assert!(config.log_json);
            },
        );
    }
}
