// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values, and the
//! immutable [`AuthConfig`] consumed by the token codec and the access
//! guard. Configuration is loaded from the environment once at startup and
//! never changes at runtime; tests construct their own `AuthConfig` with
//! distinct secrets and TTLs.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SECRET_KEY` | JWT signing secret (HS256) | Dev-only fallback |
//! | `ACCESS_TOKEN_EXPIRE_MINUTES` | Token time-to-live in minutes | `30` |
//! | `SEED_ADMIN_EMAIL` | Bootstrap admin account email | Unset (no seeding) |
//! | `SEED_ADMIN_PASSWORD` | Bootstrap admin account password | Unset (no seeding) |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use chrono::Duration;

/// Environment variable name for the JWT signing secret.
///
/// Changing the secret invalidates every previously issued token, which is
/// the only mass-revocation mechanism in this stateless design.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

/// Environment variable name for the token TTL in minutes.
pub const TOKEN_TTL_ENV: &str = "ACCESS_TOKEN_EXPIRE_MINUTES";

/// Environment variable names for the bootstrap admin account.
pub const SEED_ADMIN_EMAIL_ENV: &str = "SEED_ADMIN_EMAIL";
pub const SEED_ADMIN_PASSWORD_ENV: &str = "SEED_ADMIN_PASSWORD";

/// Environment variable name for the logging format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default token lifetime. Deployments that want long-lived sessions
/// (e.g. 8 days for kiosk terminals) raise this via the env knob.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Fallback signing secret for local development only.
const DEV_SECRET_KEY: &str = "dev-secret-change-in-production";

/// Process-wide authentication configuration.
///
/// The signing algorithm is fixed (HS256, see [`crate::auth::token`]); the
/// secret and TTL are deployment-time constants carried by this value.
#[derive(Clone)]
pub struct AuthConfig {
    secret: String,
    ttl: Duration,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    /// Load the configuration from the environment.
    ///
    /// Falls back to a development secret (with a warning) and the default
    /// TTL when the variables are unset.
    pub fn from_env() -> Self {
        let secret = match std::env::var(SECRET_KEY_ENV) {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "{SECRET_KEY_ENV} is not set; using the development secret. \
                     Do not run this configuration in production."
                );
                DEV_SECRET_KEY.to_string()
            }
        };

        let ttl_minutes = std::env::var(TOKEN_TTL_ENV)
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES);

        Self::new(secret, Duration::minutes(ttl_minutes))
    }

    /// Raw key material for the HS256 codec.
    pub fn secret(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    /// Token time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Token time-to-live in whole seconds, as reported in login responses.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }
}

// The secret must never reach logs or error messages.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}
