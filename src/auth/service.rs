// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Login orchestration.
//!
//! Each step is terminal on failure, in this order: lookup, password
//! verification, active check, token issuance. The first two failures are
//! indistinguishable to the caller.

use chrono::Utc;

use super::{password, token, AuthError};
use crate::config::AuthConfig;
use crate::models::{TokenResponse, User, UserPublic};
use crate::store::UserStore;

/// Verify credentials and issue an access token.
pub async fn login(
    store: &dyn UserStore,
    config: &AuthConfig,
    email: &str,
    password_input: &str,
) -> Result<TokenResponse, AuthError> {
    let user = match store.find_by_email(email).await? {
        Some(user) => user,
        None => {
            // Burn the same hashing work as the found-user path so response
            // timing does not reveal account existence.
            password::verify_dummy(password_input);
            tracing::info!(email = %email, "login rejected: unknown email");
            return Err(AuthError::InvalidCredentials);
        }
    };

    if !password::verify_password(password_input, &user.password_hash)? {
        tracing::info!(email = %email, "login rejected: password mismatch");
        return Err(AuthError::InvalidCredentials);
    }

    if !user.is_active {
        tracing::info!(email = %email, "login rejected: account disabled");
        return Err(AuthError::AccountDisabled);
    }

    tracing::info!(email = %user.email, user_id = user.id, "login succeeded");
    issue_token_response(config, user)
}

/// Build the login response: a fresh token plus the public projection of
/// the user. No session is persisted; the token is the whole session.
pub fn issue_token_response(config: &AuthConfig, user: User) -> Result<TokenResponse, AuthError> {
    let access_token = token::issue(config, &user.email, Utc::now())?;

    Ok(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: config.ttl_seconds(),
        user: UserPublic::from(user),
    })
}
