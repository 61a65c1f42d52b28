// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractors implementing the access guard.
//!
//! Use the `Auth` extractor in handlers to require an authenticated, active
//! user:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is a fresh User record for the token subject
//! }
//! ```
//!
//! `AdminOnly` and `MedicalOrAdmin` layer role predicates on top. The chain
//! evaluates per request and short-circuits on the first failure:
//! bearer token → signature/expiry → subject lookup → active check → role
//! check. Nothing is cached across requests, so a deactivated account is
//! rejected on its very next request.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::{token, AuthError};
use crate::models::User;
use crate::state::AppState;

/// Extractor for authenticated, active users.
///
/// Rejections map to 401 (missing/invalid/expired token, subject no longer
/// present in the store) or 400 (account disabled after token issuance).
pub struct Auth(pub User);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        // Extract Bearer token
        let bearer = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?;

        // Verify signature and expiry
        let claims = token::decode_token(&state.auth, bearer)?;

        // The lookup, not the signature, is the source of truth for
        // existence: accounts deleted after issuance fail here.
        let user = state
            .store
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::UnknownSubject)?;

        if !user.is_active {
            return Err(AuthError::AccountDisabled);
        }

        Ok(Auth(user))
    }
}

/// Extractor that additionally requires the superuser flag.
pub struct AdminOnly(pub User);

impl FromRequestParts<AppState> for AdminOnly {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Auth(user) = Auth::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(AuthError::InsufficientPermissions);
        }

        Ok(AdminOnly(user))
    }
}

/// Extractor that requires the medical role or the superuser flag.
pub struct MedicalOrAdmin(pub User);

impl FromRequestParts<AppState> for MedicalOrAdmin {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Auth(user) = Auth::from_request_parts(parts, state).await?;

        if !user.is_medical_or_admin() {
            return Err(AuthError::InsufficientPermissions);
        }

        Ok(MedicalOrAdmin(user))
    }
}
