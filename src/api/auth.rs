// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    auth::{service, Auth, AuthError},
    models::{LoginRequest, TokenResponse, UserPublic},
    state::AppState,
};

/// Acknowledgement body for stateless operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `POST /auth/login` - verify credentials and issue an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    let response = service::login(
        state.store.as_ref(),
        &state.auth,
        &request.email,
        &request.password,
    )
    .await?;

    Ok(Json(response))
}

/// `POST /auth/logout` - stateless acknowledgement.
///
/// Tokens are self-contained and cannot be revoked server-side; the client
/// discards its copy. Nothing happens here.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logged out. Discard the access token on the client.".to_string(),
    })
}

/// `GET /auth/me` - public projection of the current principal.
pub async fn me(Auth(user): Auth) -> Json<UserPublic> {
    Json(user.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{password, UserRole};
    use crate::config::AuthConfig;
    use crate::models::NewUser;
    use crate::store::InMemoryUserStore;
    use chrono::Duration;
    use std::sync::Arc;

    async fn test_state() -> AppState {
        let store = Arc::new(InMemoryUserStore::new());
        store
            .insert_user(NewUser {
                email: "ana@clinic.test".to_string(),
                name: "Ana Oliveira".to_string(),
                password_hash: password::hash_password("s3cret").unwrap(),
                role: UserRole::Secretary,
                is_active: true,
                is_superuser: false,
            })
            .await;
        AppState::new(store, AuthConfig::new("handler-test-secret", Duration::minutes(30)))
    }

    #[tokio::test]
    async fn login_handler_returns_token_response() {
        let state = test_state().await;

        let Json(response) = login(
            State(state),
            Json(LoginRequest {
                email: "ana@clinic.test".to_string(),
                password: "s3cret".to_string(),
            }),
        )
        .await
        .expect("login succeeds");

        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.user.email, "ana@clinic.test");
    }

    #[tokio::test]
    async fn login_handler_rejects_bad_password() {
        let state = test_state().await;

        let err = login(
            State(state),
            Json(LoginRequest {
                email: "ana@clinic.test".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn logout_is_a_stateless_ack() {
        let Json(response) = logout().await;
        assert!(response.message.contains("Discard"));
    }
}
