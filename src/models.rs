// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the authentication API, plus the
//! [`User`] credential record read from the store.
//!
//! `User` deliberately does not implement `Serialize`: the only user shape
//! that ever leaves the process is [`UserPublic`], which has no
//! `password_hash` field at all.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::UserRole;

// =============================================================================
// User Record
// =============================================================================

/// A credential record owned by the external store.
///
/// This core only reads users; creation and mutation happen through
/// account-management operations outside its scope. `email` uniquely
/// identifies at most one user and is compared case-sensitively.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct User {
    /// Unique numeric identifier, immutable once assigned.
    pub id: i64,
    /// Login key and token subject. Unique, no normalization applied.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Argon2id PHC string. Never serialized, logged, or transmitted.
    pub password_hash: String,
    /// Functional role within the clinic.
    pub role: UserRole,
    /// Inactive accounts can neither log in nor use existing tokens.
    pub is_active: bool,
    /// Grants admin-level authorization regardless of `role`.
    pub is_superuser: bool,
    /// Set by the store on insert.
    pub created_at: DateTime<Utc>,
    /// Set by the store on update.
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Admin authorization is keyed on the superuser flag alone.
    pub fn is_admin(&self) -> bool {
        self.is_superuser
    }

    /// Medical endpoints admit medical staff and admins.
    pub fn is_medical_or_admin(&self) -> bool {
        self.role == UserRole::Medical || self.is_superuser
    }
}

/// Fields for inserting a user into the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub is_superuser: bool,
}

// =============================================================================
// Public Projection
// =============================================================================

/// Public projection of a [`User`].
///
/// This is the only user representation serialized to clients. It carries
/// everything except the password hash, unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPublic {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserPublic {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            is_active: user.is_active,
            is_superuser: user.is_superuser,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// =============================================================================
// Auth Requests / Responses
// =============================================================================

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed JWT to present as `Authorization: Bearer <token>`.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    /// Public projection of the logged-in user.
    pub user: UserPublic,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "admin@clinic.test".to_string(),
            name: "Clinic Admin".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: UserRole::Secretary,
            is_active: true,
            is_superuser: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn public_projection_has_no_password_hash() {
        let user = sample_user();
        let projection = UserPublic::from(&user);
        let json = serde_json::to_value(&projection).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "admin@clinic.test");
        assert_eq!(json["role"], "secretary");
        assert_eq!(json["is_superuser"], true);
    }

    #[test]
    fn admin_check_ignores_role() {
        let mut user = sample_user();

        // Superuser secretary is still an admin
        user.role = UserRole::Secretary;
        user.is_superuser = true;
        assert!(user.is_admin());

        // Admin role without the flag is not
        user.role = UserRole::Admin;
        user.is_superuser = false;
        assert!(!user.is_admin());
    }

    #[test]
    fn medical_or_admin_matrix() {
        let mut user = sample_user();

        user.role = UserRole::Medical;
        user.is_superuser = false;
        assert!(user.is_medical_or_admin());

        user.role = UserRole::Secretary;
        user.is_superuser = true;
        assert!(user.is_medical_or_admin());

        user.role = UserRole::Secretary;
        user.is_superuser = false;
        assert!(!user.is_medical_or_admin());

        user.role = UserRole::Admin;
        user.is_superuser = false;
        assert!(!user.is_medical_or_admin());
    }
}
