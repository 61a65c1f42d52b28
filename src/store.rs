// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Credential store access.
//!
//! The authentication core depends only on the [`UserStore`] capability:
//! point lookup by email (login, token subject resolution) and by id. The
//! store owns its own concurrency control; the core reads and never writes
//! during authentication or authorization.
//!
//! [`InMemoryUserStore`] is the shipped implementation and doubles as the
//! test fake.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{NewUser, User};

/// Infrastructure failure while talking to the store.
///
/// Deliberately distinct from authentication errors: "store unavailable"
/// must never be reported to a client as "bad credentials".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only lookup capability over user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Point lookup by email (case-sensitive, exact match).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Point lookup by numeric id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;
}

/// In-memory user store backed by a `HashMap`.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user, assigning the next id and the creation timestamp.
    pub async fn insert_user(&self, new: NewUser) -> User {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let user = User {
            id,
            email: new.email,
            name: new.name,
            password_hash: new.password_hash,
            role: new.role,
            is_active: new.is_active,
            is_superuser: new.is_superuser,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.users.write().await.insert(id, user.clone());
        user
    }

    /// Enable or disable an account. Returns false if the id is unknown.
    pub async fn set_active(&self, id: i64, active: bool) -> bool {
        match self.users.write().await.get_mut(&id) {
            Some(user) => {
                user.is_active = active;
                user.updated_at = Some(Utc::now());
                true
            }
            None => false,
        }
    }

    /// Remove an account. Returns false if the id is unknown.
    pub async fn delete(&self, id: i64) -> bool {
        self.users.write().await.remove(&id).is_some()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::UserRole;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: "Test User".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: UserRole::Secretary,
            is_active: true,
            is_superuser: false,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = InMemoryUserStore::new();
        let first = store.insert_user(new_user("a@clinic.test")).await;
        let second = store.insert_user(new_user("b@clinic.test")).await;
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn find_by_email_is_case_sensitive() {
        let store = InMemoryUserStore::new();
        store.insert_user(new_user("Admin@clinic.test")).await;

        let exact = store.find_by_email("Admin@clinic.test").await.unwrap();
        assert!(exact.is_some());

        let lowered = store.find_by_email("admin@clinic.test").await.unwrap();
        assert!(lowered.is_none());
    }

    #[tokio::test]
    async fn find_by_id_returns_inserted_user() {
        let store = InMemoryUserStore::new();
        let user = store.insert_user(new_user("a@clinic.test")).await;

        let found = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.email, "a@clinic.test");

        let missing = store.find_by_id(999).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn set_active_toggles_and_stamps_update() {
        let store = InMemoryUserStore::new();
        let user = store.insert_user(new_user("a@clinic.test")).await;
        assert!(user.updated_at.is_none());

        assert!(store.set_active(user.id, false).await);
        let reloaded = store.find_by_id(user.id).await.unwrap().unwrap();
        assert!(!reloaded.is_active);
        assert!(reloaded.updated_at.is_some());

        assert!(!store.set_active(999, false).await);
    }

    #[tokio::test]
    async fn delete_removes_user() {
        let store = InMemoryUserStore::new();
        let user = store.insert_user(new_user("a@clinic.test")).await;

        assert!(store.delete(user.id).await);
        assert!(store.find_by_id(user.id).await.unwrap().is_none());
        assert!(!store.delete(user.id).await);
    }
}
