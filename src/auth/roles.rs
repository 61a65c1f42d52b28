// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User roles for authorization.

use serde::{Deserialize, Serialize};

/// Functional role of a clinic user.
///
/// The role is orthogonal to the superuser flag on the user record:
/// `is_superuser` grants admin-level authorization regardless of the role
/// value (see [`crate::models::User::is_admin`]).
///
/// ## Roles
///
/// - `Medical` - Doctors and nurses; access to medical records
/// - `Secretary` - Front-desk staff; scheduling and patient intake
/// - `Admin` - Clinic administration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Medical staff (doctors, nurses)
    Medical,
    /// Front-desk / scheduling staff
    Secretary,
    /// Clinic administration
    Admin,
}

impl UserRole {
    /// Parse a role from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<UserRole> {
        match s.to_lowercase().as_str() {
            "medical" => Some(UserRole::Medical),
            "secretary" => Some(UserRole::Secretary),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl Default for UserRole {
    /// New accounts default to the least privileged role.
    fn default() -> Self {
        UserRole::Secretary
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Medical => write!(f, "medical"),
            UserRole::Secretary => write!(f, "secretary"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}
