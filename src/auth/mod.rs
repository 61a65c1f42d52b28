// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! This module provides credential verification, JWT issuance, and
//! role-based access gating for the clinic API.
//!
//! ## Auth Flow
//!
//! 1. Client sends email + password to `POST /auth/login`
//! 2. Server:
//!    - Looks up the user by email in the credential store
//!    - Verifies the password against the stored Argon2id hash
//!    - Rejects disabled accounts
//!    - Issues an HS256 JWT with `sub = email` and the configured TTL
//! 3. Client sends `Authorization: Bearer <JWT>` on protected requests
//! 4. The access guard re-validates on every request:
//!    - Verifies JWT signature and expiry
//!    - Resolves the subject to a fresh user record (deleted accounts fail
//!      here, not at the signature check)
//!    - Applies active / role predicates, short-circuiting on the first
//!      failure
//!
//! ## Security
//!
//! - Unknown email and wrong password are merged into one error; a dummy
//!   hash verification runs on lookup-miss so both paths cost the same
//! - Tokens are stateless: there is no revocation list, rotating the
//!   signing secret invalidates everything outstanding
//! - Expiry is strict (no clock-skew leeway)

pub mod error;
pub mod extractor;
pub mod password;
pub mod roles;
pub mod service;
pub mod token;

pub use error::AuthError;
pub use extractor::{AdminOnly, Auth, MedicalOrAdmin};
pub use roles::UserRole;
