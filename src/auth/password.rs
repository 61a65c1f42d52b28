// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Password hashing and verification using Argon2id.
//!
//! Hashes are PHC-formatted strings carrying their own salt and parameters.
//! Verification delegates the comparison to the argon2 crate, which is
//! constant-time over the digest.

use std::sync::LazyLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::AuthError;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("failed to hash password: {e}")))
}

/// Verify a password against a stored PHC hash string.
///
/// A hash that cannot be parsed is an infrastructure problem (corrupt store
/// record), not a wrong password, and is reported as such.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AuthError::Internal(format!("invalid stored password hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

// Hashing a fixed input with default parameters cannot fail.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| {
    hash_password("timing-equalization-dummy").expect("argon2 default parameters")
});

/// Burn the same hashing work as a real verification.
///
/// Called on email lookup-miss during login so that "unknown email" and
/// "wrong password" take comparable time, closing the response-timing
/// channel that would otherwise reveal account existence.
pub fn verify_dummy(password: &str) {
    let _ = verify_password(password, &DUMMY_HASH);
}
