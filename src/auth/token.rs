// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT issuance and validation.
//!
//! Tokens are self-contained HS256 assertions carrying the user's email as
//! the subject. The signing secret and TTL come from [`AuthConfig`]; the
//! algorithm is fixed process-wide. There is no server-side revocation:
//! rotating the secret is the only way to invalidate outstanding tokens.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;
use crate::config::AuthConfig;

/// Signing algorithm, fixed for every token this process issues or accepts.
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email.
    pub sub: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiry (Unix timestamp), `iat` plus the configured TTL.
    pub exp: i64,
}

/// Issue a signed token for `subject`, valid from `now` for the configured
/// TTL.
pub fn issue(config: &AuthConfig, subject: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
    let claims = Claims {
        sub: subject.to_string(),
        iat: now.timestamp(),
        exp: (now + config.ttl()).timestamp(),
    };

    encode(
        &Header::new(SIGNING_ALGORITHM),
        &claims,
        &EncodingKey::from_secret(config.secret()),
    )
    .map_err(|e| AuthError::Internal(format!("failed to sign token: {e}")))
}

/// Verify signature and expiry, returning the claims.
///
/// Never panics on attacker-controlled input; every failure mode is a typed
/// [`AuthError`]. Expiry is strict: no clock-skew leeway, `now >= exp`
/// fails.
pub fn decode_token(config: &AuthConfig, token: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::MalformedToken,
    })?;

    // The library accepts the boundary second (exp == now); expiry here is
    // strict, so reject it explicitly.
    if Utc::now().timestamp() >= claims.exp {
        return Err(AuthError::TokenExpired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_config() -> AuthConfig {
        AuthConfig::new("unit-test-secret", Duration::minutes(30))
    }

    #[test]
    fn round_trip_before_expiry() {
        let config = test_config();
        let now = Utc::now();

        let token = issue(&config, "admin@clinic.test", now).unwrap();
        let claims = decode_token(&config, &token).unwrap();

        assert_eq!(claims.sub, "admin@clinic.test");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, now.timestamp() + 1800);
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config();
        let issued = Utc::now() - Duration::hours(2);

        let token = issue(&config, "admin@clinic.test", issued).unwrap();
        let err = decode_token(&config, &token).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn token_is_rejected_at_the_expiry_second() {
        // exp == now must already fail, not just exp < now
        let config = test_config();
        let issued = Utc::now() - config.ttl();

        let token = issue(&config, "admin@clinic.test", issued).unwrap();
        let err = decode_token(&config, &token).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = test_config();
        let other = AuthConfig::new("a-different-secret", Duration::minutes(30));

        let token = issue(&config, "admin@clinic.test", Utc::now()).unwrap();
        let err = decode_token(&other, &token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn garbage_input_is_malformed() {
        let config = test_config();
        for input in ["", "not-a-jwt", "a.b", "a.b.c.d", "ey.ey.sig"] {
            let err = decode_token(&config, input).unwrap_err();
            assert!(matches!(err, AuthError::MalformedToken), "input: {input}");
        }
    }

    #[test]
    fn rewritten_claims_fail_the_signature_check() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let config = test_config();
        let token = issue(&config, "ana@clinic.test", Utc::now()).unwrap();
        let [header, payload, signature]: [&str; 3] =
            token.split('.').collect::<Vec<_>>().try_into().unwrap();

        // Swap the subject inside the payload, keeping the old signature
        let decoded = URL_SAFE_NO_PAD.decode(payload).unwrap();
        let claims_json = String::from_utf8(decoded).unwrap();
        assert!(claims_json.contains("ana@clinic.test"));
        let forged_json = claims_json.replace("ana@clinic.test", "admin@clinic.test");
        let forged_payload = URL_SAFE_NO_PAD.encode(forged_json.as_bytes());

        let forged = format!("{header}.{forged_payload}.{signature}");
        let err = decode_token(&config, &forged).unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn every_single_byte_tamper_is_rejected() {
        let config = test_config();
        let token = issue(&config, "admin@clinic.test", Utc::now()).unwrap();

        for position in 0..token.len() {
            let mut tampered: Vec<u8> = token.as_bytes().to_vec();
            // Swap for a distinct base64url character (or '.' breaker)
            tampered[position] = if tampered[position] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(tampered).unwrap();

            assert!(
                decode_token(&config, &tampered).is_err(),
                "tampering at byte {position} was accepted"
            );
        }
    }
}
