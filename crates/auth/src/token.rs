//! Bearer token checks and issuance
//!
//! Validity is two separate questions: structural shape (three
//! dot-separated base64url segments) and expiry (the decoded payload's
//! `exp` must be in the future). Any failure to decode the payload is
//! treated as expired - the checks fail closed and never propagate
//! decode errors.

use axum::http::HeaderValue;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use lazy_static::lazy_static;
use regex::Regex;

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::types::{Identity, Role};

lazy_static! {
    /// Structural JWT shape: three dot-separated base64url segments
    static ref JWT_SHAPE: Regex =
        Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$").unwrap();
}

/// Check whether a token has the structural shape of a JWT.
pub fn is_valid_jwt(token: &str) -> bool {
    JWT_SHAPE.is_match(token)
}

/// Decode the payload segment and extract `exp` (seconds since epoch).
fn decoded_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let value: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    value.get("exp")?.as_i64()
}

/// Check whether a token's payload expiry has passed. Malformed or
/// undecodable payloads count as expired.
pub fn is_token_expired(token: &str) -> bool {
    match decoded_expiry(token) {
        Some(exp) => exp < Utc::now().timestamp(),
        None => {
            tracing::debug!("token payload did not decode; treating as expired");
            true
        }
    }
}

/// A token is valid only if it has the JWT shape and is not expired.
pub fn is_token_valid(token: &str) -> bool {
    is_valid_jwt(token) && !is_token_expired(token)
}

/// Refresh tokens outlive access tokens by this factor.
const REFRESH_TTL_FACTOR: u64 = 24;

/// Mint an HS256 session token for an identity.
pub fn issue(identity_id: &str, email: &str, role: Role, config: &AuthConfig) -> Result<String, AuthError> {
    issue_with_ttl(identity_id, email, role, config, config.token_ttl_secs)
}

/// Mint a longer-lived refresh token for the same identity.
pub fn issue_refresh(
    identity_id: &str,
    email: &str,
    role: Role,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    issue_with_ttl(
        identity_id,
        email,
        role,
        config,
        config.token_ttl_secs * REFRESH_TTL_FACTOR,
    )
}

fn issue_with_ttl(
    identity_id: &str,
    email: &str,
    role: Role,
    config: &AuthConfig,
    ttl_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now().timestamp() as u64;
    let claims = SessionClaims {
        sub: identity_id.to_string(),
        email: email.to_string(),
        role,
        iat: now,
        exp: now + ttl_secs,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_ref()),
    )
    .map_err(|e| {
        tracing::error!(error = %e, "Failed to mint session token");
        AuthError::MalformedToken
    })
}

/// Validate a minted token's signature and decode its claims.
pub fn verify(token: &str, config: &AuthConfig) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_ref()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "Token validation failed");
        AuthError::MalformedToken
    })?;

    Ok(token_data.claims)
}

/// Extract a bearer token from an Authorization header.
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header.to_str().map_err(|_| AuthError::Unauthenticated)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::Unauthenticated)
    }
}

/// Authorization headers an HTTP client should send with this token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

// Convenience used by the mock directory and tests.
pub(crate) fn issue_for(identity: &Identity, config: &AuthConfig) -> Result<String, AuthError> {
    issue(&identity.id, &identity.email, identity.role, config)
}

pub(crate) fn refresh_for(identity: &Identity, config: &AuthConfig) -> Result<String, AuthError> {
    issue_refresh(&identity.id, &identity.email, identity.role, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_token(payload: serde_json::Value) -> String {
        let encoded = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("abc.{encoded}.ghi")
    }

    fn test_config() -> AuthConfig {
        AuthConfig::new("test-secret", 3600)
    }

    #[test]
    fn test_jwt_shape() {
        assert!(is_valid_jwt("abc.def.ghi"));
        assert!(is_valid_jwt("a-b_c.d-e_f.g-h_i"));

        assert!(!is_valid_jwt("not-a-jwt"));
        assert!(!is_valid_jwt("a.b"));
        assert!(!is_valid_jwt("a.b.c.d"));
        assert!(!is_valid_jwt("a.b."));
        assert!(!is_valid_jwt("a.b.c==")); // padding is not base64url
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let token = payload_token(serde_json::json!({
            "exp": Utc::now().timestamp() - 60
        }));
        assert!(is_token_expired(&token));
        assert!(!is_token_valid(&token));
    }

    #[test]
    fn test_future_expiry_is_not_expired() {
        let token = payload_token(serde_json::json!({
            "exp": Utc::now().timestamp() + 3600
        }));
        assert!(!is_token_expired(&token));
        assert!(is_token_valid(&token));
    }

    #[test]
    fn test_undecodable_payload_fails_closed() {
        // Not base64 JSON at all
        assert!(is_token_expired("abc.def.ghi"));
        // Valid base64, not JSON
        let garbage = format!("abc.{}.ghi", URL_SAFE_NO_PAD.encode("not json"));
        assert!(is_token_expired(&garbage));
        // JSON without exp
        let no_exp = payload_token(serde_json::json!({"sub": "1"}));
        assert!(is_token_expired(&no_exp));
        // No shape at all
        assert!(is_token_expired("not-a-jwt"));
    }

    #[test]
    fn test_minted_token_round_trips() {
        let config = test_config();
        let token = issue("1", "admin@mfcs.com", Role::Admin, &config).unwrap();

        assert!(is_valid_jwt(&token));
        assert!(!is_token_expired(&token));

        let claims = verify(&token, &config).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.email, "admin@mfcs.com");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_outlives_access_token() {
        let config = test_config();
        let access = issue("1", "admin@mfcs.com", Role::Admin, &config).unwrap();
        let refresh = issue_refresh("1", "admin@mfcs.com", Role::Admin, &config).unwrap();

        assert_ne!(access, refresh);
        assert!(is_token_valid(&refresh));

        let access_claims = verify(&access, &config).unwrap();
        let refresh_claims = verify(&refresh, &config).unwrap();
        assert!(refresh_claims.exp > access_claims.exp);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = issue("1", "admin@mfcs.com", Role::Admin, &test_config()).unwrap();
        let other = AuthConfig::new("other-secret", 3600);
        assert!(matches!(
            verify(&token, &other),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let header = HeaderValue::from_static("Bearer abc123");
        assert_eq!(extract_bearer_token(&header).unwrap(), "abc123");

        let header = HeaderValue::from_static("abc123");
        assert!(extract_bearer_token(&header).is_err());

        let header = HeaderValue::from_static("Basic abc123");
        assert!(extract_bearer_token(&header).is_err());
    }
}
