//! Helpers for minting tokens the service accepts.
//!
//! Tokens are HS256 JWTs whose `sub` claim is the owner's user ID.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::error::TestError;

/// Secret shared between test token minting and the service under test.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    exp: i64,
}

/// Signs a token for `owner_id` that expires `valid_for` from now.
///
/// A negative duration produces an already expired token.
///
/// # Returns
/// - `Ok(String)` - Encoded JWT
/// - `Err(TestError::Token)` - Signing failed
pub fn issue_token_with_expiry(
    secret: &str,
    owner_id: &str,
    valid_for: Duration,
) -> Result<String, TestError> {
    let claims = TestClaims {
        sub: owner_id,
        exp: (Utc::now() + valid_for).timestamp(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Signs a one hour token for `owner_id` with `TEST_JWT_SECRET`.
pub fn issue_token(owner_id: &str) -> Result<String, TestError> {
    issue_token_with_expiry(TEST_JWT_SECRET, owner_id, Duration::hours(1))
}
