//! Bearer token verification.
//!
//! Tokens are issued by the wider application as HS256 JWTs. This service only verifies
//! them and reads the owner ID from the `sub` claim.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::server::error::auth::AuthError;

/// Claims this service reads. `exp` is checked during validation and not kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Owner (user) ID.
    pub sub: String,
}

/// Verifies tokens signed with the shared secret.
///
/// Cheap to clone; stored in `AppState`.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier for HS256 tokens signed with `secret`.
    ///
    /// Both `sub` and `exp` are required claims.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Malformed, expired, or wrongly signed token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }
}
