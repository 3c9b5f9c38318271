use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenVerifier,
};

/// Cookie carrying the token for browser clients.
pub static AUTH_COOKIE: &str = "auth_token";

/// Resolves the authenticated owner of a request.
///
/// The token is read from `Authorization: Bearer <token>` first and from the
/// `auth_token` cookie second. The token's subject must exist as a user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenVerifier, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the request and loads its user.
    ///
    /// # Returns
    /// - `Ok(User)` - Owner of the request
    /// - `Err(AuthError::MissingToken)` - No token in header or cookie
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject has no user record
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(token) = extract_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(&claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        Ok(User::from_entity(user))
    }
}

/// Extracts the raw token from the request headers.
///
/// The `Bearer` scheme is matched case-insensitively. An `Authorization` header with
/// another scheme does not fall back to the cookie.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    if let Some(value) = headers.get(AUTHORIZATION) {
        let value = value.to_str().ok()?;
        let (scheme, token) = value.split_once(' ')?;
        let token = token.trim();

        return (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token);
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE)
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
}
