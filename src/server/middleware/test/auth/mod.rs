use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap, HeaderValue,
};
use chrono::Duration;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{extract_token, AuthGuard},
    service::token::TokenVerifier,
};
use test_utils::{
    builder::TestBuilder,
    factory,
    token::{issue_token, issue_token_with_expiry, TEST_JWT_SECRET},
};

mod extract_token;

fn headers(entries: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in entries {
        headers.append(name.clone(), HeaderValue::from_str(value).unwrap());
    }
    headers
}
