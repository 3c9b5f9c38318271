use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, ETAG, IF_MATCH},
        Method, Request, StatusCode,
    },
    Router,
};
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder, context::TestContext, factory, token::issue_token, token::TEST_JWT_SECRET,
};
use tower::ServiceExt;

use crate::server::{
    config::SettingsConfig, router::router, service::token::TokenVerifier, state::AppState,
};


/// Full API router over an in-memory database with one known user.
struct TestApp {
    // Keeps the database alive for the router's lifetime
    _context: TestContext,
    router: Router,
    token: String,
}

/// Response status, `ETag` and JSON body.
struct TestResponse {
    status: StatusCode,
    etag: Option<String>,
    body: Value,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_config(SettingsConfig::default()).await
    }

    async fn with_config(config: SettingsConfig) -> Self {
        let context = TestBuilder::new().with_settings_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();

        let user = factory::user::UserFactory::new(&db)
            .id("owner-1")
            .build()
            .await
            .unwrap();
        let token = issue_token(&user.id).unwrap();

        let state = AppState::new(db, TokenVerifier::new(TEST_JWT_SECRET), config);

        Self {
            _context: context,
            router: router().with_state(state),
            token,
        }
    }

    fn request(&self, method: Method, uri: &str) -> axum::http::request::Builder {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let etag = response
            .headers()
            .get(ETAG)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse { status, etag, body }
    }

    async fn get(&self, uri: &str) -> TestResponse {
        let request = self.request(Method::GET, uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn send_json(&self, method: Method, body: Value, if_match: Option<&str>) -> TestResponse {
        let mut builder = self
            .request(method, "/api/settings")
            .header(CONTENT_TYPE, "application/json");
        if let Some(tag) = if_match {
            builder = builder.header(IF_MATCH, tag);
        }

        let request = builder.body(Body::from(body.to_string())).unwrap();
        self.send(request).await
    }
}
