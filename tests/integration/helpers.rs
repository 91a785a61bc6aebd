//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;

use stationery_api::AppState;
use stationery_auth::PasswordHasher;
use stationery_core::config::AppConfig;
use stationery_entity::{Identity, NewIdentity, RoleName};

/// Secret every seeded demo identity signs in with.
pub const DEMO_SECRET: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct access to repositories and the codec
    pub state: AppState,
}

/// A parsed test response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with the demo identities seeded
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret-0123456789abcdef".to_string();
        config.seed.demo_identities = true;
        config.seed.demo_secret = DEMO_SECRET.to_string();

        let state = stationery_api::bootstrap(config).expect("Failed to bootstrap state");
        let router = stationery_api::build_app(state.clone());

        Self { router, state }
    }

    /// Create an identity holding exactly `roles`
    pub fn create_identity(&self, identifier: &str, secret: &str, roles: &[RoleName]) -> Identity {
        let secret_hash = PasswordHasher::new()
            .hash_password(secret)
            .expect("Failed to hash secret");

        self.state
            .identities
            .create(NewIdentity {
                identifier: identifier.to_string(),
                secret_hash,
                display_name: identifier.to_string(),
                roles: roles.iter().cloned().collect::<BTreeSet<_>>(),
            })
            .expect("Failed to create identity")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(t) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
        }

        self.send_with(builder, body).await
    }

    /// Make a request with a raw `Authorization` header value
    pub async fn request_with_authorization(
        &self,
        method: &str,
        path: &str,
        authorization: &str,
    ) -> TestResponse {
        let builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::AUTHORIZATION, authorization);
        self.send_with(builder, None).await
    }

    async fn send_with(
        &self,
        mut builder: axum::http::request::Builder,
        body: Option<Value>,
    ) -> TestResponse {
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).expect("Failed to encode body"))
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("Failed to build request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Sign in and return the access token
    pub async fn login(&self, identifier: &str, secret: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/signin",
                Some(serde_json::json!({
                    "identifier": identifier,
                    "secret": secret,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
        response.body["accessToken"]
            .as_str()
            .expect("No access token in response")
            .to_string()
    }

    /// Sign a token for `subject` as if issued at `issued_at`
    pub fn token_issued_at(&self, subject: &str, issued_at: DateTime<Utc>) -> String {
        self.state
            .token_codec
            .issue(subject, issued_at)
            .expect("Failed to issue token")
            .token
    }
}
