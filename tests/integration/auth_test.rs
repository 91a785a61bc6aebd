//! Integration tests for sign-in and per-request token checks.

mod helpers;

use axum::http::StatusCode;
use chrono::{TimeDelta, Utc};

use stationery_entity::RoleName;

#[tokio::test]
async fn test_signin_returns_bearer_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({
                "identifier": "employee@test.com",
                "secret": helpers::DEMO_SECRET,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["accessToken"].as_str().is_some());
    assert_eq!(response.body["tokenType"], "Bearer");
    assert!(response.body["expiresAt"].as_str().is_some());
}

#[tokio::test]
async fn test_signin_accepts_legacy_field_names() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({
                "email": "customer@test.com",
                "password": helpers::DEMO_SECRET,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_signin_identifier_is_case_insensitive() {
    let app = helpers::TestApp::new().await;
    let token = app.login("  Manager@Test.com ", helpers::DEMO_SECRET).await;

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["identifier"], "manager@test.com");
}

#[tokio::test]
async fn test_bad_credentials_are_indistinguishable() {
    let app = helpers::TestApp::new().await;

    let wrong_secret = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({
                "identifier": "employee@test.com",
                "secret": "wrongpassword",
            })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({
                "identifier": "nobody@test.com",
                "secret": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(wrong_secret.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_secret.body, unknown.body);
}

#[tokio::test]
async fn test_signin_rejects_blank_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/signin",
            Some(serde_json::json!({ "identifier": "", "secret": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_reports_roles() {
    let app = helpers::TestApp::new().await;
    let token = app.login("employee@test.com", helpers::DEMO_SECRET).await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["identifier"], "employee@test.com");
    assert_eq!(response.body["data"]["roles"], serde_json::json!(["EMPLOYEE"]));
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_manager_signin_then_list_roles() {
    let app = helpers::TestApp::new().await;
    app.create_identity("mgr@example.com", "pw123", &[RoleName::MANAGER]);

    let token = app.login("mgr@example.com", "pw123").await;
    let response = app.request("GET", "/api/roles", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response.body["data"]
        .as_array()
        .expect("role list")
        .iter()
        .filter_map(|r| r["name"].as_str())
        .collect();
    assert!(names.contains(&"MANAGER"));
    assert!(names.contains(&"CUSTOMER"));
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_identity("mgr@example.com", "pw123", &[RoleName::MANAGER]);

    let ttl = app.state.token_codec.ttl();
    let stale = app.token_issued_at("mgr@example.com", Utc::now() - ttl - TimeDelta::seconds(1));

    let response = app.request("GET", "/api/roles", None, Some(&stale)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.login("manager@test.com", helpers::DEMO_SECRET).await;

    let at = token.len() - 10;
    let replacement = if &token[at..at + 1] == "A" { "B" } else { "A" };
    let mut tampered = token.clone();
    tampered.replace_range(at..at + 1, replacement);

    let response = app.request("GET", "/api/roles", None, Some(&tampered)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_anonymous() {
    let app = helpers::TestApp::new().await;
    let token = app.login("manager@test.com", helpers::DEMO_SECRET).await;

    let response = app
        .request_with_authorization("GET", "/api/roles", &format!("Basic {token}"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleted_identity_token_stops_working() {
    let app = helpers::TestApp::new().await;
    app.create_identity("temp@example.com", "pw123", &[RoleName::MANAGER]);
    let token = app.login("temp@example.com", "pw123").await;

    app.state
        .identities
        .delete("temp@example.com")
        .expect("delete identity");

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_change_applies_to_existing_token() {
    let app = helpers::TestApp::new().await;
    app.create_identity("promoted@example.com", "pw123", &[RoleName::EMPLOYEE]);
    let token = app.login("promoted@example.com", "pw123").await;

    let before = app.request("GET", "/api/roles", None, Some(&token)).await;
    assert_eq!(before.status, StatusCode::FORBIDDEN);

    app.state
        .identities
        .assign_role("promoted@example.com", RoleName::MANAGER)
        .expect("assign role");

    let after = app.request("GET", "/api/roles", None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_bad_bearer_does_not_block_public_routes() {
    let app = helpers::TestApp::new().await;
    let ttl = app.state.token_codec.ttl();
    let expired = app.token_issued_at("manager@test.com", Utc::now() - ttl * 2);

    for token in ["garbage", expired.as_str()] {
        let health = app.request("GET", "/api/health", None, Some(token)).await;
        assert_eq!(health.status, StatusCode::OK);

        let signin = app
            .request(
                "POST",
                "/api/auth/signin",
                Some(serde_json::json!({
                    "identifier": "employee@test.com",
                    "secret": helpers::DEMO_SECRET,
                })),
                Some(token),
            )
            .await;
        assert_eq!(signin.status, StatusCode::OK);
        assert!(signin.body["accessToken"].as_str().is_some());
    }
}
