//! Integration tests for self-service registration.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_register_creates_customer() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "identifier": "Ana@Example.com",
                "secret": "s3cret",
                "displayName": "Ana",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["identifier"], "ana@example.com");
    assert_eq!(response.body["data"]["displayName"], "Ana");
    assert_eq!(response.body["data"]["roles"], serde_json::json!(["CUSTOMER"]));
    assert!(response.body["data"].get("secretHash").is_none());

    let token = app.login("ana@example.com", "s3cret").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.body["data"]["roles"], serde_json::json!(["CUSTOMER"]));
}

#[tokio::test]
async fn test_register_via_customer_path() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/clientes/registro",
            Some(serde_json::json!({
                "email": "luis@example.com",
                "password": "s3cret",
                "nombre": "Luis",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["identifier"], "luis@example.com");
}

#[tokio::test]
async fn test_register_duplicate_is_conflict() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "identifier": "CUSTOMER@test.com",
                "secret": "s3cret",
                "displayName": "Again",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_rejects_invalid_identifier() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "identifier": "not-an-email",
                "secret": "s3cret",
                "displayName": "Nobody",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.state.identities.count(), 3);
}

#[tokio::test]
async fn test_register_ignores_caller_token() {
    let app = helpers::TestApp::new().await;
    let token = app.login("manager@test.com", helpers::DEMO_SECRET).await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "identifier": "new@example.com",
                "secret": "s3cret",
                "displayName": "New",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["roles"], serde_json::json!(["CUSTOMER"]));
}
