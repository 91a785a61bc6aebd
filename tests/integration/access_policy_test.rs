//! Integration tests for route access rules.

mod helpers;

use axum::http::StatusCode;

use stationery_entity::RoleName;

#[tokio::test]
async fn test_anonymous_business_route_is_unauthorized() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/productos", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_token_on_business_route_is_unauthorized() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/productos", None, Some("not.a.token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_customer_cannot_delete_product() {
    let app = helpers::TestApp::new().await;
    let token = app.login("customer@test.com", helpers::DEMO_SECRET).await;

    let response = app
        .request("DELETE", "/api/productos/1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_manager_passes_policy_on_unrouted_path() {
    let app = helpers::TestApp::new().await;
    let token = app.login("manager@test.com", helpers::DEMO_SECRET).await;

    let response = app
        .request("DELETE", "/api/productos/1", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_customer_may_browse_catalog() {
    let app = helpers::TestApp::new().await;
    let token = app.login("customer@test.com", helpers::DEMO_SECRET).await;

    let response = app.request("GET", "/api/productos", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_roles_listing_is_manager_or_admin() {
    let app = helpers::TestApp::new().await;
    app.create_identity("root@example.com", "pw123", &[RoleName::ADMIN]);

    let customer = app.login("customer@test.com", helpers::DEMO_SECRET).await;
    let employee = app.login("employee@test.com", helpers::DEMO_SECRET).await;
    let admin = app.login("root@example.com", "pw123").await;

    let as_customer = app.request("GET", "/api/roles", None, Some(&customer)).await;
    let as_employee = app.request("GET", "/api/roles", None, Some(&employee)).await;
    let as_admin = app.request("GET", "/api/roles", None, Some(&admin)).await;

    assert_eq!(as_customer.status, StatusCode::FORBIDDEN);
    assert_eq!(as_employee.status, StatusCode::FORBIDDEN);
    assert_eq!(as_admin.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_area_requires_admin() {
    let app = helpers::TestApp::new().await;
    let manager = app.login("manager@test.com", helpers::DEMO_SECRET).await;

    let anonymous = app.request("GET", "/api/admin/users", None, None).await;
    let as_manager = app
        .request("GET", "/api/admin/users", None, Some(&manager))
        .await;

    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(as_manager.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_back_office_is_staff_only() {
    let app = helpers::TestApp::new().await;
    let customer = app.login("customer@test.com", helpers::DEMO_SECRET).await;
    let employee = app.login("employee@test.com", helpers::DEMO_SECRET).await;

    let as_customer = app
        .request("GET", "/api/inventarios", None, Some(&customer))
        .await;
    let as_employee = app
        .request("GET", "/api/inventarios", None, Some(&employee))
        .await;

    assert_eq!(as_customer.status, StatusCode::FORBIDDEN);
    assert_eq!(as_employee.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_identity_without_roles_is_authenticated_only() {
    let app = helpers::TestApp::new().await;
    app.create_identity("bare@example.com", "pw123", &[]);
    let token = app.login("bare@example.com", "pw123").await;

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    let roles = app.request("GET", "/api/roles", None, Some(&token)).await;

    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["roles"], serde_json::json!([]));
    assert_eq!(roles.status, StatusCode::FORBIDDEN);
}
