//! End-to-end API tests over the composed router.
//!
//! Drives the real application router in-process with the mock user
//! directory, covering the auth flows, admin gating, and the advisory
//! endpoints.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn test_config() -> mfcs_common::Config {
    mfcs_common::Config {
        directory_provider: "mock".to_string(),
        api_base_url: "http://localhost:8000/api".to_string(),
        jwt_secret: "integration-test-secret".to_string(),
        token_ttl_secs: 3600,
        session_dir: ".mfcs-test".to_string(),
        log_level: "info".to_string(),
        port: 0,
    }
}

fn app() -> Router {
    mfcs_app::create_app(&test_config()).expect("app should compose")
}

/// Send a JSON request to a clone of the router and decode the response.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/v1/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_success_returns_identity_and_token() {
    let app = app();
    let (status, body) = login(&app, "admin@mfcs.com", "admin123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "admin");
    assert_eq!(body["user"]["is_verified"], true);
    let token = body["access_token"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 3);
    let refresh = body["refresh_token"].as_str().unwrap();
    assert_eq!(refresh.split('.').count(), 3);
    assert_ne!(token, refresh);
}

#[tokio::test]
async fn test_login_rejects_invalid_credentials() {
    let app = app();
    let (status, body) = login(&app, "admin@mfcs.com", "wrong").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_blocks_unverified_account() {
    let app = app();
    let (status, body) = login(&app, "unverified@example.com", "test123").await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error_code(&body), "NOT_VERIFIED");
}

#[tokio::test]
async fn test_verify_returns_current_user() {
    let app = app();
    let (_, body) = login(&app, "ahmad@example.com", "farmer123").await;
    let token = body["access_token"].as_str().unwrap();

    let (status, body) = send(&app, Method::POST, "/v1/auth/verify", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "ahmad@example.com");
    assert_eq!(body["user"]["role"], "farmer");
}

#[tokio::test]
async fn test_refresh_token_exchanges_for_new_access_token() {
    let app = app();
    let (_, body) = login(&app, "admin@mfcs.com", "admin123").await;
    let refresh = body["refresh_token"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/auth/refresh",
        None,
        Some(json!({ "refresh": refresh })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let access = body["access"].as_str().unwrap();
    assert_eq!(access.split('.').count(), 3);

    // The new access token introspects back to the same user
    let (status, body) = send(&app, Method::POST, "/v1/auth/verify", Some(access), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "admin@mfcs.com");
}

#[tokio::test]
async fn test_registration_and_admin_review_flow() {
    let app = app();

    // Register a new account; it stays pending
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/auth/register",
        None,
        Some(json!({
            "name": "New Farmer",
            "email": "new@example.com",
            "password": "secret",
            "phone": "+92-300-0000000",
            "location": "Hunza",
            "user_type": "farmer"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["message"].as_str().unwrap().contains("verification"));

    // Admin sees it in the pending list
    let (_, body) = login(&app, "admin@mfcs.com", "admin123").await;
    let admin_token = body["access_token"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::GET,
        "/v1/admin/pending-users",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["status"], "pending");
    let id = users[0]["id"].as_str().unwrap().to_string();

    // Approve it
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/v1/admin/verify-user/{id}"),
        Some(&admin_token),
        Some(json!({ "action": "approve" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");

    // A second review has no effect on a decided record
    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/v1/admin/verify-user/{id}"),
        Some(&admin_token),
        Some(json!({ "action": "reject" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");
}

#[tokio::test]
async fn test_register_rejects_missing_fields() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/auth/register",
        None,
        Some(json!({
            "name": "",
            "email": "new@example.com",
            "password": "secret",
            "phone": "123"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_admin_routes_are_gated() {
    let app = app();

    // No token at all
    let (status, body) = send(&app, Method::GET, "/v1/admin/pending-users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "UNAUTHENTICATED");

    // A verified farmer is authenticated but under-ranked
    let (_, body) = login(&app, "ahmad@example.com", "farmer123").await;
    let farmer_token = body["access_token"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::GET,
        "/v1/admin/pending-users",
        Some(&farmer_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error_code(&body), "INSUFFICIENT_ROLE");

    // Garbage bearer token
    let (status, body) = send(
        &app,
        Method::GET,
        "/v1/admin/pending-users",
        Some("not-a-jwt"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error_code(&body), "MALFORMED_TOKEN");
}

#[tokio::test]
async fn test_advisory_crops_endpoint() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/advisory/crops",
        None,
        Some(json!({
            "nitrogen": 40, "phosphorus": 20, "potassium": 20,
            "rainfall": 300, "ph": 7, "temperature": 20
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let recommendations = body["recommendations"].as_array().unwrap();
    assert!(recommendations.iter().any(|r| r["crop"] == "Wheat"));

    // All-defaulted inputs clear almost no thresholds
    let (status, body) = send(&app, Method::POST, "/v1/advisory/crops", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["recommendations"].as_array().unwrap().len() <= 1);
}

#[tokio::test]
async fn test_advisory_fertilizer_endpoint() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/advisory/fertilizer",
        None,
        Some(json!({ "crop": "wheat", "area": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 3);
    assert_eq!(recommendations[0]["amount"], 261);
    assert_eq!(recommendations[1]["amount"], 300);
    assert_eq!(recommendations[2]["amount"], 95);
    assert_eq!(body["total_cost"], 209 + 360 + 143);

    // Unknown crop fails loudly at the HTTP boundary
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/advisory/fertilizer",
        None,
        Some(json!({ "crop": "unknown-crop" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "NOT_FOUND");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Unknown crop"));
}
