//! Integration tests for registration, login, and sessions.

use axum::http::StatusCode;
use serde_json::json;

use recircuit_integration_tests::{send, test_app};

#[tokio::test]
async fn register_creates_an_account_and_a_session() {
    let app = test_app();
    let response = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(&json!({
            "phone": "9876543210",
            "password": "correct horse",
            "name": "Asha",
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["phone"], "9876543210");
    assert_eq!(response.body["name"], "Asha");
    // The hash stays inside the store.
    assert!(response.body.get("password").is_none());
    assert!(response.session_cookie().is_some());
}

#[tokio::test]
async fn duplicate_phone_registration_names_the_field() {
    let app = test_app();
    let body = json!({
        "phone": "9876543210",
        "password": "correct horse",
        "name": "Asha",
    });

    let first = send(&app, "POST", "/api/auth/register", None, Some(&body)).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = send(&app, "POST", "/api/auth/register", None, Some(&body)).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.body["message"], "Phone number already registered");
    assert_eq!(second.body["field"], "phone");
}

#[tokio::test]
async fn weak_password_and_bad_phone_are_field_level_400s() {
    let app = test_app();

    let weak = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(&json!({"phone": "9876543210", "password": "short", "name": ""})),
    )
    .await;
    assert_eq!(weak.status, StatusCode::BAD_REQUEST);
    assert_eq!(weak.body["field"], "password");

    let bad_phone = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(&json!({"phone": "not-a-phone", "password": "correct horse", "name": ""})),
    )
    .await;
    assert_eq!(bad_phone.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_phone.body["field"], "phone");
}

#[tokio::test]
async fn login_round_trip() {
    let app = test_app();
    send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(&json!({"phone": "9876543210", "password": "correct horse", "name": "Asha"})),
    )
    .await;

    let ok = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(&json!({"phone": "9876543210", "password": "correct horse"})),
    )
    .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.body["id"], 1);
    assert!(ok.session_cookie().is_some());

    let wrong = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(&json!({"phone": "9876543210", "password": "battery staple"})),
    )
    .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["message"], "Invalid phone number or password");

    let unknown = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(&json!({"phone": "9000000000", "password": "correct horse"})),
    )
    .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_body_is_a_400() {
    let app = test_app();
    let response = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(&json!({"phone": "9876543210"})),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid request body");
}

#[tokio::test]
async fn logout_drops_the_session() {
    let app = test_app();
    let cookie = recircuit_integration_tests::register_session(&app, "9876543210", "Asha").await;

    // Session works before logout.
    let before = send(&app, "GET", "/api/orders", Some(&cookie), None).await;
    assert_eq!(before.status, StatusCode::OK);

    let logout = send(&app, "POST", "/api/auth/logout", Some(&cookie), None).await;
    assert_eq!(logout.status, StatusCode::NO_CONTENT);

    let after = send(&app, "GET", "/api/orders", Some(&cookie), None).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}
