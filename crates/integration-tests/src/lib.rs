//! Test harness for driving the storefront router in-process.
//!
//! Tests build the same router the binary serves (`recircuit_storefront::app`)
//! and push requests through it with `tower::ServiceExt::oneshot`, so the
//! whole middleware stack - sessions included - is exercised without a
//! listening socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use recircuit_storefront::config::StorefrontConfig;
use recircuit_storefront::state::AppState;
use recircuit_storefront::storage::{MemStorage, seed};

/// Build the full application with the seeded catalog and no users.
#[must_use]
pub fn test_app() -> Router {
    let storage = MemStorage::new();
    for product in seed::products() {
        storage.insert_product(product);
    }
    let state = AppState::new(StorefrontConfig::default(), storage);
    recircuit_storefront::app(state)
}

/// A decoded response: status, headers, and JSON body (Null when empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The session cookie pair (`name=value`) from `Set-Cookie`, if any.
    #[must_use]
    pub fn session_cookie(&self) -> Option<String> {
        let raw = self.headers.get(SET_COOKIE)?.to_str().ok()?;
        raw.split(';').next().map(str::to_owned)
    }
}

/// Send one request through a clone of the app.
///
/// # Panics
///
/// Panics on transport-level failures; tests treat those as bugs.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<&Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request build failed"),
        None => builder.body(Body::empty()).expect("request build failed"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        // Most endpoints return JSON; plain-text bodies (e.g. /health) are
        // surfaced as a JSON string rather than panicking the harness.
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Register an account and return the session cookie for it.
///
/// # Panics
///
/// Panics if registration does not succeed.
pub async fn register_session(app: &Router, phone: &str, name: &str) -> String {
    let response = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(&serde_json::json!({
            "phone": phone,
            "password": "correct horse",
            "name": name,
        })),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK, "register failed: {:?}", response.body);
    response.session_cookie().expect("no session cookie set")
}
