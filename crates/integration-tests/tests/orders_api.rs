//! Integration tests for order creation and scoping.

use axum::http::StatusCode;
use serde_json::json;

use recircuit_core::Order;
use recircuit_core::types::{OrderStatus, UserId};
use recircuit_integration_tests::{register_session, send, test_app};

fn order_payload(total: i64) -> serde_json::Value {
    json!({
        "items": [
            {"productId": 1, "name": "iPhone 13 Pro (Refurbished)", "quantity": 1, "price": 45999},
            {"productId": 6, "name": "Sony WH-1000XM4", "quantity": 2, "price": 14999},
        ],
        "total": total,
        "address": "14 MG Road, Bengaluru 560001",
    })
}

#[tokio::test]
async fn order_endpoints_require_a_session() {
    let app = test_app();

    let list = send(&app, "GET", "/api/orders", None, None).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);
    assert_eq!(list.body["message"], "Authentication required");

    let create = send(&app, "POST", "/api/orders", None, Some(&order_payload(75997))).await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn checkout_creates_a_pending_order_for_the_session_user() {
    let app = test_app();
    let cookie = register_session(&app, "9876543210", "Asha").await;

    let created = send(
        &app,
        "POST",
        "/api/orders",
        Some(&cookie),
        Some(&order_payload(75997)),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["id"], 1);
    assert_eq!(created.body["userId"], 1);
    assert_eq!(created.body["status"], "Pending");
    assert_eq!(created.body["total"], 75997);
    assert_eq!(created.body["items"][1]["productId"], 6);
    assert_eq!(created.body["items"][1]["quantity"], 2);
    assert!(created.body.get("createdAt").is_some());

    // The body parses against the shared contract type.
    let order: Order = serde_json::from_value(created.body.clone()).expect("contract mismatch");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.user_id, UserId::new(1));

    // Ids keep counting up.
    let second = send(
        &app,
        "POST",
        "/api/orders",
        Some(&cookie),
        Some(&order_payload(45999)),
    )
    .await;
    assert_eq!(second.body["id"], 2);

    let listed = send(&app, "GET", "/api/orders", Some(&cookie), None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn orders_are_scoped_to_the_caller() {
    let app = test_app();
    let asha = register_session(&app, "9000000001", "Asha").await;
    let vikram = register_session(&app, "9000000002", "Vikram").await;

    send(&app, "POST", "/api/orders", Some(&asha), Some(&order_payload(75997))).await;
    send(&app, "POST", "/api/orders", Some(&asha), Some(&order_payload(45999))).await;
    send(&app, "POST", "/api/orders", Some(&vikram), Some(&order_payload(14999))).await;

    let asha_orders = send(&app, "GET", "/api/orders", Some(&asha), None).await;
    let vikram_orders = send(&app, "GET", "/api/orders", Some(&vikram), None).await;

    assert_eq!(asha_orders.body.as_array().map(Vec::len), Some(2));
    assert_eq!(vikram_orders.body.as_array().map(Vec::len), Some(1));
    assert_eq!(vikram_orders.body[0]["total"], 14999);

    // Every listed order belongs to the caller.
    for order in asha_orders.body.as_array().expect("array") {
        assert_eq!(order["userId"], 1);
    }
}

#[tokio::test]
async fn malformed_order_body_is_a_400() {
    let app = test_app();
    let cookie = register_session(&app, "9876543210", "Asha").await;

    let response = send(
        &app,
        "POST",
        "/api/orders",
        Some(&cookie),
        Some(&json!({"address": "missing items and total"})),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid request body");
}
