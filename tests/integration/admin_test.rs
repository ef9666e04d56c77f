//! Admin dashboard flow tests.

use axum::http::StatusCode;

use crate::helpers::{TestApp, booking_body, future_date};

#[tokio::test]
async fn test_wrong_password_rejected_inline() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(serde_json::json!({ "password": "wrong" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid password");
}

#[tokio::test]
async fn test_admin_routes_require_session() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/admin/bookings", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/admin/bookings", None, Some("bogus-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let token = app.admin_login().await;
    let response = app
        .request("GET", "/api/admin/bookings", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_confirm_flow_updates_filters_and_revenue() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room_id = rooms[0]["id"].as_str().unwrap().to_string();
    let price = rooms[0]["price"].as_i64().unwrap();

    let created = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(&room_id, &future_date(30), &future_date(32))),
            None,
        )
        .await;
    let booking_id = created.body["data"]["booking"]["id"].as_str().unwrap().to_string();

    let token = app.admin_login().await;

    // Starts pending, not confirmed.
    let pending = app
        .request("GET", "/api/admin/bookings?status=pending", None, Some(&token))
        .await;
    assert_eq!(pending.body["data"].as_array().unwrap().len(), 1);
    let confirmed = app
        .request("GET", "/api/admin/bookings?status=confirmed", None, Some(&token))
        .await;
    assert!(confirmed.body["data"].as_array().unwrap().is_empty());

    // Confirm it; the response carries the refetched full list.
    let response = app
        .request(
            "PUT",
            &format!("/api/admin/bookings/{booking_id}/status"),
            Some(serde_json::json!({ "status": "confirmed" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["booking"]["status"], "confirmed");
    assert_eq!(response.body["data"]["bookings"].as_array().unwrap().len(), 1);

    let confirmed = app
        .request("GET", "/api/admin/bookings?status=confirmed", None, Some(&token))
        .await;
    assert_eq!(confirmed.body["data"].as_array().unwrap().len(), 1);

    let dashboard = app
        .request("GET", "/api/admin/dashboard", None, Some(&token))
        .await;
    assert_eq!(dashboard.body["data"]["revenue"], 2 * price);
    assert_eq!(dashboard.body["data"]["pending"], 0);
}

#[tokio::test]
async fn test_no_second_transition_offered() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room_id = rooms[0]["id"].as_str().unwrap().to_string();

    let created = app
        .request(
            "POST",
            "/api/bookings",
            Some(booking_body(&room_id, &future_date(30), &future_date(32))),
            None,
        )
        .await;
    let booking_id = created.body["data"]["booking"]["id"].as_str().unwrap().to_string();

    let token = app.admin_login().await;
    let status_path = format!("/api/admin/bookings/{booking_id}/status");

    let response = app
        .request(
            "PUT",
            &status_path,
            Some(serde_json::json!({ "status": "confirmed" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Confirmed is terminal in the review flow.
    let response = app
        .request(
            "PUT",
            &status_path,
            Some(serde_json::json!({ "status": "cancelled" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invalid_status_and_filter_rejected() {
    let app = TestApp::new();
    let token = app.admin_login().await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/bookings/{}/status", uuid::Uuid::new_v4()),
            Some(serde_json::json!({ "status": "archived" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/api/admin/bookings?status=bogus", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = TestApp::new();
    let token = app.admin_login().await;

    let response = app
        .request("POST", "/api/admin/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/admin/bookings", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
