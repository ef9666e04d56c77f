//! Booking submission tests.

use axum::http::StatusCode;

use guesthouse_store::traits::BookingStore;

use crate::helpers::{TestApp, booking_body, future_date};

#[tokio::test]
async fn test_successful_booking_returns_reference_and_pending_status() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room = &rooms[0];
    let room_id = room["id"].as_str().unwrap();
    let price = room["price"].as_i64().unwrap();

    let body = booking_body(room_id, &future_date(30), &future_date(32));
    let response = app.request("POST", "/api/bookings", Some(body), None).await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["booking"]["status"], "pending");
    assert_eq!(data["booking"]["total_price"], 2 * price);
    let reference = data["reference"].as_str().unwrap();
    assert_eq!(reference.len(), 8);
    assert_eq!(reference, reference.to_uppercase());

    let stored = app.store.list_bookings(true).await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_booking_publishes_created_event() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room_id = rooms[0]["id"].as_str().unwrap().to_string();
    let mut events = app.feed.subscribe();

    let body = booking_body(&room_id, &future_date(10), &future_date(12));
    let response = app.request("POST", "/api/bookings", Some(body), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let event = events.try_recv().expect("one created event");
    match event {
        guesthouse_core::events::BookingEvent::Created { .. } => {}
        other => panic!("expected Created, got {other:?}"),
    }
    assert!(events.try_recv().is_err(), "exactly one event");
}

#[tokio::test]
async fn test_field_violations_rejected_with_field_map_and_no_record() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room_id = rooms[0]["id"].as_str().unwrap();

    let body = serde_json::json!({
        "room_id": room_id,
        "guest_name": "J",
        "guest_email": "not-an-email",
        "guest_phone": "12345",
        "check_in": future_date(30),
        "check_out": future_date(32),
        "guests_count": 2,
        "special_requests": "x".repeat(501),
    });
    let response = app.request("POST", "/api/bookings", Some(body), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let fields = &response.body["details"]["fields"];
    assert_eq!(fields["guest_name"], "Name must be at least 2 characters");
    assert_eq!(fields["guest_email"], "Invalid email address");
    assert_eq!(fields["guest_phone"], "Phone must be at least 10 digits");
    assert_eq!(
        fields["special_requests"],
        "Special requests must be less than 500 characters"
    );

    assert!(app.store.list_bookings(true).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_overlapping_dates_conflict() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room_id = rooms[0]["id"].as_str().unwrap().to_string();

    let first = booking_body(&room_id, &future_date(30), &future_date(33));
    let response = app.request("POST", "/api/bookings", Some(first), None).await;
    assert_eq!(response.status, StatusCode::OK);

    // Second request encloses the first; both endpoints are free.
    let second = booking_body(&room_id, &future_date(29), &future_date(34));
    let response = app.request("POST", "/api/bookings", Some(second), None).await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // Back-to-back stay starting on the first stay's check-out is fine.
    let turnover = booking_body(&room_id, &future_date(33), &future_date(35));
    let response = app.request("POST", "/api/bookings", Some(turnover), None).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
}

#[tokio::test]
async fn test_same_dates_fine_for_other_room() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let first_room = rooms[0]["id"].as_str().unwrap().to_string();
    let other_room = rooms[1]["id"].as_str().unwrap().to_string();

    let body = booking_body(&first_room, &future_date(30), &future_date(32));
    assert_eq!(
        app.request("POST", "/api/bookings", Some(body), None).await.status,
        StatusCode::OK
    );

    let body = booking_body(&other_room, &future_date(30), &future_date(32));
    assert_eq!(
        app.request("POST", "/api/bookings", Some(body), None).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_zero_nights_rejected() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room_id = rooms[0]["id"].as_str().unwrap();

    let body = booking_body(room_id, &future_date(30), &future_date(30));
    let response = app.request("POST", "/api/bookings", Some(body), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_past_check_in_rejected() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room_id = rooms[0]["id"].as_str().unwrap();

    let body = booking_body(room_id, &future_date(-2), &future_date(2));
    let response = app.request("POST", "/api/bookings", Some(body), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_guest_count_must_fit_capacity() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    // Comfort Room sleeps two.
    let room = &rooms[0];
    assert_eq!(room["capacity"], 2);
    let room_id = room["id"].as_str().unwrap();

    let mut body = booking_body(room_id, &future_date(30), &future_date(32));
    body["guests_count"] = serde_json::json!(3);
    let response = app.request("POST", "/api/bookings", Some(body), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let mut body = booking_body(room_id, &future_date(30), &future_date(32));
    body["guests_count"] = serde_json::json!(0);
    let response = app.request("POST", "/api/bookings", Some(body), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_room_not_found() {
    let app = TestApp::new();
    let body = booking_body(
        &uuid::Uuid::new_v4().to_string(),
        &future_date(30),
        &future_date(32),
    );
    let response = app.request("POST", "/api/bookings", Some(body), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
