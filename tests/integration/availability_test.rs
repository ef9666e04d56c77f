//! Availability calendar tests.

use axum::http::StatusCode;

use crate::helpers::{TestApp, booking_body, future_date};

#[tokio::test]
async fn test_calendar_marks_stay_nights_but_not_checkout_day() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room_id = rooms[0]["id"].as_str().unwrap().to_string();

    let body = booking_body(&room_id, &future_date(10), &future_date(13));
    assert_eq!(
        app.request("POST", "/api/bookings", Some(body), None).await.status,
        StatusCode::OK
    );

    let path = format!(
        "/api/rooms/{room_id}/availability?from={}&to={}",
        future_date(9),
        future_date(14)
    );
    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    let booked: Vec<&str> = data["booked"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    let available: Vec<&str> = data["available"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();

    assert_eq!(
        booked,
        vec![future_date(10), future_date(11), future_date(12)]
    );
    // Check-out day and the window edges stay available.
    assert!(available.contains(&future_date(13).as_str()));
    assert!(available.contains(&future_date(9).as_str()));
    assert!(available.contains(&future_date(14).as_str()));
}

#[tokio::test]
async fn test_cancelled_booking_frees_calendar() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room_id = rooms[0]["id"].as_str().unwrap().to_string();

    let body = booking_body(&room_id, &future_date(10), &future_date(12));
    let created = app.request("POST", "/api/bookings", Some(body), None).await;
    let booking_id = created.body["data"]["booking"]["id"].as_str().unwrap().to_string();

    let token = app.admin_login().await;
    let response = app
        .request(
            "PUT",
            &format!("/api/admin/bookings/{booking_id}/status"),
            Some(serde_json::json!({ "status": "cancelled" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let path = format!(
        "/api/rooms/{room_id}/availability?from={}&to={}",
        future_date(10),
        future_date(12)
    );
    let response = app.request("GET", &path, None, None).await;
    assert!(response.body["data"]["booked"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_availability_window_validation() {
    let app = TestApp::new();
    let rooms = app.rooms().await;
    let room_id = rooms[0]["id"].as_str().unwrap();

    let path = format!(
        "/api/rooms/{room_id}/availability?from={}&to={}",
        future_date(14),
        future_date(9)
    );
    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_availability_unknown_room() {
    let app = TestApp::new();
    let path = format!(
        "/api/rooms/{}/availability?from={}&to={}",
        uuid::Uuid::new_v4(),
        future_date(9),
        future_date(14)
    );
    let response = app.request("GET", &path, None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
