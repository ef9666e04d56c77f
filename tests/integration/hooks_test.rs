//! Notification webhook tests.
//!
//! Forwarders are unconfigured in the test app, so every path here
//! resolves without an outbound call.

use axum::http::StatusCode;

use guesthouse_store::traits::DeviceTokenStore;

use crate::helpers::TestApp;

fn payload() -> serde_json::Value {
    serde_json::json!({
        "booking_id": "a1b2c3d4-0000-0000-0000-000000000000",
        "guest_name": "Jane Doe",
        "guest_phone": "+1 234 567 8900",
        "room_name": "Deluxe Room",
        "check_in": "September 10, 2026",
        "check_out": "September 12, 2026",
        "total_price": 298,
    })
}

#[tokio::test]
async fn test_whatsapp_hook_skips_without_configuration() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/hooks/notify-booking", Some(payload()), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(
        response.body["message"]
            .as_str()
            .unwrap()
            .contains("skipped")
    );
}

#[tokio::test]
async fn test_whatsapp_hook_rejects_blank_fields() {
    let app = TestApp::new();
    let mut body = payload();
    body["guest_name"] = serde_json::json!("   ");

    let response = app
        .request("POST", "/api/hooks/notify-booking", Some(body), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_whatsapp_hook_rejects_missing_fields() {
    let app = TestApp::new();
    let body = serde_json::json!({ "booking_id": "a1b2c3d4" });

    let response = app
        .request("POST", "/api/hooks/notify-booking", Some(body), None)
        .await;
    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_push_hook_with_no_devices() {
    let app = TestApp::new();
    let response = app
        .request("POST", "/api/hooks/push", Some(payload()), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "No devices to notify");
}

#[tokio::test]
async fn test_push_hook_reports_missing_server_key_as_soft_failure() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/devices",
            Some(serde_json::json!({ "token": "tok-1", "device_type": "android" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/api/hooks/push", Some(payload()), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "FCM not configured");
}

#[tokio::test]
async fn test_device_registration_is_an_upsert() {
    let app = TestApp::new();

    for device_type in ["android", "ios"] {
        let response = app
            .request(
                "POST",
                "/api/devices",
                Some(serde_json::json!({ "token": "tok-1", "device_type": device_type })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let tokens = app.store.list_tokens().await.unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].device_type, "ios");
}

#[tokio::test]
async fn test_device_registration_requires_token() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/devices",
            Some(serde_json::json!({ "token": "", "device_type": "android" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
