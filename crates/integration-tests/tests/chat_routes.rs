//! Integration tests for the chat surface.
//!
//! Each test drives the full router (session layer, request ID, auth gate)
//! with an in-memory session store.

#![allow(clippy::unwrap_used)]

use axum::http::{Method, StatusCode};
use serde_json::json;

use ser_integration_tests::{KNOWN_USER, MISSING_USER, TestApp};

const PARTNER_NAMES: [&str; 4] = ["سارة", "محمد", "فاطمة", "علي"];

/// Every chat route with a body that would otherwise succeed.
const CHAT_ENDPOINTS: [(&str, &str, Option<&str>); 14] = [
    ("POST", "/api/chat/start-session", None),
    ("POST", "/api/chat/end-session", None),
    ("GET", "/api/chat/session-status", None),
    ("POST", "/api/chat/report", Some(r#"{"reason":"spam"}"#)),
    ("POST", "/api/chat/send-message", Some(r#"{"message":"hi"}"#)),
    ("GET", "/api/chat/get-messages", None),
    ("POST", "/api/chat/request-reconnect", Some(r#"{"target_user_id":"7"}"#)),
    (
        "POST",
        "/api/chat/respond-reconnect",
        Some(r#"{"request_id":"1","response":"accepted"}"#),
    ),
    ("GET", "/api/chat/get-reconnect-requests", None),
    ("GET", "/api/chat/met-users", None),
    ("POST", "/api/chat/start-direct-chat", Some(r#"{"target_user_id":"55"}"#)),
    ("POST", "/api/chat/report-problem", Some(r#"{"problem":"lag"}"#)),
    ("POST", "/api/chat/contact-us", Some(r#"{"subject":"hello"}"#)),
    ("GET", "/api/chat/stats", None),
];

fn is_four_digits(value: &serde_json::Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()))
}

// ============================================================================
// Auth gate
// ============================================================================

#[tokio::test]
async fn test_every_chat_route_rejects_missing_session() {
    let app = TestApp::new();

    for (method, uri, body) in CHAT_ENDPOINTS {
        let resp = app
            .request(Method::from_bytes(method.as_bytes()).unwrap(), uri, None, body)
            .await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(resp.json, json!({"error": "User not logged in"}), "{uri}");
    }
}

#[tokio::test]
async fn test_session_without_identity_is_unauthorized() {
    let app = TestApp::new();
    let cookie = app.anonymous_session().await;

    let resp = app.get("/api/chat/session-status", Some(&cookie)).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp.json["error"], "User not logged in");
}

#[tokio::test]
async fn test_every_chat_route_rejects_unknown_identity() {
    let app = TestApp::new();
    let cookie = app.login(MISSING_USER).await;

    for (method, uri, body) in CHAT_ENDPOINTS {
        let resp = app
            .request(
                Method::from_bytes(method.as_bytes()).unwrap(),
                uri,
                Some(&cookie),
                body,
            )
            .await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(resp.json, json!({"error": "User not found"}), "{uri}");
    }
}

#[tokio::test]
async fn test_non_numeric_identity_is_not_found() {
    let app = TestApp::new();

    for identity in [json!("ghost"), json!(true), json!([1])] {
        let cookie = app.login_with_identity(identity.clone()).await;
        let resp = app.get("/api/chat/session-status", Some(&cookie)).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "{identity}");
        assert_eq!(resp.json, json!({"error": "User not found"}));
    }
}

#[tokio::test]
async fn test_numeric_string_identity_resolves() {
    let app = TestApp::new();
    let cookie = app.login_with_identity(json!("1")).await;

    let resp = app.get("/api/chat/session-status", Some(&cookie)).await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_null_identity_is_unauthorized() {
    let app = TestApp::new();
    let cookie = app.login_with_identity(serde_json::Value::Null).await;

    let resp = app.get("/api/chat/session-status", Some(&cookie)).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_runs_before_body_validation() {
    let app = TestApp::new();

    let resp = app.post("/api/chat/send-message", None, Some("{}")).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_every_chat_route_succeeds_for_known_user() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    for (method, uri, body) in CHAT_ENDPOINTS {
        let resp = app
            .request(
                Method::from_bytes(method.as_bytes()).unwrap(),
                uri,
                Some(&cookie),
                body,
            )
            .await;
        assert_eq!(resp.status, StatusCode::OK, "{method} {uri}: {}", resp.text);
    }
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[tokio::test]
async fn test_fresh_session_has_no_partner() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let resp = app.get("/api/chat/session-status", Some(&cookie)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json, json!({"status": "none", "partner": null}));
}

#[tokio::test]
async fn test_start_session_matches_partner() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let resp = app.post("/api/chat/start-session", Some(&cookie), None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["status"], "connected");
    assert_eq!(resp.json["message"], "Partner found!");

    let partner = &resp.json["partner"];
    assert!(is_four_digits(&partner["id"]), "{partner}");
    assert!(PARTNER_NAMES.contains(&partner["display_name"].as_str().unwrap()));
    assert!(partner["avatar_url"].is_null());
    assert!(["male", "female"].contains(&partner["gender"].as_str().unwrap()));
}

#[tokio::test]
async fn test_session_status_reports_stored_partner() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let started = app.post("/api/chat/start-session", Some(&cookie), None).await;
    let status = app.get("/api/chat/session-status", Some(&cookie)).await;

    assert_eq!(status.status, StatusCode::OK);
    assert_eq!(status.json["status"], "connected");
    assert_eq!(status.json["partner"], started.json["partner"]);
}

#[tokio::test]
async fn test_start_session_replaces_partner() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    app.post("/api/chat/start-session", Some(&cookie), None).await;
    let second = app.post("/api/chat/start-session", Some(&cookie), None).await;
    let status = app.get("/api/chat/session-status", Some(&cookie)).await;

    assert_eq!(status.json["partner"], second.json["partner"]);
}

#[tokio::test]
async fn test_end_session_is_idempotent() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    app.post("/api/chat/start-session", Some(&cookie), None).await;

    for _ in 0..2 {
        let resp = app.post("/api/chat/end-session", Some(&cookie), None).await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(
            resp.json,
            json!({"status": "ended", "message": "Chat session ended successfully"})
        );
    }

    let status = app.get("/api/chat/session-status", Some(&cookie)).await;
    assert_eq!(status.json, json!({"status": "none", "partner": null}));
}

#[tokio::test]
async fn test_end_session_keeps_identity() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    app.post("/api/chat/end-session", Some(&cookie), None).await;
    let resp = app.get("/api/chat/session-status", Some(&cookie)).await;

    assert_eq!(resp.status, StatusCode::OK);
}

// ============================================================================
// Messaging and reconnects
// ============================================================================

#[tokio::test]
async fn test_send_message() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let resp = app
        .post("/api/chat/send-message", Some(&cookie), Some(r#"{"message":"hi"}"#))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["message"], "Message sent successfully");
    assert!(is_four_digits(&resp.json["message_id"]));
}

#[tokio::test]
async fn test_send_message_requires_message() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    for body in [None, Some("{}"), Some("not json"), Some(r#"{"text":"hi"}"#)] {
        let resp = app
            .post("/api/chat/send-message", Some(&cookie), body)
            .await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{body:?}");
        assert_eq!(resp.json, json!({"error": "Message is required"}));
    }
}

#[tokio::test]
async fn test_send_message_accepts_null_message() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let resp = app
        .post("/api/chat/send-message", Some(&cookie), Some(r#"{"message":null}"#))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_request_reconnect() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let resp = app
        .post(
            "/api/chat/request-reconnect",
            Some(&cookie),
            Some(r#"{"target_user_id":"7"}"#),
        )
        .await;
    assert_eq!(resp.json["message"], "Reconnect request sent successfully");
    assert!(is_four_digits(&resp.json["request_id"]));

    let resp = app
        .post("/api/chat/request-reconnect", Some(&cookie), Some(r#"{"x":1}"#))
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json["error"], "Target user ID is required");
}

#[tokio::test]
async fn test_respond_reconnect_echoes_response() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let resp = app
        .post(
            "/api/chat/respond-reconnect",
            Some(&cookie),
            Some(r#"{"request_id":"1","response":"accepted"}"#),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json,
        json!({"message": "Reconnect request accepted successfully"})
    );
}

#[tokio::test]
async fn test_respond_reconnect_requires_both_fields() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let resp = app
        .post(
            "/api/chat/respond-reconnect",
            Some(&cookie),
            Some(r#"{"request_id":"1"}"#),
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json["error"], "Request ID and response are required");
}

#[tokio::test]
async fn test_listings_are_empty() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let resp = app.get("/api/chat/get-messages", Some(&cookie)).await;
    assert_eq!(resp.json, json!({"messages": []}));

    let resp = app.get("/api/chat/get-reconnect-requests", Some(&cookie)).await;
    assert_eq!(resp.json, json!({"reconnect_requests": []}));

    let resp = app.get("/api/chat/met-users", Some(&cookie)).await;
    assert_eq!(resp.json, json!({"met_users": []}));
}

#[tokio::test]
async fn test_start_direct_chat() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let resp = app
        .post(
            "/api/chat/start-direct-chat",
            Some(&cookie),
            Some(r#"{"target_user_id":"55"}"#),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json,
        json!({
            "success": true,
            "message": "Direct chat started successfully",
            "partner": {
                "id": "55",
                "display_name": "مستخدم مباشر",
                "avatar_url": null,
                "gender": "unknown"
            }
        })
    );
}

#[tokio::test]
async fn test_start_direct_chat_requires_target() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    for body in [None, Some("{}"), Some(r#"{"user_id":"55"}"#)] {
        let resp = app
            .post("/api/chat/start-direct-chat", Some(&cookie), body)
            .await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{body:?}");
        assert_eq!(resp.json, json!({"error": "Target user ID is required"}));
    }
}

#[tokio::test]
async fn test_start_direct_chat_does_not_touch_session() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    app.post(
        "/api/chat/start-direct-chat",
        Some(&cookie),
        Some(r#"{"target_user_id":"55"}"#),
    )
    .await;
    let status = app.get("/api/chat/session-status", Some(&cookie)).await;
    assert_eq!(status.json["status"], "none");
}

// ============================================================================
// Feedback
// ============================================================================

#[tokio::test]
async fn test_feedback_routes_require_body() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let cases = [
        ("/api/chat/report", "No data provided"),
        ("/api/chat/report-problem", "Problem data is required"),
        ("/api/chat/contact-us", "Contact data is required"),
    ];

    for (uri, error) in cases {
        for body in [None, Some("{}"), Some("[1]")] {
            let resp = app.post(uri, Some(&cookie), body).await;
            assert_eq!(resp.status, StatusCode::BAD_REQUEST, "{uri} {body:?}");
            assert_eq!(resp.json, json!({ "error": error }));
        }
    }
}

#[tokio::test]
async fn test_feedback_routes_accept_any_object() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let cases = [
        ("/api/chat/report", "Report submitted successfully"),
        ("/api/chat/report-problem", "Problem report submitted successfully"),
        ("/api/chat/contact-us", "Contact message sent successfully"),
    ];

    for (uri, message) in cases {
        let resp = app.post(uri, Some(&cookie), Some(r#"{"anything":1}"#)).await;
        assert_eq!(resp.status, StatusCode::OK, "{uri}");
        assert_eq!(resp.json, json!({ "message": message }));
    }
}

#[tokio::test]
async fn test_stats_ranges() {
    let app = TestApp::new();
    let cookie = app.login(KNOWN_USER).await;

    let resp = app.get("/api/chat/stats", Some(&cookie)).await;
    assert_eq!(resp.status, StatusCode::OK);

    let total_chats = resp.json["total_chats"].as_u64().unwrap();
    let total_time = resp.json["total_time"].as_u64().unwrap();
    let average_duration = resp.json["average_duration"].as_u64().unwrap();
    assert!((10..=100).contains(&total_chats));
    assert!((3600..=36000).contains(&total_time));
    assert!((300..=1800).contains(&average_duration));
}

// ============================================================================
// Ambient
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let app = TestApp::new();

    let resp = app.get("/health", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.text, "ok");

    let resp = app.get("/health/ready", None).await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let app = TestApp::new();

    let resp = app.get("/health", None).await;
    assert!(resp.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_upstream_request_id_is_echoed() {
    let app = TestApp::new();

    let resp = app
        .request_with_headers(
            Method::GET,
            "/health",
            None,
            None,
            &[("x-request-id", "edge-7f3a")],
        )
        .await;
    assert_eq!(resp.headers["x-request-id"], "edge-7f3a");
}

#[tokio::test]
async fn test_unusable_request_id_is_replaced() {
    let app = TestApp::new();

    let resp = app
        .request_with_headers(
            Method::GET,
            "/health",
            None,
            None,
            &[("x-request-id", "has space")],
        )
        .await;
    let echoed = resp.headers["x-request-id"].to_str().unwrap();
    assert_ne!(echoed, "has space");
    assert_eq!(echoed.len(), 36);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let resp = app.get("/api/chat/nope", None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
