use axum::http::StatusCode;
use serde_json::json;

use super::*;

fn submission(name: &str, email: &str, message: &str) -> serde_json::Value {
    json!({"name": name, "email": email, "message": message})
}

#[tokio::test]
async fn valid_submission_is_accepted_with_defaults() {
    let app = app_empty();

    let (status, body) = send(
        &app,
        "POST",
        "/api/contact",
        Some(submission("Ana", "ana@example.com", "I would like a quote please.")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "nouveau");
    assert_eq!(body["data"]["subject"], "Nouveau message");
    assert_eq!(body["data"]["timeAgo"], "À l'instant");
}

#[tokio::test]
async fn message_shorter_than_ten_characters_is_rejected() {
    let app = app_empty();

    let (status, body) = send(
        &app,
        "POST",
        "/api/contact",
        Some(submission("Ana", "ana@example.com", "too short")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("between 10 and 5000"));
}

#[tokio::test]
async fn every_offending_field_is_reported_in_one_message() {
    let app = app_empty();

    let (status, body) = send(
        &app,
        "POST",
        "/api/contact",
        Some(submission("A", "not-an-email", "Hello there, testing.")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("name must be at least 2 characters"));
    assert!(message.contains("email format is invalid"));
}

#[tokio::test]
async fn listing_is_newest_first_with_counts() {
    let app = app_empty();
    for i in 1..=3 {
        send(
            &app,
            "POST",
            "/api/contact",
            Some(json!({
                "name": "Ana",
                "email": "ana@example.com",
                "subject": format!("Message {i}"),
                "message": "A sufficiently long body."
            })),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/api/contact", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"][0]["subject"], "Message 3");
}

#[tokio::test]
async fn status_filter_and_limit_apply() {
    let app = app_empty();
    for _ in 0..2 {
        send(
            &app,
            "POST",
            "/api/contact",
            Some(submission("Ana", "ana@example.com", "A sufficiently long body.")),
        )
        .await;
    }
    send(&app, "PATCH", "/api/contact/1/read", None).await;

    let (_, unread) = send(&app, "GET", "/api/contact?status=nouveau", None).await;
    assert_eq!(unread["count"], 1);

    let (_, limited) = send(&app, "GET", "/api/contact?limit=1", None).await;
    assert_eq!(limited["count"], 1);
    assert_eq!(limited["total"], 2);
}

#[tokio::test]
async fn mark_read_sets_status_and_timestamp() {
    let app = app_empty();
    send(
        &app,
        "POST",
        "/api/contact",
        Some(submission("Ana", "ana@example.com", "A sufficiently long body.")),
    )
    .await;

    let (status, body) = send(&app, "PATCH", "/api/contact/1/read", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "lu");
    assert!(body["data"].get("readAt").is_some());
}

#[tokio::test]
async fn stats_count_by_status() {
    let app = app_empty();
    for _ in 0..3 {
        send(
            &app,
            "POST",
            "/api/contact",
            Some(submission("Ana", "ana@example.com", "A sufficiently long body.")),
        )
        .await;
    }
    send(&app, "PATCH", "/api/contact/2/read", None).await;

    let (status, body) = send(&app, "GET", "/api/contact/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 3);
    assert_eq!(body["data"]["unread"], 2);
    assert_eq!(body["data"]["read"], 1);
    assert!(body["data"].get("lastMessage").is_some());
}

#[tokio::test]
async fn delete_removes_the_message() {
    let app = app_empty();
    send(
        &app,
        "POST",
        "/api/contact",
        Some(submission("Ana", "ana@example.com", "A sufficiently long body.")),
    )
    .await;

    let (status, _) = send(&app, "DELETE", "/api/contact/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/api/contact/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
