use axum::http::StatusCode;
use serde_json::json;

use super::*;

#[tokio::test]
async fn listing_returns_all_records_newest_year_first() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/financial", None).await;

    assert_eq!(status, StatusCode::OK);
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["year"], 2023);
    assert_eq!(records[0]["quarterlyRevenue"]["Q2"], 650000);
}

#[tokio::test]
async fn year_query_returns_the_single_record() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/financial?year=2023", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_object());
    assert_eq!(body["data"]["revenue"], 2500000);
}

#[tokio::test]
async fn missing_year_is_a_404() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/financial?year=1999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn empty_store_is_a_404() {
    let app = app_empty();

    let (status, _) = send(&app, "GET", "/api/company/financial", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_then_list_orders_by_year_descending() {
    let app = app_seeded();

    let (status, _) = send(
        &app,
        "POST",
        "/api/company/financial",
        Some(json!({
            "year": 2024,
            "revenue": 3000000,
            "expenses": 2000000,
            "profit": 1000000
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, "GET", "/api/company/financial", None).await;
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["year"], 2024);
    assert_eq!(records[1]["year"], 2023);
}
