use axum::http::StatusCode;
use serde_json::json;

use super::*;

#[tokio::test]
async fn listing_populates_managers_and_counts_active_employees() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/departments", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);

    let it = &body["data"][0];
    assert_eq!(it["name"], "IT");
    assert_eq!(it["employeeCount"], 1);
    assert_eq!(it["manager"]["firstName"], "Marie");
    // manager is the whitelisted projection, not the full record
    assert!(it["manager"].get("salary").is_none());
}

#[tokio::test]
async fn create_starts_with_a_zero_employee_count() {
    let app = app_seeded();

    let (status, body) = send(
        &app,
        "POST",
        "/api/company/departments",
        Some(json!({
            "name": "QA",
            "budget": 120000,
            "description": "Quality assurance",
            "location": "Bureau 500"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "QA");
    assert_eq!(body["data"]["employeeCount"], 0);
}

#[tokio::test]
async fn update_and_delete_work_on_the_memory_backend() {
    let app = app_seeded();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/company/departments/3",
        Some(json!({"budget": 999000})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["budget"], 999000);

    let (status, _) = send(&app, "DELETE", "/api/company/departments/3", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/api/company/departments", None).await;
    assert_eq!(body["total"], 4);
}
