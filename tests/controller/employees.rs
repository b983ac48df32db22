use axum::http::StatusCode;
use serde_json::json;

use super::*;

#[tokio::test]
async fn listing_carries_the_pagination_envelope() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/employees?page=2&limit=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["pagination"],
        json!({"page": 2, "limit": 2, "total": 5, "pages": 3})
    );
}

#[tokio::test]
async fn invalid_pagination_values_fall_back_to_defaults() {
    let app = app_seeded();

    let (status, body) = send(
        &app,
        "GET",
        "/api/company/employees?page=abc&limit=-1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn department_query_filter_is_case_insensitive() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/employees?department=it", None).await;

    assert_eq!(status, StatusCode::OK);
    let employees = body["data"].as_array().unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0]["firstName"], "Marie");
}

#[tokio::test]
async fn unrecognized_query_parameters_are_ignored() {
    let app = app_seeded();

    let (status, body) = send(
        &app,
        "GET",
        "/api/company/employees?sort=salary&nonsense=1",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 5);
}

#[tokio::test]
async fn get_by_id_returns_the_employee_with_project_briefs() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/employees/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["firstName"], "Marie");
    // Marie is on the e-commerce and mobile-banking teams
    let projects = body["data"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert!(projects[0].get("budget").is_some());
}

#[tokio::test]
async fn unknown_id_is_a_404_envelope() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/employees/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Employee not found");
}

#[tokio::test]
async fn department_path_segment_filters_employees() {
    let app = app_seeded();

    let (status, body) = send(
        &app,
        "GET",
        "/api/company/employees/department/design",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["firstName"], "Sophie");
}

#[tokio::test]
async fn create_returns_201_and_echoes_the_record() {
    let app = app_empty();

    let (status, body) = send(
        &app,
        "POST",
        "/api/company/employees",
        Some(json!({
            "firstName": "Ana",
            "lastName": "Lee",
            "position": "Engineer",
            "department": "IT",
            "email": "ana@x.com",
            "salary": 60000
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["email"], "ana@x.com");
    assert_eq!(body["data"]["isActive"], true);
    assert_eq!(body["data"]["id"], "1");
}

#[tokio::test]
async fn memory_backend_accepts_colliding_emails() {
    let app = app_empty();
    let payload = json!({
        "firstName": "Ana",
        "lastName": "Lee",
        "position": "Engineer",
        "department": "IT",
        "email": "ana@x.com",
        "salary": 60000
    });

    let (first, _) = send(&app, "POST", "/api/company/employees", Some(payload.clone())).await;
    let (second, body) = send(&app, "POST", "/api/company/employees", Some(payload)).await;

    assert_eq!(first, StatusCode::CREATED);
    // no uniqueness check in this backend: a distinct record is created
    assert_eq!(second, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], "2");
    assert_eq!(body["data"]["email"], "ana@x.com");
}

#[tokio::test]
async fn update_merges_and_delete_removes() {
    let app = app_seeded();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/company/employees/1",
        Some(json!({"salary": 99000})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["salary"], 99000);
    assert_eq!(body["data"]["firstName"], "Marie");

    let (status, _) = send(&app, "DELETE", "/api/company/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/api/company/employees/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_json_body_is_a_400_envelope() {
    let app = app_empty();

    let (status, body) = send_raw(&app, "POST", "/api/company/employees", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}
