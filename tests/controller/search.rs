use axum::http::StatusCode;

use super::*;

#[tokio::test]
async fn skill_term_finds_the_employees_holding_it() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/search?query=Python", None).await;

    assert_eq!(status, StatusCode::OK);
    let employees = body["data"]["employees"].as_array().unwrap();
    // Marie and Pierre both list Python
    assert_eq!(employees.len(), 2);
    assert!(body["data"]["totalResults"].as_u64().unwrap() >= 2);
}

#[tokio::test]
async fn matching_is_case_insensitive_substring() {
    let app = app_seeded();

    let (_, lower) = send(&app, "GET", "/api/company/search?query=python", None).await;
    let (_, partial) = send(&app, "GET", "/api/company/search?query=pyth", None).await;

    assert_eq!(lower["data"]["employees"].as_array().unwrap().len(), 2);
    assert_eq!(partial["data"]["employees"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_query_parameter_is_a_400() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/search", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = send(&app, "GET", "/api/company/search?query=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn type_restriction_runs_only_that_entity() {
    let app = app_seeded();

    let (status, body) = send(
        &app,
        "GET",
        "/api/company/search?query=react&type=projects",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].get("employees").is_none());
    assert!(body["data"].get("departments").is_none());
    let projects = body["data"]["projects"].as_array().unwrap();
    assert!(!projects.is_empty());
}

#[tokio::test]
async fn unknown_type_yields_an_empty_result_set() {
    let app = app_seeded();

    let (status, body) = send(
        &app,
        "GET",
        "/api/company/search?query=python&type=invoices",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalResults"], 0);
    assert!(body["data"].get("employees").is_none());
}

#[tokio::test]
async fn departments_match_on_location() {
    let app = app_seeded();

    let (_, body) = send(
        &app,
        "GET",
        "/api/company/search?query=Bureau%20301&type=departments",
        None,
    )
    .await;

    let departments = body["data"]["departments"].as_array().unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0]["name"], "IT");
}
