use axum::http::StatusCode;
use serde_json::json;

use super::*;

#[tokio::test]
async fn seeded_statistics_match_the_dataset() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    let stats = &body["data"];

    assert_eq!(stats["employees"]["total"], 5);
    assert_eq!(stats["employees"]["inactive"], 0);
    assert_eq!(stats["employees"]["salary"]["avgSalary"], 77000.0);
    assert_eq!(stats["employees"]["salary"]["minSalary"], 65000);
    assert_eq!(stats["employees"]["salary"]["maxSalary"], 95000);
    assert_eq!(stats["employees"]["salary"]["totalSalaries"], 385000);
    assert_eq!(stats["employees"]["byDepartment"].as_array().unwrap().len(), 5);

    assert_eq!(stats["projects"]["total"], 3);
    assert_eq!(stats["projects"]["totalBudget"], 830000);

    let top = stats["skills"]["top"].as_array().unwrap();
    assert_eq!(top.len(), 5);
    assert_eq!(top[0], json!({"skill": "Python", "count": 2}));

    assert_eq!(stats["financial"]["year"], 2023);
    assert_eq!(stats["company"]["departments"], 5);
    assert!(stats["company"]["age"].as_i64().unwrap() >= 0);
}

#[tokio::test]
async fn empty_store_statistics_are_zeroed_not_errors() {
    let app = app_empty();

    let (status, body) = send(&app, "GET", "/api/company/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    let stats = &body["data"];
    assert_eq!(stats["employees"]["total"], 0);
    assert_eq!(stats["employees"]["inactive"], 0);
    assert_eq!(stats["employees"]["salary"], json!({}));
    assert_eq!(stats["employees"]["byDepartment"], json!([]));
    assert_eq!(stats["projects"]["total"], 0);
    assert_eq!(stats["projects"]["byStatus"], json!([]));
    assert_eq!(stats["skills"]["top"], json!([]));
    assert!(stats.get("financial").is_none());
    assert_eq!(stats["company"]["age"], 0);
}

#[tokio::test]
async fn company_endpoint_reports_the_live_employee_count() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "TechCorp Solutions");
    assert_eq!(body["data"]["employees"], 5);

    // company endpoint 404s when nothing is seeded
    let empty = app_empty();
    let (status, _) = send(&empty, "GET", "/api/company", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn info_and_health_report_the_active_backend() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/info", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "memory");

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
}
