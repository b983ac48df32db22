use axum::http::StatusCode;
use serde_json::json;

use super::*;

#[tokio::test]
async fn status_query_matches_case_insensitively() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/projects?status=en%20cours", None).await;

    assert_eq!(status, StatusCode::OK);
    let projects = body["data"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["status"], "En cours");
    assert_eq!(projects[0]["name"], "Application Mobile Banking");
}

#[tokio::test]
async fn status_path_segment_accepts_accented_labels() {
    let app = app_seeded();

    let (status, body) = send(
        &app,
        "GET",
        "/api/company/projects/status/Termin%C3%A9",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["name"], "Plateforme E-commerce");
}

#[tokio::test]
async fn listing_populates_team_members() {
    let app = app_seeded();

    let (status, body) = send(&app, "GET", "/api/company/projects", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], 3);
    let members = body["data"][0]["teamMembers"].as_array().unwrap();
    assert!(!members.is_empty());
    assert!(members[0].get("firstName").is_some());
}

#[tokio::test]
async fn created_project_round_trips_with_two_member_projections() {
    let app = app_empty();
    for (name, email) in [("Ana", "ana@x.com"), ("Ben", "ben@x.com")] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/company/employees",
            Some(json!({
                "firstName": name,
                "lastName": "Lee",
                "position": "Engineer",
                "department": "IT",
                "email": email,
                "salary": 60000
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
        &app,
        "POST",
        "/api/company/projects",
        Some(json!({
            "name": "Portal",
            "description": "Internal portal rebuild",
            "budget": 50000,
            "clientName": "TechCorp",
            "teamMembers": ["1", "2"],
            "technologies": ["Rust", "Axum"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "GET", &format!("/api/company/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let members = body["data"]["teamMembers"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    for member in members {
        let keys: Vec<&str> = member.as_object().unwrap().keys().map(String::as_str).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        // only the whitelisted projection, never the full employee record
        assert_eq!(sorted, vec!["email", "firstName", "id", "lastName", "position"]);
    }
}

#[tokio::test]
async fn create_applies_the_documented_defaults() {
    let app = app_empty();

    let (status, body) = send(
        &app,
        "POST",
        "/api/company/projects",
        Some(json!({
            "name": "Kickoff",
            "description": "Not started yet",
            "budget": 2000,
            "clientName": "Acme"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "En planification");
    assert_eq!(body["data"]["progress"], 0);
    assert_eq!(body["data"]["teamMembers"], json!([]));
}

#[tokio::test]
async fn update_and_delete_work_on_the_memory_backend() {
    let app = app_seeded();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/company/projects/2",
        Some(json!({"progress": 90})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["progress"], 90);

    let (status, _) = send(&app, "DELETE", "/api/company/projects/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/api/company/projects/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
