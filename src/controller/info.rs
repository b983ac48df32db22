use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::model::app::AppState;

pub static INFO_TAG: &str = "info";

/// API metadata: version, active storage backend and the resource index.
#[utoipa::path(
    get,
    path = "/api/info",
    tag = INFO_TAG,
    responses(
        (status = 200, description = "API metadata"),
    ),
)]
pub async fn api_info(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "message": "Welcome to the TechCorp Solutions portfolio API",
        "version": env!("CARGO_PKG_VERSION"),
        "database": state.store.backend().as_str(),
        "documentation": "/api/docs",
        "endpoints": {
            "company": "/api/company",
            "employees": "/api/company/employees",
            "projects": "/api/company/projects",
            "departments": "/api/company/departments",
            "financial": "/api/company/financial",
            "stats": "/api/company/stats",
            "search": "/api/company/search",
            "contact": "/api/contact",
        },
    });
    (StatusCode::OK, Json(body))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = INFO_TAG,
    responses(
        (status = 200, description = "Service is up"),
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "status": "OK",
        "timestamp": Utc::now(),
        "backend": state.store.backend().as_str(),
    });
    (StatusCode::OK, Json(body))
}
