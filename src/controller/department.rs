use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::extract::ApiJson,
    error::Error,
    model::{
        api::ApiResponse,
        app::AppState,
        department::{DepartmentDto, DepartmentPatch, NewDepartment},
    },
};

pub static DEPARTMENT_TAG: &str = "departments";

/// List all departments with populated managers and live employee counts.
#[utoipa::path(
    get,
    path = "/api/company/departments",
    tag = DEPARTMENT_TAG,
    responses(
        (status = 200, description = "All departments"),
    ),
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let departments: Vec<DepartmentDto> = state.store.list_departments().await?;
    let total = departments.len() as u64;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::ok(departments)
                .with_total(total)
                .with_message("Departments retrieved with employee counts"),
        ),
    ))
}

/// Create a department.
#[utoipa::path(
    post,
    path = "/api/company/departments",
    tag = DEPARTMENT_TAG,
    request_body = NewDepartment,
    responses(
        (status = 201, description = "Department created", body = DepartmentDto),
        (status = 400, description = "Validation failed or duplicate name"),
    ),
)]
pub async fn create_department(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewDepartment>,
) -> Result<impl IntoResponse, Error> {
    let department = state.store.create_department(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(department).with_message("Department created successfully")),
    ))
}

/// Partially update a department (in-memory backend only).
#[utoipa::path(
    put,
    path = "/api/company/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = String, Path, description = "Department id")),
    request_body = DepartmentPatch,
    responses(
        (status = 200, description = "Updated department", body = DepartmentDto),
        (status = 404, description = "No department with this id"),
    ),
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<DepartmentPatch>,
) -> Result<impl IntoResponse, Error> {
    let department = state.store.update_department(&id, patch).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(department).with_message("Department updated successfully")),
    ))
}

/// Delete a department (in-memory backend only).
#[utoipa::path(
    delete,
    path = "/api/company/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = String, Path, description = "Department id")),
    responses(
        (status = 200, description = "Removed department", body = DepartmentDto),
        (status = 404, description = "No department with this id"),
    ),
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let department = state.store.delete_department(&id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(department).with_message("Department deleted successfully")),
    ))
}
