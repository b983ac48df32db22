use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    controller::extract::ApiJson,
    error::Error,
    model::{
        api::ApiResponse,
        app::AppState,
        employee::{Employee, EmployeeDetail, EmployeePatch, NewEmployee},
    },
    service::query::{self, Pagination},
};

pub static EMPLOYEE_TAG: &str = "employees";

/// Employee listing query parameters. Values that fail to parse fall back
/// to their defaults; unrecognized parameters are ignored.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmployeeListParams {
    /// 1-based page number, default 1
    pub page: Option<String>,
    /// Page size, default 10
    pub limit: Option<String>,
    /// Department name, matched case-insensitively
    pub department: Option<String>,
    /// "active" (default) restricts to active employees; any other value
    /// lifts the restriction
    pub status: Option<String>,
}

/// List employees with filtering and pagination.
#[utoipa::path(
    get,
    path = "/api/company/employees",
    tag = EMPLOYEE_TAG,
    params(EmployeeListParams),
    responses(
        (status = 200, description = "One page of employees with a pagination block"),
    ),
)]
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<EmployeeListParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::from_params(params.page.as_deref(), params.limit.as_deref());
    let conditions =
        query::employee_conditions(params.department.as_deref(), params.status.as_deref());

    let page = state.store.list_employees(&conditions, pagination).await?;
    let message = format!("{} employees retrieved", page.items.len());

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::ok(page.items)
                .with_pagination(pagination.to_dto(page.total))
                .with_message(message),
        ),
    ))
}

/// Get one employee together with the projects referencing them.
#[utoipa::path(
    get,
    path = "/api/company/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee with project briefs", body = EmployeeDetail),
        (status = 400, description = "Malformed id (document backend)"),
        (status = 404, description = "No employee with this id"),
    ),
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let detail = state.store.get_employee(&id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(detail).with_message("Employee retrieved with projects")),
    ))
}

/// List active employees of one department.
#[utoipa::path(
    get,
    path = "/api/company/employees/department/{department}",
    tag = EMPLOYEE_TAG,
    params(("department" = String, Path, description = "Department name, case-insensitive")),
    responses(
        (status = 200, description = "Active employees of the department"),
    ),
)]
pub async fn employees_by_department(
    State(state): State<AppState>,
    Path(department): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let employees: Vec<Employee> = state.store.employees_by_department(&department).await?;
    let total = employees.len() as u64;
    let message = format!("Employees of the {department} department retrieved");

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(employees).with_total(total).with_message(message)),
    ))
}

/// Create an employee.
///
/// The document backend validates the payload against the schema and
/// enforces email uniqueness; the in-memory backend accepts the payload
/// as-is.
#[utoipa::path(
    post,
    path = "/api/company/employees",
    tag = EMPLOYEE_TAG,
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failed or duplicate email"),
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewEmployee>,
) -> Result<impl IntoResponse, Error> {
    let employee = state.store.create_employee(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(employee).with_message("Employee created successfully")),
    ))
}

/// Partially update an employee (in-memory backend only).
#[utoipa::path(
    put,
    path = "/api/company/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = String, Path, description = "Employee id")),
    request_body = EmployeePatch,
    responses(
        (status = 200, description = "Updated employee", body = Employee),
        (status = 404, description = "No employee with this id"),
    ),
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<EmployeePatch>,
) -> Result<impl IntoResponse, Error> {
    let employee = state.store.update_employee(&id, patch).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(employee).with_message("Employee updated successfully")),
    ))
}

/// Delete an employee (in-memory backend only).
#[utoipa::path(
    delete,
    path = "/api/company/employees/{id}",
    tag = EMPLOYEE_TAG,
    params(("id" = String, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Removed employee", body = Employee),
        (status = 404, description = "No employee with this id"),
    ),
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let employee = state.store.delete_employee(&id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(employee).with_message("Employee deleted successfully")),
    ))
}
