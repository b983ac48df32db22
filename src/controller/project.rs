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
        project::{NewProject, ProjectDto, ProjectPatch},
    },
    service::query::{self, Pagination},
};

pub static PROJECT_TAG: &str = "projects";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProjectListParams {
    /// 1-based page number, default 1
    pub page: Option<String>,
    /// Page size, default 10
    pub limit: Option<String>,
    /// Status label, matched case-insensitively ("En cours", ...)
    pub status: Option<String>,
}

/// List projects with team members populated.
#[utoipa::path(
    get,
    path = "/api/company/projects",
    tag = PROJECT_TAG,
    params(ProjectListParams),
    responses(
        (status = 200, description = "One page of projects with a pagination block"),
    ),
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> Result<impl IntoResponse, Error> {
    let pagination = Pagination::from_params(params.page.as_deref(), params.limit.as_deref());
    let conditions = query::project_conditions(params.status.as_deref());

    let page = state.store.list_projects(&conditions, pagination).await?;
    let message = format!("{} projects retrieved", page.items.len());

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::ok(page.items)
                .with_pagination(pagination.to_dto(page.total))
                .with_message(message),
        ),
    ))
}

/// Get one project with team details.
#[utoipa::path(
    get,
    path = "/api/company/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Populated project", body = ProjectDto),
        (status = 400, description = "Malformed id (document backend)"),
        (status = 404, description = "No project with this id"),
    ),
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let project = state.store.get_project(&id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(project).with_message("Project retrieved with team details")),
    ))
}

/// List projects matching one status.
#[utoipa::path(
    get,
    path = "/api/company/projects/status/{status}",
    tag = PROJECT_TAG,
    params(("status" = String, Path, description = "Status label, case-insensitive")),
    responses(
        (status = 200, description = "Projects with the requested status"),
    ),
)]
pub async fn projects_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let projects: Vec<ProjectDto> = state.store.projects_by_status(&status).await?;
    let total = projects.len() as u64;
    let message = format!("Projects with status \"{status}\" retrieved");

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(projects).with_total(total).with_message(message)),
    ))
}

/// Create a project.
#[utoipa::path(
    post,
    path = "/api/company/projects",
    tag = PROJECT_TAG,
    request_body = NewProject,
    responses(
        (status = 201, description = "Project created", body = ProjectDto),
        (status = 400, description = "Validation failed"),
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewProject>,
) -> Result<impl IntoResponse, Error> {
    let project = state.store.create_project(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(project).with_message("Project created successfully")),
    ))
}

/// Partially update a project (in-memory backend only).
#[utoipa::path(
    put,
    path = "/api/company/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = String, Path, description = "Project id")),
    request_body = ProjectPatch,
    responses(
        (status = 200, description = "Updated project", body = ProjectDto),
        (status = 404, description = "No project with this id"),
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<ProjectPatch>,
) -> Result<impl IntoResponse, Error> {
    let project = state.store.update_project(&id, patch).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(project).with_message("Project updated successfully")),
    ))
}

/// Delete a project (in-memory backend only).
#[utoipa::path(
    delete,
    path = "/api/company/projects/{id}",
    tag = PROJECT_TAG,
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Removed project", body = ProjectDto),
        (status = 404, description = "No project with this id"),
    ),
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let project = state.store.delete_project(&id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(project).with_message("Project deleted successfully")),
    ))
}
