//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI serves the interactive documentation at `/api/docs`.
//! Mutation routes (PUT/PATCH/DELETE) are registered only when the active
//! backend supports them, so the document backend simply has no such paths.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Maximum accepted request body, matching the original deployment's 10 MiB
/// JSON limit; larger bodies are answered with 413.
const BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Builds the application router for the given state.
///
/// # Registered endpoints
/// - `GET /api/info`, `GET /health` — metadata and liveness
/// - `GET /api/company` — company profile
/// - `GET|POST /api/company/employees` (+ `/{id}`, `/department/{department}`)
/// - `GET|POST /api/company/projects` (+ `/{id}`, `/status/{status}`)
/// - `GET|POST /api/company/departments`
/// - `GET|POST /api/company/financial`
/// - `GET /api/company/stats`, `GET /api/company/search`
/// - `POST|GET /api/contact` (+ `/{id}`, `/stats`)
/// - mutation routes for employees/projects/departments/messages, only on
///   a backend with `supports_mutation()`
pub fn routes(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "TechCorp Solutions API",
            description = "Company portfolio API over interchangeable storage backends"
        ),
        tags(
            (name = controller::company::COMPANY_TAG, description = "Company profile"),
            (name = controller::employee::EMPLOYEE_TAG, description = "Employee directory"),
            (name = controller::project::PROJECT_TAG, description = "Project portfolio"),
            (name = controller::department::DEPARTMENT_TAG, description = "Departments"),
            (name = controller::financial::FINANCIAL_TAG, description = "Financial records"),
            (name = controller::stats::STATS_TAG, description = "Aggregated statistics"),
            (name = controller::search::SEARCH_TAG, description = "Cross-entity search"),
            (name = controller::contact::CONTACT_TAG, description = "Contact messages"),
            (name = controller::info::INFO_TAG, description = "Service metadata"),
        )
    )]
    struct ApiDoc;

    let supports_mutation = state.store.supports_mutation();

    let mut router = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::info::api_info))
        .routes(routes!(controller::info::health))
        .routes(routes!(controller::company::get_company))
        .routes(routes!(
            controller::employee::list_employees,
            controller::employee::create_employee
        ))
        .routes(routes!(controller::employee::get_employee))
        .routes(routes!(controller::employee::employees_by_department))
        .routes(routes!(
            controller::project::list_projects,
            controller::project::create_project
        ))
        .routes(routes!(controller::project::get_project))
        .routes(routes!(controller::project::projects_by_status))
        .routes(routes!(
            controller::department::list_departments,
            controller::department::create_department
        ))
        .routes(routes!(
            controller::financial::financial_records,
            controller::financial::create_financial
        ))
        .routes(routes!(controller::stats::company_stats))
        .routes(routes!(controller::search::search))
        .routes(routes!(
            controller::contact::create_message,
            controller::contact::list_messages
        ))
        .routes(routes!(controller::contact::message_stats))
        .routes(routes!(controller::contact::get_message));

    if supports_mutation {
        router = router
            .routes(routes!(
                controller::employee::update_employee,
                controller::employee::delete_employee
            ))
            .routes(routes!(
                controller::project::update_project,
                controller::project::delete_project
            ))
            .routes(routes!(
                controller::department::update_department,
                controller::department::delete_department
            ))
            .routes(routes!(controller::contact::delete_message))
            .routes(routes!(controller::contact::mark_message_read));
    }

    let (router, api) = router.split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}
