use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{api::ApiResponse, app::AppState, stats::CompanyStats},
};

pub static STATS_TAG: &str = "stats";

/// Company-wide statistics: employee, project, department and skill
/// aggregates plus the latest financial record.
#[utoipa::path(
    get,
    path = "/api/company/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Aggregated statistics", body = CompanyStats),
    ),
)]
pub async fn company_stats(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let stats = state.store.stats().await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(stats).with_message("Company statistics computed")),
    ))
}
