use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{api::ApiResponse, app::AppState, company::Company},
};

pub static COMPANY_TAG: &str = "company";

/// Get the company profile with the live active-employee count.
#[utoipa::path(
    get,
    path = "/api/company",
    tag = COMPANY_TAG,
    responses(
        (status = 200, description = "Company profile", body = Company),
        (status = 404, description = "No company profile exists"),
    ),
)]
pub async fn get_company(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let company = state
        .store
        .company()
        .await?
        .ok_or(Error::not_found("Company"))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(company).with_message("Company information retrieved")),
    ))
}
