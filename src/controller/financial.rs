use axum::{
    extract::{Query, State},
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
        financial::{Financial, NewFinancial},
    },
};

pub static FINANCIAL_TAG: &str = "financial";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FinancialParams {
    /// Restrict to one year; the response carries a single record instead
    /// of a list
    pub year: Option<String>,
}

/// Get financial records, newest year first.
#[utoipa::path(
    get,
    path = "/api/company/financial",
    tag = FINANCIAL_TAG,
    params(FinancialParams),
    responses(
        (status = 200, description = "All records, or the single record for ?year="),
        (status = 404, description = "No financial data for the requested year"),
    ),
)]
pub async fn financial_records(
    State(state): State<AppState>,
    Query(params): Query<FinancialParams>,
) -> Result<impl IntoResponse, Error> {
    let year = params.year.as_deref().and_then(|y| y.trim().parse::<i32>().ok());
    let records = state.store.financial_records(year).await?;

    // A year query answers with the single matching record; otherwise the
    // full list is returned. Either way an empty result is a 404.
    let data = if year.is_some() {
        match records.into_iter().next() {
            Some(record) => serde_json::to_value(record).map_err(to_internal)?,
            None => return Err(Error::not_found("Financial data")),
        }
    } else {
        if records.is_empty() {
            return Err(Error::not_found("Financial data"));
        }
        serde_json::to_value(records).map_err(to_internal)?
    };

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(data).with_message("Financial data retrieved")),
    ))
}

fn to_internal(err: serde_json::Error) -> Error {
    Error::Internal(format!("failed to serialize financial data: {err}"))
}

/// Create a financial record. Year uniqueness is enforced by the document
/// backend.
#[utoipa::path(
    post,
    path = "/api/company/financial",
    tag = FINANCIAL_TAG,
    request_body = NewFinancial,
    responses(
        (status = 201, description = "Record created", body = Financial),
        (status = 400, description = "Validation failed or duplicate year"),
    ),
)]
pub async fn create_financial(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewFinancial>,
) -> Result<impl IntoResponse, Error> {
    let record = state.store.create_financial(new).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(record).with_message("Financial record created successfully")),
    ))
}
