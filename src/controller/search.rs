use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::Error,
    model::{api::ApiResponse, app::AppState},
    service::query::SearchScope,
};

pub static SEARCH_TAG: &str = "search";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search term, required
    pub query: Option<String>,
    /// Optional entity-type restriction: employees | projects | departments
    #[serde(rename = "type")]
    pub search_type: Option<String>,
}

/// Cross-entity free-text search.
///
/// Matches the term case-insensitively against each entity's searchable
/// fields (substring containment) and returns one list per covered type
/// plus a combined count.
#[utoipa::path(
    get,
    path = "/api/company/search",
    tag = SEARCH_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Per-type match lists with a combined count"),
        (status = 400, description = "Missing query parameter"),
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let term = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .ok_or_else(|| Error::validation("the 'query' search parameter is required"))?;

    let scope = SearchScope::from_param(params.search_type.as_deref());
    let results = state.store.search(term, scope).await?;
    let message = format!("Search performed for \"{term}\"");

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(results).with_message(message)),
    ))
}
