use std::sync::LazyLock;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use regex::Regex;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    controller::extract::ApiJson,
    error::Error,
    model::{
        api::ApiResponse,
        app::AppState,
        message::{Message, MessageDto, MessageStats, NewMessage},
    },
    service::query,
};

pub static CONTACT_TAG: &str = "contact";

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;
const MAX_MESSAGE_LEN: usize = 5_000;
const DEFAULT_LIST_LIMIT: u32 = 50;

static CONTACT_EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Contact-form validation, applied before the store regardless of backend:
/// name at least 2 characters, a plausible email, message 10 to 5000
/// characters.
fn validate_submission(new: &NewMessage) -> Result<(), Error> {
    let mut messages = Vec::new();

    if new.name.trim().chars().count() < MIN_NAME_LEN {
        messages.push(format!("name must be at least {MIN_NAME_LEN} characters"));
    }
    if !CONTACT_EMAIL_RE.is_match(new.email.trim()) {
        messages.push("email format is invalid".to_string());
    }
    let body_len = new.message.trim().chars().count();
    if !(MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN).contains(&body_len) {
        messages.push(format!(
            "message must be between {MIN_MESSAGE_LEN} and {MAX_MESSAGE_LEN} characters"
        ));
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(messages))
    }
}

fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
}

/// Submit a contact message.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = NewMessage,
    responses(
        (status = 201, description = "Message accepted", body = MessageDto),
        (status = 400, description = "Validation failed"),
    ),
)]
pub async fn create_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(new): ApiJson<NewMessage>,
) -> Result<impl IntoResponse, Error> {
    validate_submission(&new)?;

    let message = state.store.create_message(new, client_ip(&headers)).await?;
    tracing::info!(from = %message.email, subject = %message.subject, "new contact message");

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::ok(MessageDto::from(message))
                .with_message("Your message has been sent successfully"),
        ),
    ))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessageListParams {
    /// Status label filter ("nouveau", "lu", "traité", "archivé")
    pub status: Option<String>,
    /// Maximum number of messages returned, default 50
    pub limit: Option<String>,
}

/// List contact messages, newest first.
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = CONTACT_TAG,
    params(MessageListParams),
    responses(
        (status = 200, description = "Messages, newest first"),
    ),
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<MessageListParams>,
) -> Result<impl IntoResponse, Error> {
    let limit = params
        .limit
        .as_deref()
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(DEFAULT_LIST_LIMIT);
    let conditions = query::message_conditions(params.status.as_deref());

    let page = state.store.list_messages(&conditions, limit).await?;
    let count = page.items.len() as u64;
    let messages: Vec<MessageDto> = page.items.into_iter().map(MessageDto::from).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(messages).with_count(count).with_total(page.total)),
    ))
}

/// Get one contact message.
#[utoipa::path(
    get,
    path = "/api/contact/{id}",
    tag = CONTACT_TAG,
    params(("id" = String, Path, description = "Message id")),
    responses(
        (status = 200, description = "The message", body = MessageDto),
        (status = 404, description = "No message with this id"),
    ),
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let message: Message = state.store.get_message(&id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(MessageDto::from(message)))))
}

/// Mark a message as read (in-memory backend only).
#[utoipa::path(
    patch,
    path = "/api/contact/{id}/read",
    tag = CONTACT_TAG,
    params(("id" = String, Path, description = "Message id")),
    responses(
        (status = 200, description = "Updated message", body = MessageDto),
        (status = 404, description = "No message with this id"),
    ),
)]
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let message = state.store.mark_message_read(&id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(MessageDto::from(message)).with_message("Message marked as read")),
    ))
}

/// Delete a message (in-memory backend only).
#[utoipa::path(
    delete,
    path = "/api/contact/{id}",
    tag = CONTACT_TAG,
    params(("id" = String, Path, description = "Message id")),
    responses(
        (status = 200, description = "Removed message", body = MessageDto),
        (status = 404, description = "No message with this id"),
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let message = state.store.delete_message(&id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(MessageDto::from(message)).with_message("Message deleted successfully")),
    ))
}

/// Contact-message counters.
#[utoipa::path(
    get,
    path = "/api/contact/stats",
    tag = CONTACT_TAG,
    responses(
        (status = 200, description = "Message counters", body = MessageStats),
    ),
)]
pub async fn message_stats(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let stats = state.store.message_stats().await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(stats))))
}
