//! Server-held assistant conversations.
//!
//! Each conversation is an [`Assistant`](crate::assistant::Assistant) living
//! in the in-memory [`ConversationStore`](crate::assistant::ConversationStore).

use crate::{
    types::{
        parse_role, ConversationSnapshot, CreateConversationRequest, Result, SendMessageRequest,
        SendMessageResponse, SetRoleRequest,
    },
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use omniroute_domain::Role;

/// Start a conversation
#[utoipa::path(
    post,
    path = "/api/conversations",
    request_body = CreateConversationRequest,
    responses(
        (status = 201, description = "Conversation created", body = ConversationSnapshot),
        (status = 400, description = "Unknown role")
    ),
    tag = "conversations"
)]
pub async fn create_conversation(
    State(state): State<AppState>,
    payload: Option<Json<CreateConversationRequest>>,
) -> Result<(StatusCode, Json<ConversationSnapshot>)> {
    let role = match payload.and_then(|Json(p)| p.role) {
        Some(raw) => parse_role(&raw)?,
        None => Role::Landing,
    };

    let assistant = state.conversations.create(role);
    Ok((StatusCode::CREATED, Json(assistant.snapshot())))
}

/// Get a conversation's transcript and status
#[utoipa::path(
    get,
    path = "/api/conversations/{id}",
    params(
        ("id" = String, Path, description = "Conversation ID")
    ),
    responses(
        (status = 200, description = "Conversation snapshot", body = ConversationSnapshot),
        (status = 404, description = "Conversation not found")
    ),
    tag = "conversations"
)]
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConversationSnapshot>> {
    Ok(Json(state.conversations.get(&id)?.snapshot()))
}

/// Delete a conversation
#[utoipa::path(
    delete,
    path = "/api/conversations/{id}",
    params(
        ("id" = String, Path, description = "Conversation ID")
    ),
    responses(
        (status = 204, description = "Conversation deleted"),
        (status = 404, description = "Conversation not found")
    ),
    tag = "conversations"
)]
pub async fn delete_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.conversations.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Switch the conversation's role, resetting its transcript
#[utoipa::path(
    put,
    path = "/api/conversations/{id}/role",
    params(
        ("id" = String, Path, description = "Conversation ID")
    ),
    request_body = SetRoleRequest,
    responses(
        (status = 200, description = "Transcript reset to the new role's greeting", body = ConversationSnapshot),
        (status = 400, description = "Unknown role"),
        (status = 404, description = "Conversation not found")
    ),
    tag = "conversations"
)]
pub async fn set_role(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SetRoleRequest>,
) -> Result<Json<ConversationSnapshot>> {
    let role = parse_role(&payload.role)?;
    let assistant = state.conversations.get(&id)?;
    assistant.set_role(role);
    Ok(Json(assistant.snapshot()))
}

/// Send a message and wait for the assistant's reply
///
/// Provider failures are not HTTP errors: they show up as an "Error: ..."
/// assistant message in the returned transcript.
#[utoipa::path(
    post,
    path = "/api/conversations/{id}/messages",
    params(
        ("id" = String, Path, description = "Conversation ID")
    ),
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Send outcome and updated transcript", body = SendMessageResponse),
        (status = 404, description = "Conversation not found")
    ),
    tag = "conversations"
)]
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>> {
    let assistant = state.conversations.get(&id)?;
    let outcome = assistant.send(&payload.text).await;

    Ok(Json(SendMessageResponse {
        outcome: outcome.as_str().to_string(),
        conversation: assistant.snapshot(),
    }))
}
