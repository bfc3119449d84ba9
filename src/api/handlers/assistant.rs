use crate::{
    assistant,
    types::{parse_role, ReplyRequest, ReplyResponse, Result},
    AppState,
};
use axum::{extract::State, Json};

/// Ask the assistant for a single reply
///
/// The browser widget keeps its own transcript and only needs the server to
/// hold the credential and call the model.
#[utoipa::path(
    post,
    path = "/api/assistant/reply",
    request_body = ReplyRequest,
    responses(
        (status = 200, description = "Generated reply (may be empty)", body = ReplyResponse),
        (status = 400, description = "Empty message or unknown role"),
        (status = 502, description = "The generation service failed"),
        (status = 503, description = "The assistant is not configured")
    ),
    tag = "assistant"
)]
pub async fn reply(
    State(state): State<AppState>,
    Json(payload): Json<ReplyRequest>,
) -> Result<Json<ReplyResponse>> {
    let role = parse_role(&payload.role)?;
    let reply = assistant::reply(state.llm_factory.as_ref(), role, &payload.message).await?;

    Ok(Json(ReplyResponse {
        reply,
        model: state.llm_factory.default_provider().model().to_string(),
    }))
}
