//! API client for the OmniRoute server

use crate::state::AppState;
use crate::types::*;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use omniroute_domain::assistant::{Completion, OutboundRequest};

/// POST a JSON body and decode the JSON response.
///
/// Failures come back as a human-readable description: the server's
/// `error` field when present, the status code otherwise.
pub async fn post_json<T, R>(url: &str, body: &T) -> Result<R, String>
where
    T: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let req = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        let status = resp.status();
        if let Ok(err) = resp.json::<ApiError>().await {
            return Err(err.error);
        }
        return Err(format!("Request failed with status {}", status));
    }

    resp.json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ask the server for one role-conditioned reply
pub async fn fetch_reply(base_url: &str, role: &str, message: &str) -> Result<String, String> {
    let url = format!("{}/api/assistant/reply", base_url);
    let body = ReplyRequest {
        role: role.to_string(),
        message: message.to_string(),
    };
    let resp: ReplyResponse = post_json(&url, &body).await?;
    tracing::debug!("reply from {}", resp.model);
    Ok(resp.reply)
}

/// Run an outbound assistant request and apply the result to app state.
///
/// The ticket decides whether the reply still belongs to the transcript;
/// a role change while this is in flight makes the completion a no-op.
pub fn dispatch_reply(state: AppState, request: OutboundRequest) {
    spawn_local(async move {
        let base = state.api_base.get_untracked();
        let outcome = fetch_reply(&base, request.role.as_str(), &request.prompt).await;
        if let Err(e) = &outcome {
            tracing::error!("Assistant request failed: {}", e);
        }
        let completion = state
            .assistant
            .try_update(|assistant| assistant.complete(request.ticket, outcome));
        if completion == Some(Completion::Discarded) {
            tracing::debug!("Discarded reply for a previous role");
        }
    });
}
