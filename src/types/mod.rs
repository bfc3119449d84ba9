//! Request/response bodies and the application error type.

use chrono::{DateTime, Utc};
use omniroute_domain::{ConversationMessage, Dashboard, DomainError, Role, RoleCard};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ============= API Request/Response Types =============

/// Service liveness and the active model.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "ok" while the server answers
    pub status: String,
    /// Crate version
    pub version: String,
    /// Provider currently configured
    pub provider: String,
    /// Model currently configured
    pub model: String,
}

/// Landing page role card.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleCardView {
    /// Role identifier, e.g. `driver`
    pub role: String,
    /// Card heading
    pub title: String,
    /// Card blurb
    pub description: String,
    /// Heading shown on the login screen
    pub login_title: String,
}

impl From<&RoleCard> for RoleCardView {
    fn from(card: &RoleCard) -> Self {
        Self {
            role: card.role.to_string(),
            title: card.title.to_string(),
            description: card.description.to_string(),
            login_title: card.role.login_title().to_string(),
        }
    }
}

/// Query string for the dashboard endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct DashboardQuery {
    /// Tab name, case-insensitive. Defaults to the role's first tab.
    pub tab: Option<String>,
}

/// A dashboard with its active panel.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardView {
    /// Role the dashboard belongs to
    pub role: String,
    /// Portal title
    pub portal: String,
    /// Tab names in display order
    pub tabs: Vec<String>,
    /// Tab whose panel is included
    pub active_tab: String,
    /// Panel content, tagged by `kind`.
    #[schema(value_type = Object)]
    pub panel: omniroute_domain::Panel,
}

impl From<Dashboard> for DashboardView {
    fn from(d: Dashboard) -> Self {
        Self {
            role: d.role.to_string(),
            portal: d.portal.to_string(),
            tabs: d.tabs.iter().map(|t| t.to_string()).collect(),
            active_tab: d.active_tab.to_string(),
            panel: d.panel,
        }
    }
}

/// One-shot reply used by the browser assistant widget.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReplyRequest {
    /// Role the answer is conditioned on
    pub role: String,
    /// User text
    pub message: String,
}

/// Model reply for a [`ReplyRequest`].
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReplyResponse {
    /// Generated text
    pub reply: String,
    /// Model that produced it
    pub model: String,
}

/// Body of `POST /api/conversations`.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateConversationRequest {
    /// Starting role; `landing` when omitted.
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `PUT /api/conversations/{id}/role`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetRoleRequest {
    /// New role
    pub role: String,
}

/// Body of `POST /api/conversations/{id}/messages`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    /// User text
    pub text: String,
}

/// Transcript entry as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageView {
    /// "user" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

impl From<&ConversationMessage> for MessageView {
    fn from(m: &ConversationMessage) -> Self {
        let role = match m.role {
            omniroute_domain::MessageRole::User => "user",
            omniroute_domain::MessageRole::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            content: m.content.clone(),
        }
    }
}

/// Point-in-time view of a server-held conversation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationSnapshot {
    /// Conversation id
    pub id: String,
    /// Current role
    pub role: String,
    /// Whether the chat panel is shown
    pub open: bool,
    /// Whether a reply is pending
    pub loading: bool,
    /// Transcript, greeting first
    pub messages: Vec<MessageView>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last change
    pub updated_at: DateTime<Utc>,
}

/// Result of sending a message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageResponse {
    /// One of `replied`, `discarded`, `ignored_empty`, `ignored_busy`.
    pub outcome: String,
    /// State after the send
    pub conversation: ConversationSnapshot,
}

// ============= Error Types =============

/// Errors surfaced by the library and mapped to HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing key or unusable settings (503)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider call failed (502)
    #[error("LLM error: {0}")]
    LLM(String),

    /// Unknown role, tab or conversation (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed request (400)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Anything else (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The message without the category prefix.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Configuration(msg)
            | AppError::LLM(msg)
            | AppError::NotFound(msg)
            | AppError::InvalidInput(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownRole(_) | DomainError::UnknownTab { .. } => {
                AppError::NotFound(err.to_string())
            }
            DomainError::NoDashboard(_)
            | DomainError::InvalidRole(_)
            | DomainError::InvalidTransition { .. }
            | DomainError::StaleLogin => AppError::InvalidInput(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Configuration(msg) => (axum::http::StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::LLM(msg) => (axum::http::StatusCode::BAD_GATEWAY, msg),
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Result alias over [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

/// Parse a role supplied in a request body.
pub fn parse_role(raw: &str) -> Result<Role> {
    raw.parse::<Role>()
        .map_err(|e| AppError::InvalidInput(e.to_string()))
}
