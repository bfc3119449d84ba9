//! Wire types for the OmniRoute server API

use serde::{Deserialize, Serialize};

/// Stateless assistant reply request
#[derive(Debug, Clone, Serialize)]
pub struct ReplyRequest {
    pub role: String,
    pub message: String,
}

/// Generated reply. May be empty; the assistant state applies the fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyResponse {
    pub reply: String,
    pub model: String,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}
