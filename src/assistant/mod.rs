//! Async assistant engine.
//!
//! [`Assistant`] drives an [`AssistantState`] against a real LLM client. The
//! state lives behind a `parking_lot::Mutex` that is only held for the
//! synchronous halves of a send, never across the provider call. The
//! provider call runs in its own task, so a caller that goes away does not
//! take the reply with it.

/// In-memory registry of server-held conversations.
pub mod store;

pub use store::ConversationStore;

use crate::llm::LLMClientFactoryTrait;
use crate::types::{AppError, ConversationSnapshot, MessageView, Result};
use chrono::{DateTime, Utc};
use omniroute_domain::{prompt, AssistantState, Completion, Ignored, OutboundRequest, Role};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Result of [`Assistant::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was sent.
    Ignored(Ignored),
    /// A reply (or error message) was appended.
    Replied,
    /// The role changed mid-flight and the reply was dropped.
    Discarded,
}

impl SendOutcome {
    /// Stable name used in API responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            SendOutcome::Ignored(Ignored::Empty) => "ignored_empty",
            SendOutcome::Ignored(Ignored::Busy) => "ignored_busy",
            SendOutcome::Replied => "replied",
            SendOutcome::Discarded => "discarded",
        }
    }
}

struct Inner {
    state: AssistantState,
    updated_at: DateTime<Utc>,
}

/// One conversation with the logistics assistant.
pub struct Assistant {
    id: String,
    created_at: DateTime<Utc>,
    inner: Arc<Mutex<Inner>>,
    factory: Arc<dyn LLMClientFactoryTrait>,
}

impl Assistant {
    /// Fresh conversation greeted for `role`.
    pub fn new(role: Role, factory: Arc<dyn LLMClientFactoryTrait>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            inner: Arc::new(Mutex::new(Inner {
                state: AssistantState::new(role),
                updated_at: now,
            })),
            factory,
        }
    }

    /// Conversation id (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Role the conversation currently answers for.
    pub fn role(&self) -> Role {
        self.inner.lock().state.role()
    }

    /// Whether a reply is pending.
    pub fn is_loading(&self) -> bool {
        self.inner.lock().state.is_loading()
    }

    /// Time of the last change to the conversation.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.inner.lock().updated_at
    }

    /// Show the chat panel.
    pub fn open(&self) {
        self.update(AssistantState::open);
    }

    /// Hide the chat panel. The transcript is kept.
    pub fn close(&self) {
        self.update(AssistantState::close);
    }

    /// Reset the transcript for `role`. A reply still in flight is dropped
    /// when it arrives.
    pub fn set_role(&self, role: Role) {
        self.update(|state| state.set_role(role));
    }

    /// Send `text` and wait for the reply.
    ///
    /// Provider and configuration failures never escape: they end up in the
    /// transcript as an "Error: ..." assistant message. Dropping the returned
    /// future does not stop the reply from landing in the transcript.
    pub async fn send(&self, text: &str) -> SendOutcome {
        let request = {
            let mut inner = self.inner.lock();
            match inner.state.submit(text) {
                Ok(request) => {
                    inner.updated_at = Utc::now();
                    request
                }
                Err(ignored) => {
                    debug!(conversation = %self.id, reason = %ignored, "Send ignored");
                    return SendOutcome::Ignored(ignored);
                }
            }
        };

        let ticket = request.ticket;
        let task = tokio::spawn({
            let inner = Arc::clone(&self.inner);
            let factory = Arc::clone(&self.factory);
            let id = self.id.clone();
            async move {
                let outcome = generate(factory.as_ref(), &id, &request).await;
                let mut inner = inner.lock();
                inner.updated_at = Utc::now();
                inner.state.complete(request.ticket, outcome)
            }
        });

        let completion = match task.await {
            Ok(completion) => completion,
            Err(e) => {
                error!(conversation = %self.id, error = %e, "Generation task failed");
                let mut inner = self.inner.lock();
                inner.updated_at = Utc::now();
                inner
                    .state
                    .complete(ticket, Err("The request failed unexpectedly".to_string()))
            }
        };

        match completion {
            Completion::Applied => SendOutcome::Replied,
            Completion::Discarded => {
                debug!(conversation = %self.id, "Role changed mid-flight, reply discarded");
                SendOutcome::Discarded
            }
            Completion::Unknown => {
                warn!(conversation = %self.id, ?ticket, "Completed an unknown ticket");
                SendOutcome::Discarded
            }
        }
    }

    /// Serializable view of the conversation.
    pub fn snapshot(&self) -> ConversationSnapshot {
        let inner = self.inner.lock();
        ConversationSnapshot {
            id: self.id.clone(),
            role: inner.state.role().to_string(),
            open: inner.state.is_open(),
            loading: inner.state.is_loading(),
            messages: inner.state.transcript().iter().map(MessageView::from).collect(),
            created_at: self.created_at,
            updated_at: inner.updated_at,
        }
    }

    fn update(&self, f: impl FnOnce(&mut AssistantState)) {
        let mut inner = self.inner.lock();
        f(&mut inner.state);
        inner.updated_at = Utc::now();
    }
}

async fn generate(
    factory: &dyn LLMClientFactoryTrait,
    conversation: &str,
    request: &OutboundRequest,
) -> std::result::Result<String, String> {
    let client = match factory.create_default().await {
        Ok(client) => client,
        Err(e) => {
            error!(conversation, error = %e, "Assistant unavailable");
            return Err(e.detail().to_string());
        }
    };

    client
        .generate_with_system(&request.system_instruction, &request.prompt)
        .await
        .map_err(|e| {
            error!(
                conversation,
                model = client.model_name(),
                error = %e,
                "Generation failed"
            );
            e.detail().to_string()
        })
}

/// Stateless reply for `role`, used by the browser widget which keeps its
/// own transcript.
pub async fn reply(
    factory: &dyn LLMClientFactoryTrait,
    role: Role,
    message: &str,
) -> Result<String> {
    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::InvalidInput("message must not be empty".to_string()));
    }

    let client = factory.create_default().await?;
    client
        .generate_with_system(&prompt::system_instruction(role), message)
        .await
        .inspect_err(|e| error!(%role, model = client.model_name(), error = %e, "Generation failed"))
}
