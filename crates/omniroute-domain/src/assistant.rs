//! Sans-I/O assistant conversation.
//!
//! [`AssistantState`] holds the transcript and request lifecycle but never
//! talks to a model. A send is split in two halves: [`AssistantState::begin_send`]
//! records the user message and hands back an [`OutboundRequest`], and
//! [`AssistantState::complete`] applies whatever the caller got back.
//!
//! Each request carries a [`Ticket`] tagged with the session epoch. Changing
//! the role bumps the epoch, so a reply that arrives afterwards is dropped
//! instead of landing in the new role's transcript.

use crate::prompt::{error_reply, greeting, system_instruction, EMPTY_REPLY_FALLBACK};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Typed by the user.
    User,
    /// Produced by the assistant (greeting, reply or error).
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Author.
    pub role: MessageRole,
    /// Text.
    pub content: String,
}

impl ConversationMessage {
    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// An assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Identifies one outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    /// Session epoch when the request was made.
    pub epoch: u64,
    /// Per-state sequence number.
    pub seq: u64,
}

/// Everything needed to ask the model for a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Pass back to [`AssistantState::complete`].
    pub ticket: Ticket,
    /// Role at send time.
    pub role: Role,
    /// Trimmed user text.
    pub prompt: String,
    /// Role-conditioned system instruction.
    pub system_instruction: String,
}

/// Why a send did nothing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ignored {
    /// Input was empty after trimming.
    #[error("message is empty")]
    Empty,
    /// A reply is still outstanding.
    #[error("a reply is already in progress")]
    Busy,
}

/// What [`AssistantState::complete`] did with a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    /// Appended to the transcript.
    Applied,
    /// The role changed since the request was made; reply dropped.
    Discarded,
    /// The ticket is not the pending request; nothing changed.
    Unknown,
}

/// Conversation state for one assistant widget.
#[derive(Debug, Clone)]
pub struct AssistantState {
    role: Role,
    open: bool,
    input: String,
    transcript: Vec<ConversationMessage>,
    epoch: u64,
    next_seq: u64,
    pending: Option<Ticket>,
}

impl AssistantState {
    /// Closed widget with the role's greeting.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            open: false,
            input: String::new(),
            transcript: vec![ConversationMessage::assistant(greeting(role))],
            epoch: 0,
            next_seq: 0,
            pending: None,
        }
    }

    /// Active role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the widget is expanded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Messages, oldest first.
    pub fn transcript(&self) -> &[ConversationMessage] {
        &self.transcript
    }

    /// Whether a reply is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The outstanding request, if any.
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    /// Number of role resets so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Expand the widget.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Collapse the widget. An outstanding request keeps running.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip the open flag.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Replace the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Start sending the current input.
    ///
    /// On success the user message is in the transcript, the input is
    /// cleared and the state is loading until the returned ticket completes.
    pub fn begin_send(&mut self) -> Result<OutboundRequest, Ignored> {
        let prompt = self.input.trim();
        if prompt.is_empty() {
            return Err(Ignored::Empty);
        }
        if self.pending.is_some() {
            return Err(Ignored::Busy);
        }

        let prompt = prompt.to_string();
        self.input.clear();
        self.transcript.push(ConversationMessage::user(prompt.clone()));

        let ticket = Ticket {
            epoch: self.epoch,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending = Some(ticket);

        Ok(OutboundRequest {
            ticket,
            role: self.role,
            prompt,
            system_instruction: system_instruction(self.role),
        })
    }

    /// Set the input to `text` and start sending it.
    pub fn submit(&mut self, text: impl Into<String>) -> Result<OutboundRequest, Ignored> {
        self.set_input(text);
        self.begin_send()
    }

    /// Apply the outcome of a request: reply text or an error description.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<String, String>) -> Completion {
        if self.pending != Some(ticket) {
            return Completion::Unknown;
        }
        self.pending = None;

        if ticket.epoch != self.epoch {
            return Completion::Discarded;
        }

        let content = match outcome {
            Ok(text) if text.trim().is_empty() => EMPTY_REPLY_FALLBACK.to_string(),
            Ok(text) => text,
            Err(description) => error_reply(&description),
        };
        self.transcript.push(ConversationMessage::assistant(content));
        Completion::Applied
    }

    /// Reset the transcript to the greeting for `role`.
    ///
    /// Open flag and input survive. A request in flight stays pending until
    /// it completes, and its reply is then discarded.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.epoch += 1;
        self.transcript = vec![ConversationMessage::assistant(greeting(role))];
    }
}

impl Default for AssistantState {
    fn default() -> Self {
        Self::new(Role::Landing)
    }
}
