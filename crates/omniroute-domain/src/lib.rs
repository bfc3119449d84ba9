//! # omniroute-domain
//!
//! The I/O-free core of OmniRoute, shared by the server and the browser UI.
//!
//! ## Contents
//!
//! - **Catalog**: the fixed shipments, vehicles, warehouse zones and alerts
//!   every dashboard reads from
//! - **Dashboards**: per-role projections of the catalog, one populated tab
//!   per role and an explicit "not yet implemented" panel for the rest
//! - **Navigation**: the landing → login → dashboard view selector
//! - **Assistant**: the conversation state machine (transcript, single
//!   in-flight request, role-scoped resets) without any networking
//! - **Prompts**: greetings and the role-conditioned system instruction
//!
//! ## Quick Start
//!
//! ```rust
//! use omniroute_domain::{AssistantState, Role};
//!
//! let mut assistant = AssistantState::new(Role::Driver);
//! let request = assistant.submit("What is the ETA for stop 2?").unwrap();
//! assert!(assistant.is_loading());
//!
//! // ... hand `request.prompt` and `request.system_instruction` to a model ...
//!
//! assistant.complete(request.ticket, Ok("Stop 2 is due at 14:30.".to_string()));
//! assert_eq!(assistant.transcript().len(), 3);
//! assert!(!assistant.is_loading());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assistant;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod navigation;
pub mod prompt;
pub mod role;

pub use assistant::{
    AssistantState, Completion, ConversationMessage, Ignored, MessageRole, OutboundRequest,
    Ticket,
};
pub use dashboard::{Dashboard, Panel};
pub use error::{DomainError, Result};
pub use navigation::{LoginTicket, Navigator, View};
pub use role::{Role, RoleCard};
