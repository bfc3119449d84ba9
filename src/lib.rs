//! # OmniRoute - logistics operations portal
//!
//! Server side of the OmniRoute prototype: role dashboards for customers,
//! drivers, partners and dispatchers, plus an AI logistics assistant backed
//! by Google Gemini (or a local Ollama model during development).
//!
//! ## Overview
//!
//! OmniRoute can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `omniroute` binary
//! 2. **As a library** - Drive the assistant from your own Rust code
//!
//! The pure logic (roles, navigation, dashboards, the assistant state
//! machine) lives in the `omniroute-domain` crate and is re-exported here as
//! [`domain`].
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use omniroute::{assistant::Assistant, ConfigBasedLLMFactory, ConfigManager};
//! use omniroute::domain::Role;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ConfigManager::load_or_default("omniroute.toml")?);
//!     let factory = Arc::new(ConfigBasedLLMFactory::new(config));
//!
//!     let assistant = Assistant::new(Role::Driver, factory);
//!     assistant.send("What is the ETA for stop 2?").await;
//!
//!     for message in assistant.snapshot().messages {
//!         println!("{}: {}", message.role, message.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `ollama` | Ollama local inference (default) |
//! | `swagger-ui` | Interactive API docs at `/swagger-ui` |
//! | `ui` | Embed the Leptos frontend from `ui/dist` |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`assistant`] - Async assistant engine and conversation store
//! - [`cli`] - Command-line interface
//! - [`llm`] - LLM client implementations
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration and logging

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Async assistant engine and conversation store.
pub mod assistant;
/// Command-line interface.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration and logging utilities.
pub mod utils;

/// Roles, navigation, dashboards and the assistant state machine.
pub use omniroute_domain as domain;

// Re-export commonly used types
pub use assistant::{Assistant, ConversationStore, SendOutcome};
pub use llm::{ConfigBasedLLMFactory, LLMClient, LLMClientFactory, LLMClientFactoryTrait, Provider};
pub use types::{AppError, Result};
pub use utils::toml_config::{ConfigManager, OmniRouteConfig};

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// TOML configuration with hot-reload support
    pub config_manager: Arc<ConfigManager>,
    /// LLM client factory
    pub llm_factory: Arc<dyn LLMClientFactoryTrait>,
    /// Server-held assistant conversations
    pub conversations: Arc<ConversationStore>,
}

impl AppState {
    /// Wire the state from a config manager and a factory. The conversation
    /// store shares the same factory.
    pub fn new(
        config_manager: Arc<ConfigManager>,
        llm_factory: Arc<dyn LLMClientFactoryTrait>,
    ) -> Self {
        let max_conversations = config_manager.config().server.max_conversations;
        let conversations = Arc::new(ConversationStore::with_limit(
            Arc::clone(&llm_factory),
            max_conversations,
        ));
        Self {
            config_manager,
            llm_factory,
            conversations,
        }
    }

    /// State whose factory follows the live configuration
    pub fn from_config(config_manager: Arc<ConfigManager>) -> Self {
        let factory = Arc::new(ConfigBasedLLMFactory::new(Arc::clone(&config_manager)));
        Self::new(config_manager, factory)
    }
}
