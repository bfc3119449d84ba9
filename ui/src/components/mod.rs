//! Reusable UI components

pub mod assistant;
pub mod chat_message;
pub mod header;
pub mod loading;
pub mod panels;

pub use assistant::AssistantWidget;
pub use chat_message::ChatMessage;
pub use header::Header;
pub use loading::{LoadingDots, LoadingSpinner, TypingIndicator};
pub use panels::PanelView;
