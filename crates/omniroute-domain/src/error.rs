//! Error types for omniroute-domain.

use crate::navigation::View;
use crate::role::Role;
use thiserror::Error;

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Errors raised by role parsing, dashboard projection and navigation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The string does not name a role.
    #[error("Unknown role '{0}'")]
    UnknownRole(String),

    /// The tab does not exist on the role's dashboard.
    #[error("Unknown tab '{tab}' for the {role} dashboard")]
    UnknownTab {
        /// Dashboard owner.
        role: Role,
        /// Requested tab name.
        tab: String,
    },

    /// The role has no dashboard (only `landing`).
    #[error("The {0} role has no dashboard")]
    NoDashboard(Role),

    /// The role cannot be picked as an operating persona.
    #[error("'{0}' cannot be selected as an operating role")]
    InvalidRole(Role),

    /// The navigation event is not allowed from the current view.
    #[error("Cannot {event} from the {from} view")]
    InvalidTransition {
        /// View the navigator was in.
        from: View,
        /// Rejected event name.
        event: &'static str,
    },

    /// A delayed login finished after the user left that login screen.
    #[error("The login screen was left before sign-in completed")]
    StaleLogin,
}
