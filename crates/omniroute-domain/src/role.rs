//! Operating personas.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The persona a user operates as, or `Landing` when none is selected yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Unauthenticated landing state.
    #[default]
    Landing,
    /// Shipper tracking their consignments.
    Customer,
    /// Driver working a delivery route.
    Driver,
    /// Fleet partner managing vehicles and invoices.
    Partner,
    /// Dispatcher overseeing the network.
    Dispatcher,
}

impl Role {
    /// Every role, landing first.
    pub const ALL: [Role; 5] = [
        Role::Landing,
        Role::Customer,
        Role::Driver,
        Role::Partner,
        Role::Dispatcher,
    ];

    /// Roles that own a dashboard, in landing-page order.
    pub const OPERATIONAL: [Role; 4] = [
        Role::Customer,
        Role::Driver,
        Role::Partner,
        Role::Dispatcher,
    ];

    /// Lowercase identifier, as used in URLs and prompts.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Landing => "landing",
            Role::Customer => "customer",
            Role::Driver => "driver",
            Role::Partner => "partner",
            Role::Dispatcher => "dispatcher",
        }
    }

    /// Whether this role owns a dashboard.
    pub fn is_operational(self) -> bool {
        self != Role::Landing
    }

    /// Heading shown on the login screen.
    pub fn login_title(self) -> &'static str {
        match self {
            Role::Customer => "Customer Login",
            Role::Driver => "Driver Login",
            Role::Partner => "Partner Login",
            Role::Dispatcher => "Dispatcher Login",
            Role::Landing => "Login",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landing" => Ok(Role::Landing),
            "customer" => Ok(Role::Customer),
            "driver" => Ok(Role::Driver),
            "partner" => Ok(Role::Partner),
            "dispatcher" => Ok(Role::Dispatcher),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

/// Card offered on the landing page for picking a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleCard {
    /// Role selected by the card.
    pub role: Role,
    /// Card heading.
    pub title: &'static str,
    /// One-line pitch.
    pub description: &'static str,
}

/// Landing-page role cards, one per operational role.
pub static ROLE_CARDS: [RoleCard; 4] = [
    RoleCard {
        role: Role::Customer,
        title: "Customer",
        description: "Track shipments in real-time, manage invoices, and optimize procurement workflows.",
    },
    RoleCard {
        role: Role::Driver,
        title: "Driver",
        description: "Dynamic route optimization, digital manifest management, and instant incident reporting.",
    },
    RoleCard {
        role: Role::Partner,
        title: "Partner",
        description: "Secure API integration, shared inventory visibility, and automated settlement protocols.",
    },
    RoleCard {
        role: Role::Dispatcher,
        title: "Dispatcher",
        description: "Full fleet oversight, AI-driven dispatching, and predictive delay mitigation tools.",
    },
];
