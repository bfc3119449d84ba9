//! Top-level view selection.
//!
//! [`Navigator`] owns the current screen and the selected role. Callers hold
//! one per session and pass it down; there is no global instance.

use crate::error::{DomainError, Result};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Simulated login latency. Login always succeeds once it has elapsed.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Marketing page with the role cards.
    #[default]
    Landing,
    /// Simulated login form for the picked role.
    Login,
    /// The role's dashboard.
    Dashboard,
}

impl View {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Login => "login",
            View::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one visit to the login screen.
///
/// A delayed login completes only while the navigator is still on the same
/// visit; leaving and re-entering the login screen invalidates older tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoginTicket {
    visit: u64,
}

/// Landing → login → dashboard state machine.
///
/// Every event returns `Ok(Some(role))` when it changed the active role, so
/// the caller knows to reset its assistant, and `Ok(None)` otherwise.
/// Rejected events leave the navigator untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Navigator {
    view: View,
    role: Role,
    login_visits: u64,
}

impl Navigator {
    /// Start on the landing page with no role.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current screen.
    pub fn view(&self) -> View {
        self.view
    }

    /// Selected role; `Landing` when none is picked.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The role whose dashboard is showing, if any.
    pub fn dashboard_role(&self) -> Option<Role> {
        (self.view == View::Dashboard).then_some(self.role)
    }

    /// Pick a role on the landing page and move to its login screen.
    pub fn select_role(&mut self, role: Role) -> Result<Option<Role>> {
        self.expect_view(View::Landing, "select a role")?;
        if !role.is_operational() {
            return Err(DomainError::InvalidRole(role));
        }
        self.view = View::Login;
        self.login_visits += 1;
        Ok(self.replace_role(role))
    }

    /// Start a delayed login on the current login screen.
    pub fn begin_login(&self) -> Result<LoginTicket> {
        self.expect_view(View::Login, "log in")?;
        Ok(LoginTicket {
            visit: self.login_visits,
        })
    }

    /// Complete a login started with [`Navigator::begin_login`].
    ///
    /// Fails with [`DomainError::StaleLogin`] when the user left the login
    /// screen in the meantime, even if they came back to it.
    pub fn finish_login(&mut self, ticket: LoginTicket) -> Result<Option<Role>> {
        self.expect_view(View::Login, "log in")?;
        if ticket.visit != self.login_visits {
            return Err(DomainError::StaleLogin);
        }
        self.complete_login()
    }

    /// Finish the simulated login. The caller applies [`LOGIN_DELAY`] first.
    pub fn complete_login(&mut self) -> Result<Option<Role>> {
        self.expect_view(View::Login, "log in")?;
        self.view = View::Dashboard;
        Ok(None)
    }

    /// Leave the dashboard and clear the role.
    pub fn logout(&mut self) -> Result<Option<Role>> {
        self.expect_view(View::Dashboard, "log out")?;
        self.view = View::Landing;
        Ok(self.replace_role(Role::Landing))
    }

    /// Return from the login screen. The picked role is kept.
    pub fn back(&mut self) -> Result<Option<Role>> {
        self.expect_view(View::Login, "go back")?;
        self.view = View::Landing;
        Ok(None)
    }

    fn expect_view(&self, expected: View, event: &'static str) -> Result<()> {
        if self.view == expected {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: self.view,
                event,
            })
        }
    }

    fn replace_role(&mut self, role: Role) -> Option<Role> {
        if self.role == role {
            None
        } else {
            self.role = role;
            Some(role)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_session() {
        let mut nav = Navigator::new();
        assert_eq!(nav.view(), View::Landing);
        assert_eq!(nav.role(), Role::Landing);

        assert_eq!(nav.select_role(Role::Driver), Ok(Some(Role::Driver)));
        assert_eq!(nav.view(), View::Login);
        assert_eq!(nav.dashboard_role(), None);

        assert_eq!(nav.complete_login(), Ok(None));
        assert_eq!(nav.dashboard_role(), Some(Role::Driver));

        assert_eq!(nav.logout(), Ok(Some(Role::Landing)));
        assert_eq!(nav.view(), View::Landing);
        assert_eq!(nav.role(), Role::Landing);
    }

    #[test]
    fn test_back_keeps_role() {
        let mut nav = Navigator::new();
        nav.select_role(Role::Partner).unwrap();
        assert_eq!(nav.back(), Ok(None));
        assert_eq!(nav.view(), View::Landing);
        assert_eq!(nav.role(), Role::Partner);

        // picking the same role again is not a role change
        assert_eq!(nav.select_role(Role::Partner), Ok(None));
        assert_eq!(nav.back(), Ok(None));
        assert_eq!(nav.select_role(Role::Customer), Ok(Some(Role::Customer)));
    }

    #[test]
    fn test_invalid_transitions_leave_state_unchanged() {
        let mut nav = Navigator::new();
        let err = nav.complete_login().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidTransition {
                from: View::Landing,
                event: "log in"
            }
        );
        assert_eq!(err.to_string(), "Cannot log in from the landing view");
        assert!(nav.logout().is_err());
        assert!(nav.back().is_err());
        assert_eq!(nav, Navigator::new());

        nav.select_role(Role::Dispatcher).unwrap();
        nav.complete_login().unwrap();
        let before = nav;
        assert!(nav.select_role(Role::Customer).is_err());
        assert!(nav.back().is_err());
        assert!(nav.complete_login().is_err());
        assert_eq!(nav, before);
    }

    #[test]
    fn test_delayed_login_completes_on_same_visit() {
        let mut nav = Navigator::new();
        nav.select_role(Role::Driver).unwrap();
        let ticket = nav.begin_login().unwrap();

        assert_eq!(nav.finish_login(ticket), Ok(None));
        assert_eq!(nav.dashboard_role(), Some(Role::Driver));
    }

    #[test]
    fn test_delayed_login_dropped_after_leaving_login() {
        let mut nav = Navigator::new();
        nav.select_role(Role::Driver).unwrap();
        let stale = nav.begin_login().unwrap();

        // back out and pick again before the delay elapses
        nav.back().unwrap();
        assert!(nav.finish_login(stale).is_err());
        nav.select_role(Role::Customer).unwrap();

        assert_eq!(nav.finish_login(stale), Err(DomainError::StaleLogin));
        assert_eq!(nav.view(), View::Login);
        assert_eq!(nav.role(), Role::Customer);

        let fresh = nav.begin_login().unwrap();
        assert_eq!(nav.finish_login(fresh), Ok(None));
        assert_eq!(nav.dashboard_role(), Some(Role::Customer));
    }

    #[test]
    fn test_begin_login_requires_login_view() {
        let nav = Navigator::new();
        assert!(matches!(
            nav.begin_login(),
            Err(DomainError::InvalidTransition { from: View::Landing, .. })
        ));
    }

    #[test]
    fn test_landing_is_not_selectable() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.select_role(Role::Landing),
            Err(DomainError::InvalidRole(Role::Landing))
        );
        assert_eq!(nav.view(), View::Landing);
    }

    #[test]
    fn test_login_delay() {
        assert_eq!(LOGIN_DELAY.as_millis(), 1500);
    }
}
