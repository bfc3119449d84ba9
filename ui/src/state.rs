//! Global application state

use crate::api::dispatch_reply;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use omniroute_domain::navigation::LOGIN_DELAY;
use omniroute_domain::{AssistantState, DomainError, Ignored, Navigator, Role};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Landing → login → dashboard position and the selected role
    pub navigator: RwSignal<Navigator>,
    /// Floating assistant widget
    pub assistant: RwSignal<AssistantState>,
    /// Simulated login in progress
    pub logging_in: RwSignal<bool>,
    /// Selected dashboard tab, reset on every role change
    pub tab: RwSignal<Option<String>>,
    /// API base URL; empty means same origin
    pub api_base: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        let navigator = Navigator::new();
        Self {
            navigator: RwSignal::new(navigator),
            assistant: RwSignal::new(AssistantState::new(navigator.role())),
            logging_in: RwSignal::new(false),
            tab: RwSignal::new(None),
            api_base: RwSignal::new(String::new()),
        }
    }

    /// Apply a navigator transition and follow any role change
    fn transition(
        &self,
        step: impl FnOnce(&mut Navigator) -> omniroute_domain::Result<Option<Role>>,
        on_success: impl FnOnce(),
    ) {
        let result = self.navigator.try_update(step);
        match result {
            Some(Ok(changed)) => {
                if let Some(role) = changed {
                    self.assistant.update(|assistant| assistant.set_role(role));
                    self.tab.set(None);
                }
                on_success();
            }
            Some(Err(DomainError::StaleLogin)) => {
                tracing::debug!("Dropped login from an earlier visit")
            }
            Some(Err(e)) => tracing::warn!("Ignored navigation: {}", e),
            None => {}
        }
    }

    /// Landing card picked
    pub fn select_role(&self, role: Role) {
        self.transition(|nav| nav.select_role(role), || {});
    }

    /// Simulated sign-in: wait, then enter the dashboard.
    ///
    /// The timer carries a login ticket, so leaving the login screen during
    /// the delay cancels it even if the user comes straight back.
    pub fn login(&self) {
        if self.logging_in.get_untracked() {
            return;
        }
        let ticket = match self.navigator.with_untracked(|nav| nav.begin_login()) {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::warn!("Ignored login: {}", e);
                return;
            }
        };
        self.logging_in.set(true);
        let state = *self;
        spawn_local(async move {
            TimeoutFuture::new(LOGIN_DELAY.as_millis() as u32).await;
            state.transition(|nav| nav.finish_login(ticket), || state.logging_in.set(false));
        });
    }

    /// Return from login to landing
    pub fn back(&self) {
        self.transition(Navigator::back, || self.logging_in.set(false));
    }

    /// Leave the dashboard
    pub fn logout(&self) {
        self.transition(Navigator::logout, || {});
    }

    /// Send the widget's current input
    pub fn send(&self) {
        let request = self.assistant.try_update(|assistant| assistant.begin_send());
        match request {
            Some(Ok(request)) => dispatch_reply(*self, request),
            Some(Err(Ignored::Busy)) => tracing::debug!("Send ignored: reply in progress"),
            Some(Err(Ignored::Empty)) | None => {}
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
