//! OmniRoute browser UI
//!
//! Landing, simulated login and per-role dashboards, with the floating
//! assistant available on every view. Navigation is driven by the shared
//! [`Navigator`](omniroute_domain::Navigator) rather than URL routes.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;
pub mod types;

use components::AssistantWidget;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use omniroute_domain::View;
use pages::{dashboard::DashboardPage, landing::LandingPage, login::LoginPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let app_state = AppState::new();
    provide_context(app_state);

    let current_view = Memo::new(move |_| app_state.navigator.get().view());

    view! {
        <Title text="OmniRoute" />
        <div class="min-h-screen relative overflow-x-hidden bg-background-dark text-slate-100">
            {move || match current_view.get() {
                View::Landing => view! { <LandingPage /> }.into_any(),
                View::Login => view! { <LoginPage /> }.into_any(),
                View::Dashboard => view! { <DashboardPage /> }.into_any(),
            }}
            <AssistantWidget />
        </div>
    }
}
