//! Role dashboard page

use crate::components::{Header, PanelView};
use crate::state::AppState;
use leptos::prelude::*;
use omniroute_domain::dashboard::{self, Dashboard};

/// Project the dashboard for the current role and tab.
///
/// A stale tab from another role falls back to the default tab.
fn current_dashboard(state: AppState) -> Option<Dashboard> {
    let role = state.navigator.get().dashboard_role()?;
    let tab = state.tab.get();
    match dashboard::project(role, tab.as_deref()) {
        Ok(dashboard) => Some(dashboard),
        Err(e) => {
            tracing::warn!("Falling back to default tab: {}", e);
            dashboard::project(role, None).ok()
        }
    }
}

/// Dashboard page
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    move || {
        let dashboard = current_dashboard(state)?;
        let active = dashboard.active_tab;

        Some(view! {
            <div class="min-h-screen flex flex-col">
                <Header portal=dashboard.portal />

                <nav class="border-b border-white/10">
                    <div class="max-w-7xl mx-auto px-4 flex gap-1">
                        {dashboard.tabs.iter().map(|&tab| view! {
                            <button
                                on:click=move |_| state.tab.set(Some(tab.to_string()))
                                class={if tab == active { "tab tab-active" } else { "tab" }}
                            >
                                {tab}
                            </button>
                        }).collect_view()}
                    </div>
                </nav>

                <main class="flex-1 max-w-7xl w-full mx-auto px-4 py-8">
                    <PanelView panel=dashboard.panel />
                </main>
            </div>
        })
    }
}
