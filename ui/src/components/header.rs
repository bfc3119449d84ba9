//! Header component

use crate::state::AppState;
use leptos::prelude::*;
use omniroute_domain::View;

/// Top bar: brand, current role and sign-out on dashboards
#[component]
pub fn Header(
    /// Portal label shown next to the brand, e.g. "Driver Console"
    #[prop(optional, into)]
    portal: Option<String>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let on_dashboard = move || state.navigator.get().view() == View::Dashboard;

    view! {
        <header class="header h-16 sticky top-0 z-40 border-b border-white/10 bg-black/60 backdrop-blur">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <span class="logo-mark">"◆"</span>
                    <div>
                        <h1 class="text-lg font-bold tracking-tight">"OmniRoute"</h1>
                        {portal.map(|label| view! {
                            <p class="text-xs text-slate-500 -mt-0.5 uppercase tracking-widest">{label}</p>
                        })}
                    </div>
                </div>

                <Show when=on_dashboard>
                    <button on:click=move |_| state.logout() class="btn btn-ghost">
                        "Sign Out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
