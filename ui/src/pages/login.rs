//! Simulated login page

use crate::components::{Header, LoadingSpinner};
use crate::state::AppState;
use leptos::prelude::*;

/// Login page for the selected role. Credentials are not checked.
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let title = move || state.navigator.get().role().login_title();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.login();
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />

            <main class="auth-container flex-1 flex items-center justify-center">
                <div class="w-full max-w-md px-4">
                    <div class="auth-card card p-8">
                        <div class="auth-header mb-6">
                            <h1 class="auth-title text-2xl font-bold">{title}</h1>
                            <p class="auth-subtitle text-sm text-slate-500">"Sign in to continue"</p>
                        </div>

                        <form on:submit=on_submit class="auth-form flex flex-col gap-4">
                            <div class="auth-input-group">
                                <label class="auth-label">"Email"</label>
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    placeholder="you@omniroute.io"
                                    class="input w-full"
                                />
                            </div>

                            <div class="auth-input-group">
                                <label class="auth-label">"Password"</label>
                                <input
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    placeholder="••••••••"
                                    class="input w-full"
                                />
                            </div>

                            <button
                                type="submit"
                                disabled=move || state.logging_in.get()
                                class="btn btn-primary w-full py-3 flex items-center justify-center gap-2"
                            >
                                <Show when=move || state.logging_in.get()>
                                    <LoadingSpinner />
                                </Show>
                                {move || if state.logging_in.get() { "Authenticating..." } else { "Sign In" }}
                            </button>
                        </form>

                        <button on:click=move |_| state.back() class="auth-link mt-6 text-sm text-slate-500">
                            "← Back to role selection"
                        </button>
                    </div>
                </div>
            </main>
        </div>
    }
}
