//! Landing page: role picker over the animated background

use crate::state::AppState;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use omniroute_domain::role::ROLE_CARDS;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

/// Delays after mount at which the background script is probed
const BACKGROUND_RETRY_MS: [u32; 4] = [100, 500, 1000, 2000];

/// Call `window.UnicornStudio.init()` if the script has loaded.
fn init_background() -> bool {
    let window = window();
    let Ok(studio) = js_sys::Reflect::get(&window, &JsValue::from_str("UnicornStudio")) else {
        return false;
    };
    if studio.is_undefined() || studio.is_null() {
        return false;
    }
    let Ok(init) = js_sys::Reflect::get(&studio, &JsValue::from_str("init")) else {
        return false;
    };
    let Some(init) = init.dyn_ref::<js_sys::Function>() else {
        return false;
    };
    match init.call0(&studio) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Background init threw: {:?}", e);
            false
        }
    }
}

/// Schedule the bounded background retries; dropping the timers cancels them.
fn schedule_background_init() -> Vec<Timeout> {
    let done = Rc::new(Cell::new(false));
    let last = BACKGROUND_RETRY_MS.len() - 1;

    BACKGROUND_RETRY_MS
        .iter()
        .enumerate()
        .map(|(attempt, &ms)| {
            let done = Rc::clone(&done);
            Timeout::new(ms, move || {
                if done.get() {
                    return;
                }
                if init_background() {
                    tracing::debug!("Background initialised after {}ms", ms);
                    done.set(true);
                } else if attempt == last {
                    tracing::warn!("Background script not available; continuing without it");
                }
            })
        })
        .collect()
}

/// Landing page
#[component]
pub fn LandingPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let timers = StoredValue::new_local(schedule_background_init());
    on_cleanup(move || timers.update_value(|timers| timers.clear()));

    view! {
        <div class="min-h-screen relative text-white">
            <div class="fixed inset-0 z-0 pointer-events-none overflow-hidden">
                <div data-us-project="foz7u8qJSW28hXwZaBMk" class="w-screen h-screen opacity-45"></div>
            </div>

            <main class="relative z-10 max-w-6xl mx-auto px-6 py-24 flex flex-col gap-16">
                <div class="flex flex-col gap-4 max-w-2xl">
                    <p class="text-xs uppercase tracking-[0.3em] text-emerald-400">"Logistics Operating System"</p>
                    <h1 class="text-5xl md:text-6xl font-bold tracking-tight">"OmniRoute"</h1>
                    <p class="text-lg text-slate-400">
                        "One platform for shippers, drivers, carriers and dispatch. Pick your role to continue."
                    </p>
                </div>

                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    {ROLE_CARDS.iter().map(|card| {
                        let role = card.role;
                        view! {
                            <button
                                on:click=move |_| state.select_role(role)
                                class="role-card card p-6 text-left flex flex-col gap-3 hover:border-emerald-500 transition-colors"
                            >
                                <h2 class="text-lg font-semibold">{card.title}</h2>
                                <p class="text-sm text-slate-400 flex-1">{card.description}</p>
                                <span class="text-xs text-emerald-400 uppercase tracking-widest">"Enter →"</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </main>
        </div>
    }
}
