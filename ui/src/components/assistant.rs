//! Floating assistant widget

use super::{ChatMessage, TypingIndicator};
use crate::state::AppState;
use leptos::html;
use leptos::prelude::*;

/// Collapsible assistant panel pinned to the bottom-right corner.
///
/// The widget reads everything from the shared [`AssistantState`], so it
/// follows role changes without being remounted.
///
/// [`AssistantState`]: omniroute_domain::AssistantState
#[component]
pub fn AssistantWidget() -> impl IntoView {
    let state = expect_context::<AppState>();
    let assistant = state.assistant;
    let bottom_ref = NodeRef::<html::Div>::new();

    let is_open = move || assistant.with(|a| a.is_open());
    let is_loading = move || assistant.with(|a| a.is_loading());
    let can_send = move || assistant.with(|a| !a.input().trim().is_empty() && !a.is_loading());

    // keep the newest message in view
    Effect::new(move |_| {
        assistant.with(|a| a.transcript().len());
        if let Some(el) = bottom_ref.get() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            state.send();
        }
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-3">
            <Show when=is_open>
                <div class="assistant-panel w-[360px] h-[480px] flex flex-col rounded-2xl border border-white/10 bg-zinc-950/95 shadow-2xl animate-fade-in-up">
                    <div class="px-4 py-3 border-b border-white/10 flex items-center justify-between">
                        <div>
                            <p class="text-sm font-semibold">"OmniRoute AI"</p>
                            <p class="text-xs text-slate-500 capitalize">
                                {move || assistant.with(|a| a.role().to_string())}
                            </p>
                        </div>
                        <button
                            on:click=move |_| assistant.update(|a| a.close())
                            class="btn btn-ghost text-xs"
                        >
                            "Close"
                        </button>
                    </div>

                    <div class="flex-1 overflow-y-auto px-4 py-3 flex flex-col gap-3">
                        <For
                            each=move || assistant.with(|a| {
                                let epoch = a.epoch();
                                a.transcript()
                                    .iter()
                                    .cloned()
                                    .enumerate()
                                    .map(|(index, message)| (epoch, index, message))
                                    .collect::<Vec<_>>()
                            })
                            key=|(epoch, index, _)| (*epoch, *index)
                            children=|(_, _, message)| view! { <ChatMessage message=message /> }
                        />
                        <Show when=is_loading>
                            <TypingIndicator />
                        </Show>
                        <div node_ref=bottom_ref></div>
                    </div>

                    <div class="p-3 border-t border-white/10 flex gap-2">
                        <input
                            type="text"
                            placeholder="Ask about shipments, routes or fleet..."
                            prop:value=move || assistant.with(|a| a.input().to_string())
                            on:input=move |ev| assistant.update(|a| a.set_input(event_target_value(&ev)))
                            on:keydown=on_keydown
                            class="input flex-1 text-sm"
                        />
                        <button
                            on:click=move |_| state.send()
                            disabled=move || !can_send()
                            class="btn btn-primary text-sm"
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>

            <button
                on:click=move |_| assistant.update(|a| a.toggle())
                class="assistant-toggle w-14 h-14 rounded-full bg-emerald-500 text-black font-bold shadow-lg"
                aria-label="Toggle assistant"
            >
                {move || if is_open() { "×" } else { "AI" }}
            </button>
        </div>
    }
}
