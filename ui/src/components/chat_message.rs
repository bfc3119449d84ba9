//! Transcript message bubble

use leptos::prelude::*;
use omniroute_domain::{ConversationMessage, MessageRole};

/// Render one transcript entry
#[component]
pub fn ChatMessage(message: ConversationMessage) -> impl IntoView {
    let is_user = message.role == MessageRole::User;

    view! {
        <div class=format!(
            "flex message-appear {}",
            if is_user { "justify-end" } else { "justify-start" }
        )>
            <div class=format!(
                "max-w-[85%] px-3 py-2 rounded-xl text-sm whitespace-pre-wrap break-words {}",
                if is_user {
                    "bg-emerald-500 text-black rounded-tr-sm"
                } else {
                    "bg-white/5 border border-white/10 text-slate-200 rounded-tl-sm"
                }
            )>
                {message.content}
            </div>
        </div>
    }
}
