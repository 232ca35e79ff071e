//! Concierge Chat Component
//!
//! Floating chat button that opens a menu-aware assistant.

use leptos::*;

use luxecut::concierge::{
    ChatRole, ConciergeChat, ConciergeError, GenerationRequest, TextGenerator, DEFAULT_MODEL,
};

use crate::components::loading::TypingDots;
use crate::state::use_app;

/// Chat widget pinned to the bottom-right corner
#[component]
pub fn Concierge() -> impl IntoView {
    let ctx = use_app();
    let (open, set_open) = create_signal(false);
    let chat = create_rw_signal(ConciergeChat::new());
    let (input, set_input) = create_signal(String::new());

    let send = move || {
        let text = input.get_untracked();
        let lang = ctx.lang.get_untracked();
        let services = ctx.with_store_untracked(|store| store.services().to_vec());
        let Some(prompt) = chat.try_update(|c| c.begin(&text, &services, lang)).flatten() else {
            return;
        };
        set_input.set(String::new());

        let fallback = ctx.with_strings(|t| t.concierge.error.clone());
        let client = ctx.concierge();
        spawn_local(async move {
            let outcome = match client {
                Some(client) => client.generate(GenerationRequest::text(DEFAULT_MODEL, prompt)).await,
                None => Err(ConciergeError::MissingApiKey),
            };
            chat.update(|c| {
                c.finish(outcome, &fallback);
            });
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        send();
    };

    view! {
        <div class="fixed bottom-6 right-6 z-[120]">
            {move || open.get().then(|| view! {
                <div class="absolute bottom-20 right-0 w-[22rem] h-[32rem] bg-neutral-900 border border-white/10 rounded-sm shadow-2xl flex flex-col">
                    <div class="px-5 py-4 bg-amber-400 text-neutral-950 flex items-center justify-between">
                        <span class="font-bold tracking-tight">
                            {move || ctx.with_strings(|t| t.concierge.title.clone())}
                        </span>
                    </div>

                    <div class="flex-1 overflow-y-auto p-4 space-y-3">
                        <Bubble role=ChatRole::Model text=ctx.with_strings(|t| t.concierge.welcome.clone()) />
                        {move || chat.with(|c| c.messages().to_vec())
                            .into_iter()
                            .map(|msg| view! { <Bubble role=msg.role text=msg.text /> })
                            .collect_view()}
                        {move || chat.with(|c| c.is_loading()).then(|| view! { <TypingDots /> })}
                    </div>

                    <form on:submit=on_submit class="p-3 border-t border-white/5 flex gap-2">
                        <input
                            type="text"
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                            placeholder=move || ctx.with_strings(|t| t.concierge.placeholder.clone())
                            class="flex-1 bg-neutral-950 border border-white/10 rounded-sm px-3 py-2 text-sm text-stone-100 focus:border-amber-400 focus:outline-none"
                        />
                        <button
                            type="submit"
                            disabled=move || chat.with(|c| c.is_loading())
                            class="px-4 bg-amber-400 text-neutral-950 font-bold text-sm disabled:opacity-50"
                        >
                            "➤"
                        </button>
                    </form>
                </div>
            })}

            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                class="w-16 h-16 rounded-full bg-amber-400 text-neutral-950 text-2xl shadow-xl hover:scale-105 transition-transform"
            >
                {move || if open.get() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}

#[component]
fn Bubble(role: ChatRole, text: String) -> impl IntoView {
    let class = match role {
        ChatRole::User => "ml-auto bg-amber-400 text-neutral-950",
        ChatRole::Model => "mr-auto bg-neutral-800 text-stone-100",
    };

    view! {
        <div class=format!("max-w-[85%] px-4 py-3 rounded-sm text-sm leading-relaxed {}", class)>
            {text}
        </div>
    }
}
