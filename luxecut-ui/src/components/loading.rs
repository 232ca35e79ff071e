//! Loading Component
//!
//! Spinners shown while the concierge is thinking.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading(
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <span class="inline-flex items-center space-x-2">
            <span class="inline-block loading-spinner w-4 h-4" />
            {label.map(|text| view! { <span>{text}</span> })}
        </span>
    }
}

/// Three bouncing dots for a pending chat reply
#[component]
pub fn TypingDots() -> impl IntoView {
    view! {
        <div class="flex space-x-1 px-4 py-3">
            {(0..3).map(|i| view! {
                <span
                    class="w-2 h-2 bg-amber-400 rounded-full animate-bounce"
                    style=format!("animation-delay: {}ms", i * 150)
                />
            }).collect_view()}
        </div>
    }
}
