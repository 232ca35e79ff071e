//! Toast Notification Component
//!
//! Shows success and error messages.

use leptos::*;

use crate::state::use_app;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="fixed bottom-24 left-4 z-[200] space-y-2">
            // Success toast
            {move || {
                ctx.success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}

            // Error toast
            {move || {
                ctx.error.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    let (icon, bg_class) = match variant {
        ToastVariant::Success => ("✓", "bg-emerald-700"),
        ToastVariant::Error => ("✕", "bg-red-700"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-sm shadow-lg",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
