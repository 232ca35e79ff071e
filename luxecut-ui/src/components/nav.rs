//! Navigation Component
//!
//! Header bar with section anchors, the language toggle and the booking
//! button. On the admin route it only offers a way back.

use leptos::*;
use leptos_router::*;

use luxecut::catalog::Language;
use luxecut::site::Route as SiteRoute;

use crate::state::use_app;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_app();
    let pathname = use_location().pathname;
    let on_admin = move || SiteRoute::from_path(&pathname.get()) == SiteRoute::Admin;
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <nav class="fixed top-0 left-0 right-0 z-[100] bg-neutral-950/80 backdrop-blur border-b border-white/5">
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    // Logo and brand
                    <A href=SiteRoute::Home.path() class="flex items-center gap-3">
                        <span class="w-10 h-10 bg-amber-400 rounded-lg flex items-center justify-center text-neutral-950 font-bold">
                            "LC"
                        </span>
                        <span class="text-2xl font-bold text-stone-100 tracking-tighter hidden sm:block">"LUXECUT"</span>
                    </A>

                    {move || if on_admin() {
                        view! {
                            <A href=SiteRoute::Home.path() class="text-amber-400 font-bold text-xs hover:text-stone-100">
                                "← EXIT ADMIN"
                            </A>
                        }.into_view()
                    } else {
                        view! {
                            <div class="flex items-center gap-6">
                                <div class="hidden lg:flex gap-2">
                                    <SectionLink href="#services" label=move || ctx.with_strings(|t| t.nav.services.clone()) />
                                    <SectionLink href="#consultation" label=move || ctx.with_strings(|t| t.nav.ai_consult.clone()) />
                                    <SectionLink href="#about" label=move || ctx.with_strings(|t| t.nav.about.clone()) />
                                </div>
                                <LanguageToggle />
                                <button
                                    on:click=move |_| ctx.open_booking(None)
                                    class="hidden lg:block bg-amber-400 text-neutral-950 px-6 py-3 rounded-sm text-[11px] font-bold tracking-widest hover:bg-amber-300"
                                >
                                    {move || ctx.with_strings(|t| t.nav.book_now.clone())}
                                </button>
                                <button
                                    class="lg:hidden text-stone-100 p-2"
                                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                                >
                                    {move || if menu_open.get() { "✕" } else { "☰" }}
                                </button>
                            </div>
                        }.into_view()
                    }}
                </div>
            </div>

            // Mobile menu
            {move || (menu_open.get() && !on_admin()).then(|| view! {
                <div class="lg:hidden bg-neutral-900 border-b border-white/5 p-6 flex flex-col gap-6">
                    <a href="#services" on:click=move |_| set_menu_open.set(false) class="text-sm uppercase font-bold tracking-widest text-gray-400">
                        {move || ctx.with_strings(|t| t.nav.services.clone())}
                    </a>
                    <a href="#consultation" on:click=move |_| set_menu_open.set(false) class="text-sm uppercase font-bold tracking-widest text-gray-400">
                        {move || ctx.with_strings(|t| t.nav.ai_consult.clone())}
                    </a>
                    <a href="#about" on:click=move |_| set_menu_open.set(false) class="text-sm uppercase font-bold tracking-widest text-gray-400">
                        {move || ctx.with_strings(|t| t.nav.about.clone())}
                    </a>
                    <button
                        on:click=move |_| {
                            ctx.open_booking(None);
                            set_menu_open.set(false);
                        }
                        class="w-full py-4 bg-amber-400 text-neutral-950 font-bold text-xs tracking-widest"
                    >
                        {move || ctx.with_strings(|t| t.nav.book_now.clone())}
                    </button>
                </div>
            })}
        </nav>
    }
}

/// Anchor to a home page section
#[component]
fn SectionLink<F>(
    href: &'static str,
    label: F,
) -> impl IntoView
where
    F: Fn() -> String + 'static,
{
    view! {
        <a
            href=href
            class="px-4 py-2 text-[11px] font-bold tracking-[0.25em] uppercase text-gray-400 hover:text-amber-400 transition-colors"
        >
            {label}
        </a>
    }
}

/// Shows the language the button switches to
#[component]
fn LanguageToggle() -> impl IntoView {
    let ctx = use_app();

    view! {
        <button
            on:click=move |_| ctx.toggle_language()
            class="text-[10px] font-bold text-amber-400 border border-amber-400/30 px-3 py-1 rounded-full hover:bg-amber-400/10"
        >
            {move || match ctx.lang.get() {
                Language::Vi => "EN",
                Language::En => "VI",
            }}
        </button>
    }
}
