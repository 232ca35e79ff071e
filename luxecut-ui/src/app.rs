//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use luxecut::admin::SocialNetwork;
use luxecut::site::Route as SiteRoute;

use crate::components::{BookingModal, Concierge, Nav, Toast};
use crate::pages::{Admin, Home};
use crate::state::{provide_app_context, use_app};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the store, language and booking wizard to all components
    provide_app_context();

    view! {
        <Router>
            <div class="min-h-screen bg-neutral-950 text-stone-100 flex flex-col">
                // Navigation header
                <Nav />

                <div class="flex-1">
                    <Routes>
                        <Route path=SiteRoute::Home.path() view=Home />
                        <Route path=SiteRoute::Admin.path() view=Admin />
                        // Unknown paths show the home page
                        <Route path="/*any" view=Home />
                    </Routes>
                </div>

                <Footer />

                // Overlays
                <BookingModal />
                <Concierge />
                <Toast />
            </div>
        </Router>
    }
}

/// Footer with the social links and the admin portal link
#[component]
fn Footer() -> impl IntoView {
    let ctx = use_app();

    view! {
        <footer class="bg-neutral-950 py-20 border-t border-white/5">
            <div class="container mx-auto px-6 flex flex-col items-center gap-8 text-center">
                <div class="flex items-center gap-3">
                    <span class="w-10 h-10 bg-amber-400 rounded-lg flex items-center justify-center text-neutral-950 font-bold">"LC"</span>
                    <span class="text-2xl font-bold tracking-tighter">"LUXECUT"</span>
                </div>

                <div class="flex gap-8">
                    {SocialNetwork::all().iter().copied().map(|network| view! {
                        <a
                            href=move || ctx.with_store(|store| network.link(store.social_links()).to_string())
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-500 hover:text-amber-400 text-xs uppercase tracking-widest"
                        >
                            {network.name()}
                        </a>
                    }).collect_view()}
                </div>

                <p class="text-gray-600 text-xs uppercase tracking-widest">"© 2024 LUXECUT PREMIUM GROOMING SPA"</p>
                <A href=SiteRoute::Admin.path() class="text-[10px] text-gray-800 hover:text-amber-400">"PORTAL"</A>
            </div>
        </footer>
    }
}
