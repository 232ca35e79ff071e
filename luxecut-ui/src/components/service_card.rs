//! Service Card Component
//!
//! One catalog entry on the home page. The price follows the current
//! language; the details button opens the booking modal on this service.

use leptos::*;

use luxecut::catalog::{format_price, CategoryFilter, Service};

use crate::state::use_app;

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let ctx = use_app();
    let service = store_value(service);

    let title = move || service.with_value(|s| s.title.get(ctx.lang.get()).to_string());
    let description = move || service.with_value(|s| s.description.get(ctx.lang.get()).to_string());
    let price = move || service.with_value(|s| format_price(s.price, ctx.lang.get()));
    let open = move |_| ctx.open_booking(Some(service.with_value(|s| s.id.clone())));

    view! {
        <div class="group bg-neutral-900 border border-white/5 rounded-sm overflow-hidden hover:border-amber-400/30 transition-colors">
            <div class="relative h-64 overflow-hidden">
                <img
                    src=service.with_value(|s| s.image_url.clone())
                    alt=title
                    class="w-full h-full object-cover grayscale group-hover:grayscale-0 transition-all duration-700"
                />
                <span class="absolute top-4 left-4 bg-neutral-950/80 text-amber-400 text-[10px] uppercase font-bold tracking-widest px-3 py-1">
                    {move || {
                        let category = service.with_value(|s| s.category);
                        ctx.with_strings(|t| t.services.filter_label(CategoryFilter::Only(category)).to_string())
                    }}
                </span>
            </div>

            <div class="p-8 space-y-4">
                <div class="flex items-start justify-between gap-4">
                    <h3 class="text-2xl font-bold text-stone-100">{title}</h3>
                    <span class="text-xs text-gray-500 whitespace-nowrap">
                        {move || {
                            let minutes = service.with_value(|s| s.duration);
                            ctx.with_strings(|t| format!("{} {}", minutes, t.services.mins))
                        }}
                    </span>
                </div>
                <p class="text-gray-400 text-sm leading-relaxed">{description}</p>

                <div class="flex items-end justify-between pt-4 border-t border-white/5">
                    <div>
                        <span class="block text-[10px] uppercase tracking-widest text-gray-500">
                            {move || ctx.with_strings(|t| t.services.starting_at.clone())}
                        </span>
                        <span class="text-xl font-bold text-amber-400">{price}</span>
                    </div>
                    <button
                        on:click=open
                        class="text-[11px] font-bold uppercase tracking-widest text-stone-100 border-b border-amber-400 pb-1 hover:text-amber-400"
                    >
                        {move || ctx.with_strings(|t| t.services.details.clone())}
                    </button>
                </div>
            </div>
        </div>
    }
}
