//! Home Page
//!
//! Hero, the filtered service catalog, the AI consultation and the about
//! section, stacked as anchor targets for the nav bar.

use leptos::*;

use luxecut::catalog::{CategoryFilter, Language};

use crate::components::{Consultation, ServiceCard};
use crate::state::use_app;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main>
            <Hero />
            <Services />
            <div id="consultation" class="scroll-mt-24">
                <Consultation />
            </div>
            <About />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let ctx = use_app();

    view! {
        <section class="relative min-h-screen flex items-center bg-neutral-950 overflow-hidden">
            <div class="absolute inset-0 bg-[url('https://images.unsplash.com/photo-1503951914875-452162b0f3f1?q=80&w=2070')] bg-cover bg-center opacity-20" />
            <div class="relative container mx-auto px-6 pt-32">
                <span class="inline-block text-amber-400 border border-amber-400/30 px-4 py-1 rounded-full text-[10px] uppercase tracking-[0.3em] mb-8">
                    {move || ctx.with_strings(|t| t.hero.badge.clone())}
                </span>
                <h1 class="text-6xl md:text-8xl font-bold text-stone-100 leading-none mb-8">
                    {move || ctx.with_strings(|t| t.hero.title_main.clone())}
                    <br />
                    <span class="italic text-amber-400">
                        {move || ctx.with_strings(|t| t.hero.title_italic.clone())}
                    </span>
                </h1>
                <p class="text-gray-400 text-lg max-w-xl mb-12">
                    {move || ctx.with_strings(|t| t.hero.subtitle.clone())}
                </p>
                <div class="flex flex-wrap gap-4">
                    <button
                        on:click=move |_| ctx.open_booking(None)
                        class="px-10 py-5 bg-amber-400 text-neutral-950 font-bold text-xs tracking-widest hover:bg-amber-300"
                    >
                        {move || ctx.with_strings(|t| t.hero.btn_book.clone())}
                    </button>
                    <a
                        href="#services"
                        class="px-10 py-5 border border-white/20 text-stone-100 font-bold text-xs tracking-widest hover:border-amber-400"
                    >
                        {move || ctx.with_strings(|t| t.hero.btn_services.clone())}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    let ctx = use_app();
    let (filter, set_filter) = create_signal(CategoryFilter::All);

    view! {
        <section id="services" class="py-32 bg-neutral-900 scroll-mt-24">
            <div class="container mx-auto px-6">
                <div class="flex flex-col lg:flex-row lg:items-end justify-between mb-20 gap-8">
                    <div class="max-w-xl">
                        <span class="text-amber-400 tracking-widest text-xs uppercase block mb-4">
                            {move || ctx.with_strings(|t| t.services.badge.clone())}
                        </span>
                        <h2 class="text-5xl md:text-7xl font-bold text-stone-100 leading-none mb-6">
                            {move || ctx.with_strings(|t| t.services.title.clone())}
                        </h2>
                        <p class="text-gray-400 text-lg leading-relaxed">
                            {move || ctx.with_strings(|t| t.services.subtitle.clone())}
                        </p>
                    </div>

                    // Category chips
                    <div class="flex flex-wrap gap-2">
                        {CategoryFilter::all().into_iter().map(|chip| view! {
                            <button
                                on:click=move |_| set_filter.set(chip)
                                class=move || {
                                    let base = "px-6 py-2 rounded-full text-xs font-bold uppercase transition-all border";
                                    if filter.get() == chip {
                                        format!("{} bg-amber-400 border-amber-400 text-neutral-950", base)
                                    } else {
                                        format!("{} border-white/10 text-gray-500 hover:border-amber-400/50", base)
                                    }
                                }
                            >
                                {move || ctx.with_strings(|t| t.services.filter_label(chip).to_string())}
                            </button>
                        }).collect_view()}
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-10">
                    {move || {
                        let chip = filter.get();
                        ctx.with_store(|store| {
                            chip.apply(store.services())
                                .into_iter()
                                .cloned()
                                .collect::<Vec<_>>()
                        })
                        .into_iter()
                        .map(|service| view! { <ServiceCard service=service /> })
                        .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let ctx = use_app();

    view! {
        <section id="about" class="py-32 bg-neutral-950 scroll-mt-24">
            <div class="container mx-auto px-6 text-center">
                {move || {
                    let (badge, title, body) = about_copy(ctx.lang.get());
                    view! {
                        <span class="text-amber-400 tracking-widest text-xs uppercase block mb-4">{badge}</span>
                        <h2 class="text-5xl font-bold text-stone-100 mb-8">{title}</h2>
                        <p class="max-w-2xl mx-auto text-gray-400 leading-relaxed">{body}</p>
                    }
                }}
            </div>
        </section>
    }
}

/// The about section is not part of the editable copy
fn about_copy(lang: Language) -> (&'static str, &'static str, &'static str) {
    match lang {
        Language::Vi => (
            "Lịch sử",
            "Nghệ Thuật Kéo & Lưỡi Dao",
            "Từ năm 2010, LuxeCut đã là điểm đến của những quý ông tìm kiếm sự hoàn hảo. \
             Chúng tôi không chỉ cắt tóc, chúng tôi kiến tạo phong cách và sự tự tin.",
        ),
        Language::En => (
            "Heritage",
            "The Art of Scissors & Blade",
            "Since 2010, LuxeCut has been the destination for gentlemen who expect perfection. \
             We don't just cut hair; we craft style and confidence.",
        ),
    }
}
