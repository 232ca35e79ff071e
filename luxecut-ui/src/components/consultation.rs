//! Consultation Component
//!
//! Description and optional photo in, structured grooming advice out.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use luxecut::concierge::{ConciergeError, Consultant, ConsultationSession, InlineImage};

use crate::components::InlineLoading;
use crate::state::use_app;

/// AI consultation panel
#[component]
pub fn Consultation() -> impl IntoView {
    let ctx = use_app();
    let session = create_rw_signal(ConsultationSession::new());

    let consult = move |_| {
        let Some(input) = session.try_update(|s| s.begin()).flatten() else {
            return;
        };
        let lang = ctx.lang.get_untracked();
        let fallback = ctx.with_strings(|t| t.consultation.error.clone());
        let client = ctx.concierge();

        spawn_local(async move {
            let outcome = match client {
                Some(client) => {
                    Consultant::new(client)
                        .consult(&input.description, lang, input.image)
                        .await
                }
                None => Err(ConciergeError::MissingApiKey),
            };
            session.update(|s| s.finish(outcome, &fallback));
        });
    };

    view! {
        <section class="py-32 bg-neutral-900">
            <div class="container mx-auto px-6">
                <div class="text-center max-w-2xl mx-auto mb-16">
                    <span class="text-amber-400 tracking-widest text-sm uppercase mb-2 block">
                        {move || ctx.with_strings(|t| t.consultation.badge.clone())}
                    </span>
                    <h2 class="text-4xl md:text-5xl font-bold text-stone-100 mb-4">
                        {move || ctx.with_strings(|t| t.consultation.title.clone())}
                    </h2>
                    <p class="text-gray-400">
                        {move || ctx.with_strings(|t| t.consultation.subtitle.clone())}
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    // Inputs
                    <div class="space-y-6">
                        <div>
                            <label class="block text-sm font-medium text-stone-100 mb-2">
                                {move || ctx.with_strings(|t| t.consultation.label_desc.clone())}
                            </label>
                            <textarea
                                rows="5"
                                prop:value=move || session.with(|s| s.description().to_string())
                                on:input=move |ev| session.update(|s| s.set_description(event_target_value(&ev)))
                                placeholder=move || ctx.with_strings(|t| t.consultation.placeholder_desc.clone())
                                class="w-full bg-neutral-950 border border-white/10 rounded-sm p-4 text-stone-100 focus:border-amber-400 focus:outline-none"
                            />
                        </div>

                        <PhotoPicker session=session />

                        <button
                            on:click=consult
                            disabled=move || session.with(|s| s.is_loading())
                            class="w-full py-4 bg-amber-400 text-neutral-950 font-bold tracking-widest disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            {move || if session.with(|s| s.is_loading()) {
                                view! {
                                    <InlineLoading label=ctx.with_strings(|t| t.consultation.analyzing.clone()) />
                                }.into_view()
                            } else {
                                ctx.with_strings(|t| t.consultation.submit_btn.clone()).into_view()
                            }}
                        </button>

                        {move || session.with(|s| s.error().map(str::to_string)).map(|message| view! {
                            <p class="text-red-400 text-sm">{message}</p>
                        })}
                    </div>

                    // Outcome
                    <ConsultationOutcome session=session />
                </div>
            </div>
        </section>
    }
}

/// Photo upload with preview and remove button
#[component]
fn PhotoPicker(session: RwSignal<ConsultationSession>) -> impl IntoView {
    let ctx = use_app();

    let photo_error = move || ctx.with_strings(|t| t.consultation.photo_error.clone());

    let on_file = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Ok(reader) = web_sys::FileReader::new() else {
            ctx.show_error(&photo_error());
            return;
        };

        let onload = {
            let reader = reader.clone();
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                let data_url = reader.result().ok().and_then(|result| result.as_string());
                match data_url.map(|url| InlineImage::from_data_url(&url)) {
                    Some(Ok(image)) => session.update(|s| s.set_image(Some(image))),
                    Some(Err(_)) | None => ctx.show_error(&photo_error()),
                }
            }) as Box<dyn FnMut(_)>)
        };

        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let _ = reader.read_as_data_url(&file);
    };

    view! {
        {move || match session.with(|s| s.image().map(InlineImage::to_data_url)) {
            Some(preview) => view! {
                <div class="relative w-40 h-40 group">
                    <img src=preview class="w-full h-full object-cover rounded-sm" />
                    <button
                        on:click=move |_| session.update(|s| s.set_image(None))
                        class="absolute inset-0 bg-neutral-950/70 opacity-0 group-hover:opacity-100 text-stone-100 text-xs"
                    >
                        {ctx.with_strings(|t| t.consultation.remove_btn.clone())}
                    </button>
                </div>
            }.into_view(),
            None => view! {
                <label class="flex items-center justify-center w-full h-32 border border-dashed border-white/10 rounded-sm cursor-pointer hover:border-amber-400/50 text-gray-500 hover:text-gray-300">
                    <input type="file" accept="image/*" class="hidden" on:change=on_file />
                    {ctx.with_strings(|t| t.consultation.upload_btn.clone())}
                </label>
            }.into_view(),
        }}
    }
}

#[component]
fn ConsultationOutcome(session: RwSignal<ConsultationSession>) -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="bg-neutral-950 border border-white/5 rounded-sm p-10 min-h-[400px]">
            {move || match session.with(|s| s.result().cloned()) {
                Some(result) => view! {
                    <div class="space-y-8">
                        <div>
                            <h3 class="text-2xl font-bold text-amber-400 mb-4">
                                {ctx.with_strings(|t| t.consultation.verdict.clone())}
                            </h3>
                            <p class="text-stone-100 italic leading-relaxed">
                                {format!("\"{}\"", result.recommendation)}
                            </p>
                        </div>

                        <OutcomeList
                            heading=ctx.with_strings(|t| t.consultation.suggested.clone())
                            items=result.suggested_services
                        />
                        <OutcomeList
                            heading=ctx.with_strings(|t| t.consultation.tips.clone())
                            items=result.style_tips
                        />

                        <button
                            on:click=move |_| ctx.open_booking(None)
                            class="w-full py-4 border border-amber-400 text-amber-400 font-bold tracking-widest hover:bg-amber-400 hover:text-neutral-950"
                        >
                            {ctx.with_strings(|t| format!("{} →", t.consultation.book_regimen))}
                        </button>
                    </div>
                }.into_view(),
                None => view! {
                    <div class="h-full flex flex-col items-center justify-center text-center py-16">
                        <h3 class="text-xl font-medium text-gray-500 mb-2">
                            {ctx.with_strings(|t| t.consultation.awaiting_title.clone())}
                        </h3>
                        <p class="text-gray-600 text-sm max-w-xs">
                            {ctx.with_strings(|t| t.consultation.awaiting_desc.clone())}
                        </p>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn OutcomeList(heading: String, items: Vec<String>) -> impl IntoView {
    view! {
        {(!items.is_empty()).then(|| view! {
            <div>
                <h4 class="text-sm font-bold tracking-widest text-amber-400 mb-3 uppercase">{heading}</h4>
                <ul class="space-y-2">
                    {items.into_iter().map(|item| view! {
                        <li class="text-gray-300 text-sm">{format!("• {}", item)}</li>
                    }).collect_view()}
                </ul>
            </div>
        })}
    }
}
