//! Admin Page
//!
//! Overview totals, the bookings table, service CRUD and the content
//! editors. Anyone who knows the URL can use it.

use chrono::Utc;
use leptos::*;

use luxecut::admin::{
    booking_rows, delete_service, parse_duration, parse_price, save_service, AdminTab,
    DashboardStats, ServiceForm, SocialLinksEditor, SocialNetwork, TranslationEditor,
};
use luxecut::catalog::{format_price, Category, Language, Service};
use luxecut::i18n::{AdminLabelStrings, ContentField};

use crate::state::{use_app, AppContext};

/// Admin dashboard page
#[component]
pub fn Admin() -> impl IntoView {
    let ctx = use_app();
    let (tab, set_tab) = create_signal(AdminTab::default());

    view! {
        <main class="min-h-screen bg-neutral-950 pt-32 pb-20">
            <div class="container mx-auto px-6">
                <h1 class="text-4xl font-bold text-stone-100 mb-10">
                    {move || ctx.with_strings(|t| t.admin.title.clone())}
                </h1>

                <div class="flex flex-wrap gap-2 mb-10 border-b border-white/5 pb-4">
                    {AdminTab::all().iter().copied().map(|target| view! {
                        <button
                            on:click=move |_| set_tab.set(target)
                            class=move || {
                                let base = "px-5 py-2 text-xs font-bold uppercase tracking-widest rounded-sm transition-colors";
                                if tab.get() == target {
                                    format!("{} bg-amber-400 text-neutral-950", base)
                                } else {
                                    format!("{} text-gray-500 hover:text-stone-100", base)
                                }
                            }
                        >
                            {move || ctx.with_strings(|t| target.label(&t.admin).to_string())}
                        </button>
                    }).collect_view()}
                </div>

                {move || match tab.get() {
                    AdminTab::Overview => view! { <OverviewTab /> }.into_view(),
                    AdminTab::Bookings => view! { <BookingsTab /> }.into_view(),
                    AdminTab::Services => view! { <ServicesTab /> }.into_view(),
                    AdminTab::Content => view! { <ContentTab /> }.into_view(),
                }}
            </div>
        </main>
    }
}

// ============================================
// Overview
// ============================================

#[component]
fn OverviewTab() -> impl IntoView {
    let ctx = use_app();
    let stats = move || ctx.with_store(DashboardStats::compute);

    view! {
        <div class="grid md:grid-cols-3 gap-6">
            <StatCard
                label=move || ctx.with_strings(|t| t.admin.stats.revenue.clone())
                value=move || stats().revenue_display()
            />
            <StatCard
                label=move || ctx.with_strings(|t| t.admin.stats.total_bookings.clone())
                value=move || stats().total_bookings.to_string()
            />
            <StatCard
                label=move || ctx.with_strings(|t| t.admin.stats.active_services.clone())
                value=move || stats().active_services.to_string()
            />
        </div>
    }
}

#[component]
fn StatCard<L, V>(label: L, value: V) -> impl IntoView
where
    L: Fn() -> String + 'static,
    V: Fn() -> String + 'static,
{
    view! {
        <div class="bg-neutral-900 border border-white/5 rounded-sm p-8">
            <span class="block text-[10px] uppercase tracking-widest text-gray-500 mb-3">{label}</span>
            <span class="text-3xl font-bold text-amber-400">{value}</span>
        </div>
    }
}

// ============================================
// Bookings
// ============================================

#[component]
fn BookingsTab() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="overflow-x-auto bg-neutral-900 border border-white/5 rounded-sm">
            <table class="w-full text-sm text-left">
                <thead class="text-[10px] uppercase tracking-widest text-gray-500 border-b border-white/5">
                    <tr>
                        <th class="px-6 py-4">"Customer"</th>
                        <th class="px-6 py-4">"Service"</th>
                        <th class="px-6 py-4">"Date | Time"</th>
                        <th class="px-6 py-4 text-right">"Price"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let lang = ctx.lang.get();
                        ctx.with_store(|store| booking_rows(store, lang))
                            .into_iter()
                            .map(|row| view! {
                                <tr class="border-b border-white/5 text-stone-100">
                                    <td class="px-6 py-4">
                                        <span class="block font-bold">{row.customer_name}</span>
                                        <span class="text-xs text-gray-500">{row.customer_phone}</span>
                                    </td>
                                    <td class="px-6 py-4">{row.service_title}</td>
                                    <td class="px-6 py-4 text-gray-400">{row.when}</td>
                                    <td class="px-6 py-4 text-right text-amber-400 font-bold">{row.price}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

// ============================================
// Services
// ============================================

/// Which service the form modal is editing
#[derive(Debug, Clone, PartialEq)]
enum FormTarget {
    Closed,
    New,
    Edit(String),
}

impl FormTarget {
    fn editing_id(&self) -> Option<&str> {
        match self {
            FormTarget::Edit(id) => Some(id),
            _ => None,
        }
    }
}

#[component]
fn ServicesTab() -> impl IntoView {
    let ctx = use_app();
    let target = create_rw_signal(FormTarget::Closed);
    let form = create_rw_signal(ServiceForm::new());

    let add = move |_| {
        form.set(ServiceForm::new());
        target.set(FormTarget::New);
    };

    view! {
        <div class="space-y-6">
            <button
                on:click=add
                class="px-6 py-3 bg-amber-400 text-neutral-950 font-bold text-xs tracking-widest"
            >
                {move || ctx.with_strings(|t| format!("+ {}", t.admin.add_service))}
            </button>

            <div class="grid gap-4">
                {move || ctx.with_store(|store| store.services().to_vec())
                    .into_iter()
                    .map(|service| view! { <ServiceRow service=service target=target form=form /> })
                    .collect_view()}
            </div>

            {move || (target.get() != FormTarget::Closed).then(|| view! {
                <ServiceFormModal target=target form=form />
            })}
        </div>
    }
}

#[component]
fn ServiceRow(
    service: Service,
    target: RwSignal<FormTarget>,
    form: RwSignal<ServiceForm>,
) -> impl IntoView {
    let ctx = use_app();
    let service = store_value(service);

    let edit = move |_| {
        service.with_value(|s| {
            form.set(ServiceForm::from_service(s));
            target.set(FormTarget::Edit(s.id.clone()));
        });
    };
    let remove = move |_| {
        let id = service.with_value(|s| s.id.clone());
        delete_with_prompt(ctx, &id);
    };

    view! {
        <div class="flex items-center gap-6 bg-neutral-900 border border-white/5 rounded-sm p-4">
            <img src=service.with_value(|s| s.image_url.clone()) class="w-16 h-16 object-cover rounded-sm" />
            <div class="flex-1">
                <span class="block text-stone-100 font-bold">
                    {move || service.with_value(|s| s.title.get(ctx.lang.get()).to_string())}
                </span>
                <span class="text-xs text-gray-500">
                    {move || {
                        let mins = ctx.with_strings(|t| t.services.mins.clone());
                        service.with_value(|s| {
                            format!("{} · {} · {} {}", s.category, format_price(s.price, Language::Vi), s.duration, mins)
                        })
                    }}
                </span>
            </div>
            <button on:click=edit class="px-4 py-2 text-xs font-bold text-amber-400 hover:text-stone-100">
                {move || ctx.with_strings(|t| t.admin.edit.clone())}
            </button>
            <button on:click=remove class="px-4 py-2 text-xs font-bold text-red-400 hover:text-red-300">
                {move || ctx.with_strings(|t| t.admin.delete.clone())}
            </button>
        </div>
    }
}

/// Delete after the browser's confirmation prompt
fn delete_with_prompt(ctx: AppContext, id: &str) {
    let lang = ctx.lang.get_untracked();
    let (question, deleted) =
        ctx.with_strings(|t| (t.admin.confirm_delete.clone(), t.admin.service_deleted.clone()));
    let confirm = |service: &Service| {
        let message = delete_prompt(&question, service, lang);
        web_sys::window()
            .and_then(|w| w.confirm_with_message(&message).ok())
            .unwrap_or(false)
    };

    match ctx.write_store(|store| delete_service(store, id, confirm)) {
        Some(Ok(true)) => ctx.show_success(&deleted),
        Some(Err(e)) => ctx.show_error(&e.to_string()),
        Some(Ok(false)) | None => {}
    }
}

#[component]
fn ServiceFormModal(target: RwSignal<FormTarget>, form: RwSignal<ServiceForm>) -> impl IntoView {
    let ctx = use_app();
    let labels = move || ctx.with_strings(|t| t.admin.labels.clone());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let editing = target.get_untracked();
        let draft = form.get_untracked();

        match ctx.write_store(|store| save_service(store, editing.editing_id(), draft, Utc::now())) {
            Some(Ok(_)) => {
                target.set(FormTarget::Closed);
                ctx.show_success(&ctx.with_strings(|t| t.admin.service_saved.clone()));
            }
            Some(Err(e)) => ctx.show_error(&e.to_string()),
            None => {}
        }
    };

    let on_price = move |ev: ev::Event| match parse_price(&event_target_value(&ev)) {
        Ok(price) => form.update(|f| f.price = price),
        Err(e) => ctx.show_error(&e.to_string()),
    };
    let on_duration = move |ev: ev::Event| match parse_duration(&event_target_value(&ev)) {
        Ok(duration) => form.update(|f| f.duration = duration),
        Err(e) => ctx.show_error(&e.to_string()),
    };
    let on_category = move |ev: ev::Event| {
        if let Ok(category) = event_target_value(&ev).parse::<Category>() {
            form.update(|f| f.category = category);
        }
    };

    view! {
        <div class="fixed inset-0 z-[150] flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-neutral-950/90" on:click=move |_| target.set(FormTarget::Closed) />
            <form
                on:submit=on_submit
                class="relative w-full max-w-2xl bg-neutral-900 border border-white/10 rounded-sm p-8 space-y-5 max-h-[90vh] overflow-y-auto"
            >
                <div class="grid md:grid-cols-2 gap-4">
                    <Field label=move || labels().title_vi>
                        <input
                            type="text"
                            required
                            prop:value=move || form.with(|f| f.title.vi.clone())
                            on:input=move |ev| form.update(|f| f.title.vi = event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </Field>
                    <Field label=move || labels().title_en>
                        <input
                            type="text"
                            required
                            prop:value=move || form.with(|f| f.title.en.clone())
                            on:input=move |ev| form.update(|f| f.title.en = event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </Field>
                </div>

                <div class="grid md:grid-cols-2 gap-4">
                    <Field label=move || labels().description_vi>
                        <textarea
                            rows="3"
                            prop:value=move || form.with(|f| f.description.vi.clone())
                            on:input=move |ev| form.update(|f| f.description.vi = event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </Field>
                    <Field label=move || labels().description_en>
                        <textarea
                            rows="3"
                            prop:value=move || form.with(|f| f.description.en.clone())
                            on:input=move |ev| form.update(|f| f.description.en = event_target_value(&ev))
                            class=INPUT_CLASS
                        />
                    </Field>
                </div>

                <div class="grid md:grid-cols-3 gap-4">
                    <Field label=move || labels().price>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || form.with(|f| f.price.to_string())
                            on:change=on_price
                            class=INPUT_CLASS
                        />
                    </Field>
                    <Field label=move || labels().duration>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || form.with(|f| f.duration.to_string())
                            on:change=on_duration
                            class=INPUT_CLASS
                        />
                    </Field>
                    <Field label=move || labels().category>
                        <select
                            prop:value=move || form.with(|f| f.category.to_string())
                            on:change=on_category
                            class=INPUT_CLASS
                        >
                            {Category::all().iter().map(|category| view! {
                                <option value=category.to_string()>{category.to_string()}</option>
                            }).collect_view()}
                        </select>
                    </Field>
                </div>

                <Field label=move || labels().image_url>
                    <input
                        type="url"
                        prop:value=move || form.with(|f| f.image_url.clone())
                        on:input=move |ev| form.update(|f| f.image_url = event_target_value(&ev))
                        class=INPUT_CLASS
                    />
                </Field>

                <div class="flex justify-end gap-3 pt-4">
                    <button
                        type="button"
                        on:click=move |_| target.set(FormTarget::Closed)
                        class="px-6 py-3 text-xs font-bold text-gray-400 hover:text-stone-100"
                    >
                        {move || ctx.with_strings(|t| t.admin.cancel.clone())}
                    </button>
                    <button type="submit" class="px-6 py-3 bg-amber-400 text-neutral-950 font-bold text-xs tracking-widest">
                        {move || ctx.with_strings(|t| t.admin.save.clone())}
                    </button>
                </div>
            </form>
        </div>
    }
}

const INPUT_CLASS: &str = "w-full bg-neutral-950 border border-white/10 rounded-sm px-4 py-3 text-stone-100 focus:border-amber-400 focus:outline-none";

#[component]
fn Field<L>(label: L, children: Children) -> impl IntoView
where
    L: Fn() -> String + 'static,
{
    view! {
        <label class="block">
            <span class="block text-[10px] uppercase tracking-widest text-gray-500 mb-2">{label}</span>
            {children()}
        </label>
    }
}

// ============================================
// Content
// ============================================

#[component]
fn ContentTab() -> impl IntoView {
    let ctx = use_app();
    let translations = create_rw_signal(ctx.with_store_untracked(TranslationEditor::load));
    let social = create_rw_signal(ctx.with_store_untracked(SocialLinksEditor::load));

    let save = move |_| {
        let mut t_editor = translations.get_untracked();
        let mut s_editor = social.get_untracked();
        let outcome = ctx.write_store(|store| {
            t_editor.save(store)?;
            s_editor.save(store)
        });
        match outcome {
            Some(Ok(())) => {
                translations.set(t_editor);
                social.set(s_editor);
                ctx.show_success(&ctx.with_strings(|t| t.admin.content_saved.clone()));
            }
            Some(Err(e)) => ctx.show_error(&e.to_string()),
            None => {}
        }
    };
    let discard = move |_| {
        translations.update(|e| e.discard());
        social.update(|e| e.discard());
    };
    let dirty = move || translations.with(|e| e.is_dirty()) || social.with(|e| e.is_dirty());

    view! {
        <div class="space-y-10">
            {Language::all().iter().copied().map(|lang| view! {
                <section class="bg-neutral-900 border border-white/5 rounded-sm p-8 space-y-5">
                    <h2 class="text-lg font-bold text-amber-400 uppercase tracking-widest">{lang.code()}</h2>
                    {ContentField::ALL.into_iter().map(|field| view! {
                        <Field label=move || format!("{} · {}", field.section(), field.key())>
                            <input
                                type="text"
                                prop:value=move || translations.with(|e| e.get(lang, field).to_string())
                                on:input=move |ev| translations.update(|e| e.set(lang, field, event_target_value(&ev)))
                                class=INPUT_CLASS
                            />
                        </Field>
                    }).collect_view()}
                </section>
            }).collect_view()}

            <section class="bg-neutral-900 border border-white/5 rounded-sm p-8 space-y-5">
                {SocialNetwork::all().iter().copied().map(|network| view! {
                    <Field label=move || ctx.with_strings(|t| social_label(&t.admin.labels, network).to_string())>
                        <input
                            type="url"
                            prop:value=move || social.with(|e| e.get(network).to_string())
                            on:input=move |ev| social.update(|e| e.set(network, event_target_value(&ev)))
                            class=INPUT_CLASS
                        />
                    </Field>
                }).collect_view()}
            </section>

            <div class="flex justify-end gap-3">
                <button
                    on:click=discard
                    disabled=move || !dirty()
                    class="px-6 py-3 text-xs font-bold text-gray-400 hover:text-stone-100 disabled:opacity-30"
                >
                    {move || ctx.with_strings(|t| t.admin.discard.clone())}
                </button>
                <button
                    on:click=save
                    disabled=move || !dirty()
                    class="px-8 py-3 bg-amber-400 text-neutral-950 font-bold text-xs tracking-widest disabled:opacity-30"
                >
                    {move || ctx.with_strings(|t| t.admin.save.clone())}
                </button>
            </div>
        </div>
    }
}

/// Localized question followed by the service title in the same language
fn delete_prompt(question: &str, service: &Service, lang: Language) -> String {
    format!("{} ({})", question, service.title.get(lang))
}

fn social_label(labels: &AdminLabelStrings, network: SocialNetwork) -> &str {
    match network {
        SocialNetwork::Facebook => &labels.facebook,
        SocialNetwork::Instagram => &labels.instagram,
        SocialNetwork::Twitter => &labels.twitter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxecut::i18n::Translations;

    #[test]
    fn test_form_target_editing_id() {
        assert_eq!(FormTarget::New.editing_id(), None);
        assert_eq!(FormTarget::Closed.editing_id(), None);
        assert_eq!(FormTarget::Edit("3".to_string()).editing_id(), Some("3"));
    }

    #[test]
    fn test_delete_prompt_follows_language() {
        let translations = Translations::default();
        let service = luxecut::catalog::default_services().remove(0);

        let vi = delete_prompt(&translations.vi.admin.confirm_delete, &service, Language::Vi);
        let en = delete_prompt(&translations.en.admin.confirm_delete, &service, Language::En);

        assert_eq!(vi, "Xóa dịch vụ này? (Cắt Tóc Signature)");
        assert_eq!(en, "Delete this service? (Signature Cut)");
    }

    #[test]
    fn test_social_labels() {
        let translations = Translations::default();
        let labels = &translations.en.admin.labels;
        assert_eq!(social_label(labels, SocialNetwork::Instagram), labels.instagram);
    }
}
