//! Booking Modal Component
//!
//! Renders the booking wizard held in the app context: a sidebar with the
//! step list and running summary, and one panel per step.

use leptos::*;

use luxecut::booking::{
    earliest_bookable_date, time_slots, BookingWizard, TimeSlot, WizardResult, WizardStep,
};
use luxecut::catalog::{default_barbers, format_price, Barber, Service};

use crate::state::{use_app, AppContext};

/// Booking modal, shown while the wizard is open
#[component]
pub fn BookingModal() -> impl IntoView {
    let ctx = use_app();
    let is_open = move || ctx.wizard.with(|w| w.is_open());

    view! {
        {move || is_open().then(|| view! {
            <div class="fixed inset-0 z-[150] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-neutral-950/90 backdrop-blur-sm" on:click=move |_| ctx.close_booking() />

                <div class="relative w-full max-w-5xl bg-neutral-900 border border-white/10 rounded-sm overflow-hidden flex flex-col md:flex-row max-h-[90vh]">
                    <Sidebar />

                    <div class="flex-1 p-8 md:p-12 overflow-y-auto">
                        <button
                            on:click=move |_| ctx.close_booking()
                            class="absolute top-6 right-6 text-gray-500 hover:text-stone-100 text-xl"
                        >
                            "✕"
                        </button>

                        {move || match ctx.wizard.with(|w| w.step()) {
                            WizardStep::SelectingService => view! { <ServiceStep /> }.into_view(),
                            WizardStep::SelectingBarber => view! { <BarberStep /> }.into_view(),
                            WizardStep::SelectingDateTime => view! { <DateTimeStep /> }.into_view(),
                            WizardStep::EnteringCustomerInfo => view! { <CustomerStep /> }.into_view(),
                            WizardStep::Success => view! { <SuccessStep /> }.into_view(),
                        }}

                        <BackButton />
                    </div>
                </div>
            </div>
        })}
    }
}

/// Apply a wizard transition, reporting a rejected one as a toast
fn update_wizard<T>(ctx: AppContext, f: impl FnOnce(&mut BookingWizard) -> WizardResult<T>) {
    if let Some(Err(e)) = ctx.wizard.try_update(f) {
        ctx.show_error(&e.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepState {
    Done,
    Active,
    Pending,
}

fn step_state(current: WizardStep, step: WizardStep) -> StepState {
    if current == WizardStep::Success || current.number() > step.number() {
        StepState::Done
    } else if current.number() == step.number() {
        StepState::Active
    } else {
        StepState::Pending
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let ctx = use_app();

    view! {
        <aside class="md:w-80 bg-neutral-950 p-8 md:p-10 border-b md:border-b-0 md:border-r border-white/5">
            <h2 class="text-3xl font-bold text-stone-100 mb-2">
                {move || ctx.with_strings(|t| t.booking.title.clone())}
            </h2>
            <p class="text-gray-500 text-sm mb-10">
                {move || ctx.with_strings(|t| t.booking.subtitle.clone())}
            </p>

            <ol class="space-y-6">
                {WizardStep::NUMBERED.into_iter().map(|step| view! {
                    <li class="flex items-center gap-4">
                        {move || {
                            let state = step_state(ctx.wizard.with(|w| w.step()), step);
                            let class = match state {
                                StepState::Done => "bg-amber-400 text-neutral-950",
                                StepState::Active => "border-2 border-amber-400 text-amber-400",
                                StepState::Pending => "border border-white/10 text-gray-600",
                            };
                            view! {
                                <span class=format!("w-8 h-8 rounded-full flex items-center justify-center text-xs font-bold {}", class)>
                                    {if state == StepState::Done { "✓".to_string() } else { step.number().to_string() }}
                                </span>
                            }
                        }}
                        <span class="text-xs uppercase tracking-widest text-gray-400">
                            {move || ctx.with_strings(|t| t.booking.step_label(step).to_string())}
                        </span>
                    </li>
                }).collect_view()}
            </ol>

            {move || {
                let lang = ctx.lang.get();
                ctx.wizard.with(|w| w.summary(lang)).map(|summary| view! {
                    <div class="mt-12 pt-8 border-t border-white/5 space-y-2">
                        <span class="block text-[10px] uppercase tracking-widest text-gray-500">
                            {ctx.with_strings(|t| t.booking.summary.clone())}
                        </span>
                        <p class="text-stone-100 font-bold">{summary.service_title}</p>
                        <div class="flex justify-between text-sm">
                            <span class="text-gray-500">{ctx.with_strings(|t| t.booking.total.clone())}</span>
                            <span class="text-amber-400 font-bold">{summary.price}</span>
                        </div>
                    </div>
                })
            }}
        </aside>
    }
}

#[component]
fn ServiceStep() -> impl IntoView {
    let ctx = use_app();

    view! {
        <StepHeading text=move || ctx.with_strings(|t| t.booking.select_service.clone()) />
        <div class="grid sm:grid-cols-2 gap-4">
            {move || ctx.with_store(|s| s.services().to_vec())
                .into_iter()
                .map(|service| view! { <ServiceOption service=service /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ServiceOption(service: Service) -> impl IntoView {
    let ctx = use_app();
    let service = store_value(service);

    view! {
        <button
            on:click=move |_| update_wizard(ctx, |w| w.select_service(service.get_value()))
            class="text-left p-6 bg-neutral-950 border border-white/5 hover:border-amber-400/50 rounded-sm transition-colors"
        >
            <span class="block text-stone-100 font-bold mb-1">
                {move || service.with_value(|s| s.title.get(ctx.lang.get()).to_string())}
            </span>
            <span class="text-amber-400 text-sm">
                {move || service.with_value(|s| format_price(s.price, ctx.lang.get()))}
            </span>
        </button>
    }
}

#[component]
fn BarberStep() -> impl IntoView {
    let ctx = use_app();

    view! {
        <StepHeading text=move || ctx.with_strings(|t| t.booking.select_barber.clone()) />
        <div class="grid sm:grid-cols-3 gap-4">
            {default_barbers().into_iter().map(|barber| view! { <BarberOption barber=barber /> }).collect_view()}
        </div>
    }
}

#[component]
fn BarberOption(barber: Barber) -> impl IntoView {
    let ctx = use_app();
    let barber = store_value(barber);

    view! {
        <button
            on:click=move |_| update_wizard(ctx, |w| w.select_barber(barber.get_value()))
            class="group text-center p-4 bg-neutral-950 border border-white/5 hover:border-amber-400/50 rounded-sm"
        >
            <img
                src=barber.with_value(|b| b.image_url.clone())
                alt=barber.with_value(|b| b.name.clone())
                class="w-24 h-24 mx-auto rounded-full object-cover grayscale group-hover:grayscale-0 mb-4"
            />
            <span class="block text-stone-100 font-bold">{barber.with_value(|b| b.name.clone())}</span>
            <span class="block text-xs text-gray-500 mt-1">
                {move || barber.with_value(|b| b.specialty.get(ctx.lang.get()).to_string())}
            </span>
        </button>
    }
}

#[component]
fn DateTimeStep() -> impl IntoView {
    let ctx = use_app();
    let today = chrono::Local::now().date_naive();
    let selected_time = move || ctx.wizard.with(|w| w.selected_time());

    let on_date = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        if let Some(Err(_)) = ctx.wizard.try_update(|w| w.pick_date_input(&value, today)) {
            ctx.show_error(&ctx.with_strings(|t| t.booking.invalid_date.clone()));
        }
    };

    view! {
        <StepHeading text=move || ctx.with_strings(|t| t.booking.select_date_time.clone()) />

        <input
            type="date"
            min=earliest_bookable_date(today).to_string()
            prop:value=move || ctx.wizard.with(|w| w.selected_date().map(|d| d.to_string()).unwrap_or_default())
            on:change=on_date
            class="w-full bg-neutral-950 border border-white/10 rounded-sm px-4 py-3 text-stone-100 mb-8 focus:border-amber-400 focus:outline-none"
        />

        <div class="grid grid-cols-4 sm:grid-cols-6 gap-2 mb-10">
            {time_slots().into_iter().map(|slot: TimeSlot| view! {
                <button
                    on:click=move |_| update_wizard(ctx, |w| w.pick_time(slot))
                    class=move || {
                        let base = "py-2 text-xs font-bold rounded-sm border transition-colors";
                        if selected_time() == Some(slot) {
                            format!("{} bg-amber-400 border-amber-400 text-neutral-950", base)
                        } else {
                            format!("{} border-white/10 text-gray-400 hover:border-amber-400/50", base)
                        }
                    }
                >
                    {slot.to_string()}
                </button>
            }).collect_view()}
        </div>

        <button
            disabled=move || !ctx.wizard.with(|w| w.can_advance())
            on:click=move |_| update_wizard(ctx, |w| w.next())
            class="px-10 py-4 bg-amber-400 text-neutral-950 font-bold text-xs tracking-widest disabled:opacity-30 disabled:cursor-not-allowed"
        >
            {move || ctx.with_strings(|t| t.booking.next.clone())}
        </button>
    }
}

#[component]
fn CustomerStep() -> impl IntoView {
    let ctx = use_app();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(Err(e)) = ctx.submit_booking() {
            ctx.show_error(&e.to_string());
        }
    };

    view! {
        <StepHeading text=move || ctx.with_strings(|t| t.booking.customer_info.clone()) />

        <form on:submit=on_submit class="space-y-6 max-w-md">
            <div>
                <label class="block text-[10px] uppercase tracking-widest text-gray-500 mb-2">
                    {move || ctx.with_strings(|t| t.booking.full_name.clone())}
                </label>
                <input
                    type="text"
                    required
                    prop:value=move || ctx.wizard.with(|w| w.customer().name.clone())
                    on:input=move |ev| ctx.wizard.update(|w| w.set_customer_name(event_target_value(&ev)))
                    class="w-full bg-neutral-950 border border-white/10 rounded-sm px-4 py-3 text-stone-100 focus:border-amber-400 focus:outline-none"
                />
            </div>
            <div>
                <label class="block text-[10px] uppercase tracking-widest text-gray-500 mb-2">
                    {move || ctx.with_strings(|t| t.booking.phone.clone())}
                </label>
                <input
                    type="tel"
                    required
                    prop:value=move || ctx.wizard.with(|w| w.customer().phone.clone())
                    on:input=move |ev| ctx.wizard.update(|w| w.set_customer_phone(event_target_value(&ev)))
                    class="w-full bg-neutral-950 border border-white/10 rounded-sm px-4 py-3 text-stone-100 focus:border-amber-400 focus:outline-none"
                />
            </div>
            <button
                type="submit"
                class="w-full py-4 bg-amber-400 text-neutral-950 font-bold text-xs tracking-widest hover:bg-amber-300"
            >
                {move || ctx.with_strings(|t| t.booking.confirm_booking.clone())}
            </button>
        </form>
    }
}

#[component]
fn SuccessStep() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="flex flex-col items-center justify-center text-center py-16">
            <div class="w-20 h-20 rounded-full bg-amber-400 text-neutral-950 flex items-center justify-center text-4xl mb-8">"✓"</div>
            <h3 class="text-3xl font-bold text-stone-100 mb-4">
                {move || ctx.with_strings(|t| t.booking.success.clone())}
            </h3>
            <p class="text-gray-400 max-w-sm mb-10">
                {move || ctx.with_strings(|t| t.booking.success_desc.clone())}
            </p>
            <button
                on:click=move |_| ctx.close_booking()
                class="px-10 py-4 border border-amber-400 text-amber-400 font-bold text-xs tracking-widest hover:bg-amber-400 hover:text-neutral-950"
            >
                {move || ctx.with_strings(|t| t.booking.back_to_home.clone())}
            </button>
        </div>
    }
}

/// Back link for steps 2-4
#[component]
fn BackButton() -> impl IntoView {
    let ctx = use_app();
    let visible = move || {
        let step = ctx.wizard.with(|w| w.step());
        step != WizardStep::Success && step.number() > 1
    };

    view! {
        {move || visible().then(|| view! {
            <button
                on:click=move |_| ctx.wizard.update(|w| {
                    w.prev();
                })
                class="mt-8 text-xs uppercase tracking-widest text-gray-500 hover:text-amber-400"
            >
                {move || ctx.with_strings(|t| format!("← {}", t.booking.prev))}
            </button>
        })}
    }
}

#[component]
fn StepHeading<F>(text: F) -> impl IntoView
where
    F: Fn() -> String + 'static,
{
    view! {
        <h3 class="text-2xl font-bold text-stone-100 mb-8">{text}</h3>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_states() {
        let current = WizardStep::SelectingDateTime;
        assert_eq!(step_state(current, WizardStep::SelectingService), StepState::Done);
        assert_eq!(step_state(current, WizardStep::SelectingDateTime), StepState::Active);
        assert_eq!(step_state(current, WizardStep::EnteringCustomerInfo), StepState::Pending);
    }

    #[test]
    fn test_success_marks_every_step_done() {
        for step in WizardStep::NUMBERED {
            assert_eq!(step_state(WizardStep::Success, step), StepState::Done);
        }
    }
}
