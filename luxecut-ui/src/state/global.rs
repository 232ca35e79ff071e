//! Global Application State
//!
//! One `AppContext` is provided at the root. It owns the persisted store
//! and exposes it through explicit read and write operations; reactive
//! views subscribe to a revision counter that every write bumps.

use chrono::Utc;
use leptos::*;

use luxecut::booking::{BookingWizard, WizardResult, RESET_DELAY_MS};
use luxecut::catalog::{Booking, Language};
use luxecut::concierge::{GeminiClient, GeminiConfig};
use luxecut::i18n::Strings;
use luxecut::storage::PersistedStore;

use super::storage::LocalStorageBackend;

pub type Store = PersistedStore<LocalStorageBackend>;

/// Application context provided to all components
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current UI language
    pub lang: RwSignal<Language>,
    /// The booking modal
    pub wizard: RwSignal<BookingWizard>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    store: StoredValue<Store>,
    revision: RwSignal<u64>,
    concierge: StoredValue<Option<GeminiClient>>,
}

/// Create the context and provide it to the component tree
pub fn provide_app_context() -> AppContext {
    let ctx = AppContext::new(PersistedStore::open(LocalStorageBackend::open()), gemini_client());
    provide_context(ctx);
    ctx
}

/// Client for the key baked in at build time, if any
fn gemini_client() -> Option<GeminiClient> {
    let key = option_env!("API_KEY").map(str::trim).filter(|k| !k.is_empty())?;
    match GeminiClient::new(GeminiConfig::new(key)) {
        Ok(client) => Some(client),
        Err(e) => {
            web_sys::console::warn_1(&format!("Concierge disabled: {}", e).into());
            None
        }
    }
}

/// Look up the context provided by [`provide_app_context`]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found")
}

impl AppContext {
    pub fn new(store: Store, concierge: Option<GeminiClient>) -> Self {
        Self {
            lang: create_rw_signal(Language::default()),
            wizard: create_rw_signal(BookingWizard::new()),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            store: store_value(store),
            revision: create_rw_signal(0),
            concierge: store_value(concierge),
        }
    }

    /// Read the store, subscribing the caller to later writes
    pub fn with_store<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        self.revision.with(|_| ());
        self.store.with_value(f)
    }

    /// Read the store without subscribing
    pub fn with_store_untracked<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        self.store.with_value(f)
    }

    /// Mutate the store and notify every reader
    pub fn write_store<R>(&self, f: impl FnOnce(&mut Store) -> R) -> Option<R> {
        let out = self.store.try_update_value(f);
        self.revision.update(|r| *r += 1);
        out
    }

    /// UI strings in the current language
    pub fn with_strings<R>(&self, f: impl FnOnce(&Strings) -> R) -> R {
        let lang = self.lang.get();
        self.with_store(|store| f(store.translations().get(lang)))
    }

    pub fn toggle_language(&self) {
        self.lang.update(|lang| *lang = lang.toggle());
    }

    /// Show the booking modal, optionally with a service already chosen
    pub fn open_booking(&self, service_id: Option<String>) {
        let store = self.store;
        self.wizard.update(|wizard| {
            store.with_value(|s| {
                wizard.open(service_id.as_deref(), s.services());
            });
        });
    }

    /// Hide the booking modal; its contents reset once the close delay passes
    pub fn close_booking(&self) {
        let Some(ticket) = self.wizard.try_update(|wizard| wizard.close()) else {
            return;
        };

        let wizard = self.wizard;
        gloo_timers::callback::Timeout::new(RESET_DELAY_MS, move || {
            wizard.update(|w| {
                w.reset_if_current(ticket);
            });
        })
        .forget();
    }

    /// Record the booking from the wizard's last step
    pub fn submit_booking(&self) -> Option<WizardResult<Booking>> {
        let now = Utc::now();
        // Readers of the store may also read the wizard, so it is not
        // borrowed while the store notifies them.
        let mut wizard = self.wizard.get_untracked();
        let outcome = self.write_store(|store| wizard.submit(store, now))?;
        self.wizard.set(wizard);
        Some(outcome)
    }

    /// The generative-text client, `None` when no API key was configured
    pub fn concierge(&self) -> Option<GeminiClient> {
        self.concierge.get_value()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxecut::booking::{TimeSlot, WizardStep};
    use luxecut::catalog::default_barbers;

    fn context() -> AppContext {
        AppContext::new(PersistedStore::open(LocalStorageBackend::in_memory()), None)
    }

    #[test]
    fn test_write_store_bumps_revision() {
        let runtime = create_runtime();
        let ctx = context();

        let before = ctx.revision.get_untracked();
        let count = ctx.write_store(|store| store.services().len());
        assert_eq!(count, Some(6));
        assert_eq!(ctx.revision.get_untracked(), before + 1);

        runtime.dispose();
    }

    #[test]
    fn test_strings_follow_language() {
        let runtime = create_runtime();
        let ctx = context();

        let vi = ctx.with_strings(|t| t.nav.book_now.clone());
        ctx.toggle_language();
        assert_eq!(ctx.lang.get_untracked(), Language::En);
        let en = ctx.with_strings(|t| t.nav.book_now.clone());
        assert_ne!(vi, en);

        runtime.dispose();
    }

    #[test]
    fn test_booking_through_context() {
        let runtime = create_runtime();
        let ctx = context();
        let today = chrono::Local::now().date_naive();

        ctx.open_booking(Some("2".to_string()));
        ctx.wizard.update(|w| {
            w.select_barber(default_barbers()[0].clone()).unwrap();
            w.pick_date(today, today).unwrap();
            w.pick_time(TimeSlot::parse("09:30").unwrap()).unwrap();
            w.next().unwrap();
            w.set_customer_name("Minh");
            w.set_customer_phone("0987654321");
        });

        let booking = ctx.submit_booking().unwrap().unwrap();
        assert_eq!(booking.service_id, "2");
        assert_eq!(ctx.with_store_untracked(|s| s.bookings().len()), 1);
        assert_eq!(ctx.wizard.with_untracked(|w| w.step()), WizardStep::Success);

        runtime.dispose();
    }
}
