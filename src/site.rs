//! Application context
//!
//! `Site` bundles what every page needs: the persisted store, the visitor's
//! language and the booking wizard. Front ends own one `Site` and pass it
//! (or pieces of it) to the views that need it.

use chrono::{DateTime, Utc};

use crate::booking::{BookingWizard, ResetTicket, WizardResult, WizardStep};
use crate::catalog::{format_price, Booking, CategoryFilter, Language, Service};
use crate::i18n::Strings;
use crate::storage::{PersistedStore, StorageBackend};

/// Client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Admin,
}

impl Route {
    /// Resolve a path; unknown paths fall back to home
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/admin" | "admin" => Route::Admin,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Admin => "/admin",
        }
    }
}

/// Shared site state
pub struct Site<B: StorageBackend> {
    store: PersistedStore<B>,
    language: Language,
    wizard: BookingWizard,
}

impl<B: StorageBackend> Site<B> {
    pub fn new(store: PersistedStore<B>, language: Language) -> Self {
        Self {
            store,
            language,
            wizard: BookingWizard::new(),
        }
    }

    /// Open the store on `backend` and start in `language`
    pub fn open(backend: B, language: Language) -> Self {
        Self::new(PersistedStore::open(backend), language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switch between Vietnamese and English
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggle();
        tracing::debug!(lang = %self.language, "Language switched");
        self.language
    }

    /// UI strings in the current language
    pub fn strings(&self) -> &Strings {
        self.store.translations().get(self.language)
    }

    /// Services passing `filter`, in catalog order
    pub fn services_filtered(&self, filter: CategoryFilter) -> Vec<&Service> {
        filter.apply(self.store.services())
    }

    /// Price of `service` formatted for the current language
    pub fn price_label(&self, service: &Service) -> String {
        format_price(service.price, self.language)
    }

    /// Show the booking wizard, optionally with a service already chosen
    pub fn open_booking(&mut self, service_id: Option<&str>) -> WizardStep {
        self.wizard.open(service_id, self.store.services())
    }

    pub fn close_booking(&mut self) -> ResetTicket {
        self.wizard.close()
    }

    /// Redeem a ticket from [`Site::close_booking`] once the close delay has passed
    pub fn finish_closing(&mut self, ticket: ResetTicket) -> bool {
        self.wizard.reset_if_current(ticket)
    }

    pub fn submit_booking(&mut self, now: DateTime<Utc>) -> WizardResult<Booking> {
        self.wizard.submit(&mut self.store, now)
    }

    pub fn wizard(&self) -> &BookingWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut BookingWizard {
        &mut self.wizard
    }

    pub fn store(&self) -> &PersistedStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PersistedStore<B> {
        &mut self.store
    }

    /// Give up the site, returning the store
    pub fn into_store(self) -> PersistedStore<B> {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::TimeSlot;
    use crate::catalog::{default_barbers, Category};
    use crate::storage::MemoryBackend;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_routes() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/admin"), Route::Admin);
        assert_eq!(Route::from_path("/admin/"), Route::Admin);
        assert_eq!(Route::from_path("/unknown"), Route::Home);
        assert_eq!(Route::Admin.path(), "/admin");
    }

    #[test]
    fn test_language_switch_reformats_prices_only() {
        let mut site = Site::open(MemoryBackend::new(), Language::Vi);
        let service = site.store().service("1").cloned().unwrap();

        assert_eq!(site.price_label(&service), "250.000 ₫");
        assert_eq!(site.toggle_language(), Language::En);
        assert_eq!(site.price_label(&service), "$10.00");
        assert_eq!(site.strings(), &site.store().translations().en);
        assert_eq!(site.store().service("1").unwrap().price, 250_000);
    }

    #[test]
    fn test_services_filtered() {
        let site = Site::open(MemoryBackend::new(), Language::Vi);
        let beard = site.services_filtered(CategoryFilter::Only(Category::Beard));
        assert!(!beard.is_empty());
        assert!(beard.iter().all(|s| s.category == Category::Beard));
        assert_eq!(
            site.services_filtered(CategoryFilter::All).len(),
            site.store().services().len()
        );
    }

    #[test]
    fn test_booking_through_site() {
        let mut site = Site::open(MemoryBackend::new(), Language::En);
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert_eq!(site.open_booking(Some("5")), WizardStep::SelectingBarber);
        let wizard = site.wizard_mut();
        wizard.select_barber(default_barbers()[2].clone()).unwrap();
        wizard.pick_date(today, today).unwrap();
        wizard.pick_time(TimeSlot::parse("17:00").unwrap()).unwrap();
        wizard.next().unwrap();
        wizard.set_customer_name("Hải");
        wizard.set_customer_phone("0912345678");

        let now = Utc.with_ymd_and_hms(2026, 10, 19, 2, 0, 0).unwrap();
        let booking = site.submit_booking(now).unwrap();

        assert_eq!(booking.service_id, "5");
        assert_eq!(site.store().bookings().len(), 1);
        assert_eq!(site.wizard().step(), WizardStep::Success);

        let ticket = site.close_booking();
        assert!(site.finish_closing(ticket));
        assert_eq!(site.wizard().step(), WizardStep::SelectingService);
    }
}
