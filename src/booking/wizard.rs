//! Booking wizard state machine
//!
//! ```text
//! SelectingService ─select_service─▶ SelectingBarber ─select_barber─▶ SelectingDateTime
//!        ▲                                                              │ next (date + time)
//!        └──────────────── prev (one step at a time) ◀──────────────────▼
//!                                                            EnteringCustomerInfo
//!                                                                       │ submit
//!                                                                       ▼
//!                                                                    Success
//! ```
//!
//! The modal itself can be hidden at any point (`Closed`). Closing hands out
//! a [`ResetTicket`]; the owner redeems it after [`RESET_DELAY`] so the
//! fields clear only once the closing animation is over.

use chrono::{DateTime, NaiveDate, Utc};
use std::time::Duration;
use thiserror::Error;

use super::slots::{format_date, is_bookable_date, TimeSlot};
use crate::catalog::{
    find_service, format_price, timestamp_id, Barber, Booking, Language, Service,
};
use crate::storage::{PersistedStore, StorageBackend};

/// How long a closed wizard keeps its fields before they are cleared
pub const RESET_DELAY: Duration = Duration::from_millis(RESET_DELAY_MS as u64);
/// [`RESET_DELAY`] in milliseconds, for browser timers
pub const RESET_DELAY_MS: u32 = 500;

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    #[default]
    SelectingService,
    SelectingBarber,
    SelectingDateTime,
    EnteringCustomerInfo,
    Success,
}

impl WizardStep {
    /// The four numbered steps shown in the sidebar
    pub const NUMBERED: [WizardStep; 4] = [
        WizardStep::SelectingService,
        WizardStep::SelectingBarber,
        WizardStep::SelectingDateTime,
        WizardStep::EnteringCustomerInfo,
    ];

    /// Sidebar step number (1-4); `Success` stays on 4
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::SelectingService => 1,
            WizardStep::SelectingBarber => 2,
            WizardStep::SelectingDateTime => 3,
            WizardStep::EnteringCustomerInfo | WizardStep::Success => 4,
        }
    }

    /// The step `prev` goes back to
    pub fn previous(&self) -> WizardStep {
        match self {
            WizardStep::SelectingService | WizardStep::SelectingBarber => {
                WizardStep::SelectingService
            }
            WizardStep::SelectingDateTime => WizardStep::SelectingBarber,
            WizardStep::EnteringCustomerInfo => WizardStep::SelectingDateTime,
            WizardStep::Success => WizardStep::Success,
        }
    }
}

/// Errors raised by wizard transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("action belongs to step {expected:?}, wizard is at {actual:?}")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("no {0} selected")]
    MissingSelection(&'static str),

    #[error("not a calendar date: {0:?}")]
    InvalidDate(String),

    #[error("date {date} is before today ({today})")]
    DateInPast { date: NaiveDate, today: NaiveDate },

    #[error("customer {0} is required")]
    MissingCustomerInfo(&'static str),

    #[error("unknown service: {0}")]
    UnknownService(String),

    #[error("unknown barber: {0}")]
    UnknownBarber(String),
}

/// Result type alias for wizard transitions
pub type WizardResult<T> = Result<T, WizardError>;

/// Contact details typed into the last step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
}

/// Proof of a specific `close()`; stale tickets do not reset a reopened wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// What the sidebar shows once a service is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub service_title: String,
    pub price: String,
}

/// The four-step booking flow
#[derive(Debug, Clone, Default)]
pub struct BookingWizard {
    visible: bool,
    generation: u64,
    step: WizardStep,
    service: Option<Service>,
    barber: Option<Barber>,
    date: Option<NaiveDate>,
    time: Option<TimeSlot>,
    customer: CustomerInfo,
    confirmed: Option<Booking>,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the wizard with a fresh booking.
    ///
    /// A `preselected` service id found in `catalog` is selected right away
    /// and the wizard starts at barber selection.
    pub fn open(&mut self, preselected: Option<&str>, catalog: &[Service]) -> WizardStep {
        self.clear();
        self.visible = true;
        self.generation += 1;

        if let Some(id) = preselected {
            match find_service(catalog, id) {
                Some(service) => {
                    self.service = Some(service.clone());
                    self.step = WizardStep::SelectingBarber;
                }
                None => tracing::debug!(service_id = %id, "Preselected service not in catalog"),
            }
        }

        self.step
    }

    /// Hide the wizard. Redeem the ticket after [`RESET_DELAY`].
    pub fn close(&mut self) -> ResetTicket {
        self.visible = false;
        ResetTicket(self.generation)
    }

    /// Clear all fields if the wizard is still closed since `ticket` was issued
    pub fn reset_if_current(&mut self, ticket: ResetTicket) -> bool {
        if self.visible || ticket.0 != self.generation {
            return false;
        }
        self.clear();
        true
    }

    /// Clear all fields immediately
    pub fn reset(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.step = WizardStep::SelectingService;
        self.service = None;
        self.barber = None;
        self.date = None;
        self.time = None;
        self.customer = CustomerInfo::default();
        self.confirmed = None;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selected_service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn selected_barber(&self) -> Option<&Barber> {
        self.barber.as_ref()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.time
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// The booking recorded by the last successful submit
    pub fn confirmed_booking(&self) -> Option<&Booking> {
        self.confirmed.as_ref()
    }

    fn require_step(&self, expected: WizardStep) -> WizardResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Step 1: choosing a service moves straight on to barber selection
    pub fn select_service(&mut self, service: Service) -> WizardResult<WizardStep> {
        self.require_step(WizardStep::SelectingService)?;
        self.service = Some(service);
        self.step = WizardStep::SelectingBarber;
        Ok(self.step)
    }

    /// Step 1 by id, resolved against the current catalog
    pub fn select_service_id(&mut self, id: &str, catalog: &[Service]) -> WizardResult<WizardStep> {
        let service = find_service(catalog, id)
            .cloned()
            .ok_or_else(|| WizardError::UnknownService(id.to_string()))?;
        self.select_service(service)
    }

    /// Step 2: choosing a barber moves straight on to date and time
    pub fn select_barber(&mut self, barber: Barber) -> WizardResult<WizardStep> {
        self.require_step(WizardStep::SelectingBarber)?;
        self.barber = Some(barber);
        self.step = WizardStep::SelectingDateTime;
        Ok(self.step)
    }

    /// Step 3: pick a date no earlier than `today`
    pub fn pick_date(&mut self, date: NaiveDate, today: NaiveDate) -> WizardResult<()> {
        self.require_step(WizardStep::SelectingDateTime)?;
        if !is_bookable_date(date, today) {
            return Err(WizardError::DateInPast { date, today });
        }
        self.date = Some(date);
        Ok(())
    }

    /// Step 3: apply the raw value of a `YYYY-MM-DD` date input
    ///
    /// An empty value clears the chosen date.
    pub fn pick_date_input(&mut self, value: &str, today: NaiveDate) -> WizardResult<()> {
        self.require_step(WizardStep::SelectingDateTime)?;
        let value = value.trim();
        if value.is_empty() {
            self.date = None;
            return Ok(());
        }
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| WizardError::InvalidDate(value.to_string()))?;
        self.pick_date(date, today)
    }

    /// Step 3: pick a time slot
    pub fn pick_time(&mut self, slot: TimeSlot) -> WizardResult<()> {
        self.require_step(WizardStep::SelectingDateTime)?;
        self.time = Some(slot);
        Ok(())
    }

    /// Whether the explicit "next" action is enabled
    pub fn can_advance(&self) -> bool {
        self.step == WizardStep::SelectingDateTime && self.date.is_some() && self.time.is_some()
    }

    /// Step 3 → 4, once both date and time are chosen
    pub fn next(&mut self) -> WizardResult<WizardStep> {
        self.require_step(WizardStep::SelectingDateTime)?;
        if self.date.is_none() {
            return Err(WizardError::MissingSelection("date"));
        }
        if self.time.is_none() {
            return Err(WizardError::MissingSelection("time"));
        }
        self.step = WizardStep::EnteringCustomerInfo;
        Ok(self.step)
    }

    /// Go back one step, keeping earlier selections
    pub fn prev(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer.name = name.into();
    }

    pub fn set_customer_phone(&mut self, phone: impl Into<String>) {
        self.customer.phone = phone.into();
    }

    /// Step 4: record the booking and show the success screen.
    ///
    /// The price is the service's catalog price at this moment. The booking
    /// is appended to `store`; a failed write is logged and the wizard still
    /// reaches `Success`.
    pub fn submit<B: StorageBackend>(
        &mut self,
        store: &mut PersistedStore<B>,
        now: DateTime<Utc>,
    ) -> WizardResult<Booking> {
        self.require_step(WizardStep::EnteringCustomerInfo)?;

        let service = self
            .service
            .as_ref()
            .ok_or(WizardError::MissingSelection("service"))?;
        let barber = self
            .barber
            .as_ref()
            .ok_or(WizardError::MissingSelection("barber"))?;
        let date = self.date.ok_or(WizardError::MissingSelection("date"))?;
        let time = self.time.ok_or(WizardError::MissingSelection("time"))?;

        let name = self.customer.name.trim();
        if name.is_empty() {
            return Err(WizardError::MissingCustomerInfo("name"));
        }
        let phone = self.customer.phone.trim();
        if phone.is_empty() {
            return Err(WizardError::MissingCustomerInfo("phone"));
        }

        // A service deleted mid-flow keeps the price it was selected at.
        let total_price = store
            .service(&service.id)
            .map(|current| current.price)
            .unwrap_or(service.price);

        let booking = Booking {
            id: timestamp_id(now),
            service_id: service.id.clone(),
            barber_id: barber.id.clone(),
            date: format_date(date),
            time: time.to_string(),
            customer_name: name.to_string(),
            customer_phone: phone.to_string(),
            total_price,
        };

        if let Err(e) = store.append_booking(booking.clone()) {
            tracing::error!(booking_id = %booking.id, error = %e, "Failed to persist booking");
        } else {
            tracing::info!(
                booking_id = %booking.id,
                service = %booking.service_id,
                barber = %booking.barber_id,
                "Booking recorded for {} {}",
                booking.date,
                booking.time
            );
        }

        self.step = WizardStep::Success;
        self.confirmed = Some(booking.clone());
        Ok(booking)
    }

    /// Sidebar summary for the chosen service
    pub fn summary(&self, lang: Language) -> Option<BookingSummary> {
        self.service.as_ref().map(|service| BookingSummary {
            service_title: service.title_in(lang).to_string(),
            price: format_price(service.price, lang),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_barbers, default_services};
    use crate::storage::{MemoryBackend, StorageError, StorageResult};
    use chrono::TimeZone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 3, 0, 0).unwrap()
    }

    fn store() -> PersistedStore<MemoryBackend> {
        PersistedStore::open(MemoryBackend::new())
    }

    /// Drive a wizard to the customer info step
    fn wizard_at_customer_info(store: &PersistedStore<MemoryBackend>) -> BookingWizard {
        let mut wizard = BookingWizard::new();
        wizard.open(None, store.services());
        wizard.select_service_id("1", store.services()).unwrap();
        wizard.select_barber(default_barbers()[0].clone()).unwrap();
        wizard
            .pick_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(), today())
            .unwrap();
        wizard.pick_time(TimeSlot::parse("10:30").unwrap()).unwrap();
        wizard.next().unwrap();
        wizard
    }

    #[test]
    fn test_full_flow_records_booking() {
        let mut store = store();
        let mut wizard = wizard_at_customer_info(&store);
        wizard.set_customer_name("Trần Văn An");
        wizard.set_customer_phone("0901 234 567");

        let booking = wizard.submit(&mut store, now()).unwrap();

        assert_eq!(wizard.step(), WizardStep::Success);
        assert_eq!(booking.service_id, "1");
        assert_eq!(booking.barber_id, "b1");
        assert_eq!(booking.date, "2026-10-20");
        assert_eq!(booking.time, "10:30");
        assert_eq!(booking.total_price, 250_000);
        assert_eq!(booking.id, now().timestamp_millis().to_string());
        assert_eq!(store.bookings(), &[booking.clone()]);
        assert_eq!(wizard.confirmed_booking(), Some(&booking));
    }

    #[test]
    fn test_selections_advance_immediately() {
        let catalog = default_services();
        let mut wizard = BookingWizard::new();
        assert_eq!(wizard.open(None, &catalog), WizardStep::SelectingService);

        assert_eq!(
            wizard.select_service(catalog[2].clone()).unwrap(),
            WizardStep::SelectingBarber
        );
        assert_eq!(
            wizard.select_barber(default_barbers()[1].clone()).unwrap(),
            WizardStep::SelectingDateTime
        );
    }

    #[test]
    fn test_preselected_service_starts_at_barber_step() {
        let catalog = default_services();
        let mut wizard = BookingWizard::new();

        let step = wizard.open(Some("3"), &catalog);

        assert_eq!(step, WizardStep::SelectingBarber);
        assert!(wizard.is_open());
        assert_eq!(wizard.selected_service().unwrap().id, "3");
    }

    #[test]
    fn test_unknown_preselected_service_starts_at_first_step() {
        let catalog = default_services();
        let mut wizard = BookingWizard::new();

        assert_eq!(wizard.open(Some("missing"), &catalog), WizardStep::SelectingService);
        assert!(wizard.selected_service().is_none());
    }

    #[test]
    fn test_next_needs_date_and_time() {
        let catalog = default_services();
        let mut wizard = BookingWizard::new();
        wizard.open(Some("1"), &catalog);
        wizard.select_barber(default_barbers()[0].clone()).unwrap();

        assert!(!wizard.can_advance());
        assert_eq!(wizard.next(), Err(WizardError::MissingSelection("date")));

        wizard.pick_date(today(), today()).unwrap();
        assert!(!wizard.can_advance());
        assert_eq!(wizard.next(), Err(WizardError::MissingSelection("time")));

        wizard.pick_time(TimeSlot::parse("20:30").unwrap()).unwrap();
        assert!(wizard.can_advance());
        assert_eq!(wizard.next().unwrap(), WizardStep::EnteringCustomerInfo);
    }

    #[test]
    fn test_past_date_is_rejected() {
        let catalog = default_services();
        let mut wizard = BookingWizard::new();
        wizard.open(Some("1"), &catalog);
        wizard.select_barber(default_barbers()[0].clone()).unwrap();

        let yesterday = today().pred_opt().unwrap();
        assert_eq!(
            wizard.pick_date(yesterday, today()),
            Err(WizardError::DateInPast {
                date: yesterday,
                today: today()
            })
        );
        assert!(wizard.selected_date().is_none());
    }

    #[test]
    fn test_cleared_date_input_unsets_date() {
        let catalog = default_services();
        let mut wizard = BookingWizard::new();
        wizard.open(Some("1"), &catalog);
        wizard.select_barber(default_barbers()[0].clone()).unwrap();

        wizard.pick_date_input("2026-10-21", today()).unwrap();
        wizard.pick_time(TimeSlot::parse("11:00").unwrap()).unwrap();
        assert!(wizard.can_advance());

        wizard.pick_date_input("", today()).unwrap();
        assert!(wizard.selected_date().is_none());
        assert!(!wizard.can_advance());

        assert_eq!(
            wizard.pick_date_input("21/10/2026", today()),
            Err(WizardError::InvalidDate("21/10/2026".to_string()))
        );
        assert!(wizard.selected_date().is_none());
    }

    #[test]
    fn test_prev_keeps_selections_and_stops_at_first_step() {
        let store = store();
        let mut wizard = wizard_at_customer_info(&store);

        assert_eq!(wizard.prev(), WizardStep::SelectingDateTime);
        assert!(wizard.can_advance());
        assert_eq!(wizard.prev(), WizardStep::SelectingBarber);
        assert_eq!(wizard.prev(), WizardStep::SelectingService);
        assert_eq!(wizard.prev(), WizardStep::SelectingService);

        assert!(wizard.selected_service().is_some());
        assert!(wizard.selected_barber().is_some());
        assert!(wizard.selected_time().is_some());
    }

    #[test]
    fn test_actions_outside_their_step_are_rejected() {
        let catalog = default_services();
        let mut wizard = BookingWizard::new();
        wizard.open(None, &catalog);

        let err = wizard.select_barber(default_barbers()[0].clone()).unwrap_err();
        assert_eq!(
            err,
            WizardError::WrongStep {
                expected: WizardStep::SelectingBarber,
                actual: WizardStep::SelectingService
            }
        );
        assert!(wizard.pick_time(TimeSlot::parse("09:00").unwrap()).is_err());
        assert!(matches!(
            wizard.select_service_id("nope", &catalog),
            Err(WizardError::UnknownService(_))
        ));
    }

    #[test]
    fn test_submit_requires_customer_details() {
        let mut store = store();
        let mut wizard = wizard_at_customer_info(&store);

        assert_eq!(
            wizard.submit(&mut store, now()),
            Err(WizardError::MissingCustomerInfo("name"))
        );
        wizard.set_customer_name("Bình");
        wizard.set_customer_phone("   ");
        assert_eq!(
            wizard.submit(&mut store, now()),
            Err(WizardError::MissingCustomerInfo("phone"))
        );
        assert!(store.bookings().is_empty());
        assert_eq!(wizard.step(), WizardStep::EnteringCustomerInfo);
    }

    #[test]
    fn test_booking_price_is_a_snapshot() {
        let mut store = store();
        store
            .update_services(|services| services[0].price = 100)
            .unwrap();

        let mut wizard = wizard_at_customer_info(&store);
        wizard.set_customer_name("Khoa");
        wizard.set_customer_phone("0987");
        wizard.submit(&mut store, now()).unwrap();

        store
            .update_services(|services| services[0].price = 200)
            .unwrap();

        assert_eq!(store.bookings()[0].total_price, 100);
        assert_eq!(store.service("1").unwrap().price, 200);
    }

    #[test]
    fn test_price_is_read_at_submission_time() {
        let mut store = store();
        let mut wizard = wizard_at_customer_info(&store);
        store
            .update_services(|services| services[0].price = 300_000)
            .unwrap();

        wizard.set_customer_name("Long");
        wizard.set_customer_phone("0911");
        let booking = wizard.submit(&mut store, now()).unwrap();

        assert_eq!(booking.total_price, 300_000);
    }

    #[test]
    fn test_failed_append_still_reaches_success() {
        struct FullBackend;

        impl StorageBackend for FullBackend {
            fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
                Ok(None)
            }
            fn set_item(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
                Err(StorageError::Backend("quota exceeded".to_string()))
            }
            fn remove_item(&mut self, _key: &str) -> StorageResult<()> {
                Ok(())
            }
        }

        let mut store = PersistedStore::open(FullBackend);
        let mut wizard = BookingWizard::new();
        wizard.open(Some("1"), store.services());
        wizard.select_barber(default_barbers()[0].clone()).unwrap();
        wizard.pick_date(today(), today()).unwrap();
        wizard.pick_time(TimeSlot::parse("09:00").unwrap()).unwrap();
        wizard.next().unwrap();
        wizard.set_customer_name("Phúc");
        wizard.set_customer_phone("0933");

        assert!(wizard.submit(&mut store, now()).is_ok());
        assert_eq!(wizard.step(), WizardStep::Success);
        assert_eq!(wizard.prev(), WizardStep::Success);
    }

    #[test]
    fn test_close_resets_after_ticket_is_redeemed() {
        let store = store();
        let mut wizard = wizard_at_customer_info(&store);
        wizard.set_customer_name("Quang");

        let ticket = wizard.close();
        assert!(!wizard.is_open());
        // fields survive until the delay elapses
        assert_eq!(wizard.customer().name, "Quang");
        assert_eq!(wizard.step(), WizardStep::EnteringCustomerInfo);

        assert!(wizard.reset_if_current(ticket));
        assert_eq!(wizard.step(), WizardStep::SelectingService);
        assert!(wizard.selected_service().is_none());
        assert!(wizard.selected_barber().is_none());
        assert!(wizard.selected_date().is_none());
        assert!(wizard.selected_time().is_none());
        assert_eq!(wizard.customer(), &CustomerInfo::default());
    }

    #[test]
    fn test_stale_ticket_does_not_clear_reopened_wizard() {
        let catalog = default_services();
        let mut wizard = BookingWizard::new();
        wizard.open(None, &catalog);
        let ticket = wizard.close();

        wizard.open(Some("2"), &catalog);
        assert!(!wizard.reset_if_current(ticket));
        assert_eq!(wizard.step(), WizardStep::SelectingBarber);
        assert_eq!(wizard.selected_service().unwrap().id, "2");
    }

    #[test]
    fn test_summary_formats_price_per_language() {
        let catalog = default_services();
        let mut wizard = BookingWizard::new();
        assert!(wizard.summary(Language::Vi).is_none());

        wizard.open(Some("1"), &catalog);
        let vi = wizard.summary(Language::Vi).unwrap();
        let en = wizard.summary(Language::En).unwrap();
        assert_eq!(vi.price, "250.000 ₫");
        assert_eq!(en.price, "$10.00");
        assert_eq!(en.service_title, "Signature Cut");
    }

    #[test]
    fn test_step_numbers() {
        let numbers: Vec<u8> = WizardStep::NUMBERED.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(WizardStep::Success.number(), 4);
    }
}
