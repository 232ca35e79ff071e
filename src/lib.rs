//! # LuxeCut
//!
//! Core of the LuxeCut barbershop site: the service catalog, the booking
//! wizard, the admin dashboard operations and the AI grooming concierge,
//! all on top of a small key-value persisted store.
//!
//! ## Features
//!
//! - **Persisted store**: services, bookings, social links and translations,
//!   seeded from defaults and mirrored to any string key-value backend
//! - **Booking wizard**: an explicit four-step state machine with price
//!   snapshots and delayed reset on close
//! - **Bilingual**: typed Vietnamese/English copy; prices in VND or USD
//! - **Admin tools**: service CRUD, revenue totals, staged content editors
//! - **Concierge**: consultation and chat over a generative-text API
//!
//! ## Modules
//!
//! - [`catalog`]: Domain records, seed data and price display
//! - [`i18n`]: UI strings per language
//! - [`storage`]: Backends and the persisted store
//! - [`booking`]: Time slots and the booking wizard
//! - [`admin`]: Dashboard operations
//! - [`concierge`]: Generative-text collaborators
//! - [`site`]: Application context shared by front ends
//! - [`config`]: File and environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{NaiveDate, Utc};
//! use luxecut::booking::TimeSlot;
//! use luxecut::catalog::{default_barbers, Language};
//! use luxecut::site::Site;
//! use luxecut::storage::MemoryBackend;
//!
//! let mut site = Site::open(MemoryBackend::new(), Language::Vi);
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//!
//! // Book the signature cut with the first barber
//! site.open_booking(Some("1"));
//! let wizard = site.wizard_mut();
//! wizard.select_barber(default_barbers()[0].clone()).unwrap();
//! wizard.pick_date(today, today).unwrap();
//! wizard.pick_time(TimeSlot::parse("10:00").unwrap()).unwrap();
//! wizard.next().unwrap();
//! wizard.set_customer_name("An");
//! wizard.set_customer_phone("0901234567");
//!
//! let booking = site.submit_booking(Utc::now()).unwrap();
//! assert_eq!(booking.total_price, 250_000);
//! assert_eq!(site.store().bookings().len(), 1);
//! ```

pub mod admin;
pub mod booking;
pub mod catalog;
pub mod concierge;
pub mod config;
pub mod i18n;
pub mod site;
pub mod storage;

// Re-export top-level types for convenience
pub use catalog::{
    Barber, Booking, Category, CategoryFilter, Language, LocalizedText, Service, SocialLinks,
};

pub use storage::{
    FileBackend, MemoryBackend, PersistedStore, StorageBackend, StorageError, StorageResult,
    StoreStats,
};

pub use booking::{BookingWizard, ResetTicket, TimeSlot, WizardError, WizardStep};

pub use admin::{AdminError, DashboardStats, ServiceForm};

pub use concierge::{
    ConciergeChat, ConciergeError, Consultant, ConsultationResult, GeminiClient, TextGenerator,
};

pub use config::{Config, ConfigError};

pub use i18n::{Strings, Translations};

pub use site::{Route, Site};
