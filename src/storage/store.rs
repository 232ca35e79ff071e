//! Persisted store
//!
//! Holds the four site collections (services, bookings, social links,
//! translations) in memory and mirrors each one to its storage key as JSON
//! whenever it changes. Hydration never fails: a missing or unreadable entry
//! is replaced by the built-in defaults.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::StorageBackend;
use super::error::{StorageError, StorageResult};
use crate::catalog::{default_services, find_service, Booking, Service, SocialLinks};
use crate::i18n::Translations;

/// Storage key for the service catalog
pub const SERVICES_KEY: &str = "luxecut_services";
/// Storage key for the bookings list
pub const BOOKINGS_KEY: &str = "luxecut_bookings";
/// Storage key for the social links object
pub const SOCIAL_KEY: &str = "luxecut_social";
/// Storage key for the translations object
pub const TRANSLATIONS_KEY: &str = "luxecut_translations";

/// The site's persisted state
///
/// Last write wins; there is no versioning and no cross-key atomicity.
pub struct PersistedStore<B: StorageBackend> {
    backend: B,
    services: Vec<Service>,
    bookings: Vec<Booking>,
    social_links: SocialLinks,
    translations: Translations,
}

/// Store statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub service_count: usize,
    pub booking_count: usize,
    pub translated_languages: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "services={}, bookings={}, languages={}",
            self.service_count, self.booking_count, self.translated_languages
        )
    }
}

impl<B: StorageBackend> PersistedStore<B> {
    /// Hydrate every collection from `backend`, seeding defaults where needed
    pub fn open(mut backend: B) -> Self {
        let (services, services_seeded) = hydrate(&backend, SERVICES_KEY, default_services);
        let (bookings, _) = hydrate(&backend, BOOKINGS_KEY, Vec::new);
        let (social_links, social_seeded) = hydrate(&backend, SOCIAL_KEY, SocialLinks::default);
        let (translations, translations_seeded) = hydrate_with(
            &backend,
            TRANSLATIONS_KEY,
            Translations::from_stored,
            Translations::default,
        );

        // Seeded collections are written back so the next load finds them.
        // Bookings are left alone: an unreadable list is only replaced by the
        // next append.
        if services_seeded {
            best_effort(write_json(&mut backend, SERVICES_KEY, &services), SERVICES_KEY);
        }
        if social_seeded {
            best_effort(write_json(&mut backend, SOCIAL_KEY, &social_links), SOCIAL_KEY);
        }
        if translations_seeded {
            best_effort(
                write_json(&mut backend, TRANSLATIONS_KEY, &translations),
                TRANSLATIONS_KEY,
            );
        }

        let store = Self {
            backend,
            services,
            bookings,
            social_links,
            translations,
        };
        tracing::info!("Store opened: {}", store.stats());
        store
    }

    /// Current service catalog, in display order
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Look up a service by id
    pub fn service(&self, id: &str) -> Option<&Service> {
        find_service(&self.services, id)
    }

    /// All bookings, oldest first
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn social_links(&self) -> &SocialLinks {
        &self.social_links
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Replace the service catalog
    pub fn set_services(&mut self, services: Vec<Service>) -> StorageResult<()> {
        self.services = services;
        write_json(&mut self.backend, SERVICES_KEY, &self.services)
    }

    /// Mutate the service catalog in place and persist the result
    pub fn update_services<R>(&mut self, f: impl FnOnce(&mut Vec<Service>) -> R) -> StorageResult<R> {
        let result = f(&mut self.services);
        write_json(&mut self.backend, SERVICES_KEY, &self.services)?;
        Ok(result)
    }

    /// Append a booking; no deduplication
    pub fn append_booking(&mut self, booking: Booking) -> StorageResult<()> {
        tracing::debug!(booking_id = %booking.id, "Appending booking");
        self.bookings.push(booking);
        write_json(&mut self.backend, BOOKINGS_KEY, &self.bookings)
    }

    pub fn set_social_links(&mut self, links: SocialLinks) -> StorageResult<()> {
        self.social_links = links;
        write_json(&mut self.backend, SOCIAL_KEY, &self.social_links)
    }

    pub fn set_translations(&mut self, translations: Translations) -> StorageResult<()> {
        self.translations = translations;
        write_json(&mut self.backend, TRANSLATIONS_KEY, &self.translations)
    }

    /// Restore the seeded catalog, links and copy, and drop all bookings
    pub fn reset_to_defaults(&mut self) -> StorageResult<()> {
        self.services = default_services();
        self.bookings.clear();
        self.social_links = SocialLinks::default();
        self.translations = Translations::default();
        self.flush()
    }

    /// Write every collection to the backend
    pub fn flush(&mut self) -> StorageResult<()> {
        write_json(&mut self.backend, SERVICES_KEY, &self.services)?;
        write_json(&mut self.backend, BOOKINGS_KEY, &self.bookings)?;
        write_json(&mut self.backend, SOCIAL_KEY, &self.social_links)?;
        write_json(&mut self.backend, TRANSLATIONS_KEY, &self.translations)?;
        Ok(())
    }

    /// Flush and hand the backend back
    pub fn close(mut self) -> StorageResult<B> {
        self.flush()?;
        tracing::info!("Store closed: {}", self.stats());
        Ok(self.backend)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            service_count: self.services.len(),
            booking_count: self.bookings.len(),
            translated_languages: crate::catalog::Language::all().len(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Read and parse `key`, falling back to `default`.
///
/// The flag is true when the default was used.
fn hydrate<T: DeserializeOwned>(
    backend: &impl StorageBackend,
    key: &str,
    default: impl FnOnce() -> T,
) -> (T, bool) {
    hydrate_with(backend, key, |raw| serde_json::from_str(raw), default)
}

fn hydrate_with<T>(
    backend: &impl StorageBackend,
    key: &str,
    parse: impl FnOnce(&str) -> serde_json::Result<T>,
    default: impl FnOnce() -> T,
) -> (T, bool) {
    match backend.get_item(key) {
        Ok(Some(raw)) => match parse(&raw) {
            Ok(value) => (value, false),
            Err(e) => {
                tracing::warn!(key, error = %e, "Stored entry is corrupt, using defaults");
                (default(), true)
            }
        },
        Ok(None) => {
            tracing::debug!(key, "No stored entry, using defaults");
            (default(), true)
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored entry, using defaults");
            (default(), true)
        }
    }
}

fn write_json<T: Serialize + ?Sized>(
    backend: &mut impl StorageBackend,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let raw = serde_json::to_string(value).map_err(StorageError::from)?;
    backend.set_item(key, &raw)
}

fn best_effort(result: StorageResult<()>, key: &str) {
    if let Err(e) = result {
        tracing::warn!(key, error = %e, "Failed to persist seeded defaults");
    }
}
