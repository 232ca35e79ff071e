//! Service catalog management
//!
//! The add/edit form and the create, update and delete operations behind the
//! services tab. Edits replace the catalog entry in place and keep its id;
//! new services get a timestamp id and are appended at the end.

use chrono::{DateTime, Utc};

use super::error::{AdminError, AdminResult};
use crate::catalog::{timestamp_id, Category, LocalizedText, Service};
use crate::storage::{PersistedStore, StorageBackend};

/// Duration given to services created without one, in minutes
pub const DEFAULT_DURATION: u32 = 30;

/// Slug used when the English title is empty
const FALLBACK_SLUG: &str = "new-service";

/// URL slug for an English title: lowercase, whitespace runs become `-`
pub fn slugify(title_en: &str) -> String {
    if title_en.is_empty() {
        return FALLBACK_SLUG.to_string();
    }

    let mut slug = String::with_capacity(title_en.len());
    let mut in_whitespace = false;
    for ch in title_en.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }
    slug
}

/// Parse a price typed into the form
pub fn parse_price(input: &str) -> AdminResult<u64> {
    input
        .trim()
        .parse()
        .map_err(|_| AdminError::InvalidValue {
            field: "price",
            value: input.to_string(),
        })
}

/// Parse a duration typed into the form
pub fn parse_duration(input: &str) -> AdminResult<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| AdminError::InvalidValue {
            field: "duration",
            value: input.to_string(),
        })
}

/// The add/edit service form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceForm {
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub price: u64,
    pub duration: u32,
    pub category: Category,
    pub image_url: String,
}

impl Default for ServiceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceForm {
    /// Empty form for a new service
    pub fn new() -> Self {
        Self {
            title: LocalizedText::default(),
            description: LocalizedText::default(),
            price: 0,
            duration: DEFAULT_DURATION,
            category: Category::Hair,
            image_url: String::new(),
        }
    }

    /// Form pre-filled from an existing service
    pub fn from_service(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            price: service.price,
            duration: service.duration,
            category: service.category,
            image_url: service.image_url.clone(),
        }
    }

    /// Both titles are required
    pub fn validate(&self) -> AdminResult<()> {
        if self.title.vi.trim().is_empty() {
            return Err(AdminError::MissingField("Vietnamese title"));
        }
        if self.title.en.trim().is_empty() {
            return Err(AdminError::MissingField("English title"));
        }
        Ok(())
    }

    /// Build the stored record. An existing id is kept; otherwise the id is
    /// the millisecond timestamp of `now`.
    pub fn into_service(self, existing_id: Option<&str>, now: DateTime<Utc>) -> Service {
        let id = existing_id
            .map(str::to_string)
            .unwrap_or_else(|| timestamp_id(now));
        Service {
            id,
            slug: slugify(&self.title.en),
            title: self.title,
            description: self.description,
            price: self.price,
            duration: self.duration,
            category: self.category,
            image_url: self.image_url,
        }
    }
}

/// Create (`editing == None`) or update a service from the form
pub fn save_service<B: StorageBackend>(
    store: &mut PersistedStore<B>,
    editing: Option<&str>,
    form: ServiceForm,
    now: DateTime<Utc>,
) -> AdminResult<Service> {
    form.validate()?;

    match editing {
        Some(id) => {
            if store.service(id).is_none() {
                return Err(AdminError::UnknownService(id.to_string()));
            }
            let service = form.into_service(Some(id), now);
            let replacement = service.clone();
            store.update_services(move |services| {
                if let Some(slot) = services.iter_mut().find(|s| s.id == replacement.id) {
                    *slot = replacement;
                }
            })?;
            tracing::info!(service_id = %service.id, slug = %service.slug, "Service updated");
            Ok(service)
        }
        None => {
            let service = form.into_service(None, now);
            let created = service.clone();
            store.update_services(move |services| services.push(created))?;
            tracing::info!(service_id = %service.id, slug = %service.slug, "Service created");
            Ok(service)
        }
    }
}

/// Delete a service once `confirm` agrees. Returns whether it was removed.
pub fn delete_service<B: StorageBackend>(
    store: &mut PersistedStore<B>,
    id: &str,
    confirm: impl FnOnce(&Service) -> bool,
) -> AdminResult<bool> {
    let service = store
        .service(id)
        .cloned()
        .ok_or_else(|| AdminError::UnknownService(id.to_string()))?;

    if !confirm(&service) {
        tracing::debug!(service_id = %id, "Delete cancelled");
        return Ok(false);
    }

    store.update_services(|services| services.retain(|s| s.id != id))?;
    tracing::info!(service_id = %id, "Service deleted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_services;
    use crate::storage::MemoryBackend;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    fn form(vi: &str, en: &str, price: u64) -> ServiceForm {
        ServiceForm {
            title: LocalizedText::new(vi, en),
            price,
            ..ServiceForm::new()
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Royal Hot Towel Shave"), "royal-hot-towel-shave");
        assert_eq!(slugify("Beard  Trim\tDeluxe"), "beard-trim-deluxe");
        assert_eq!(slugify("Already-Hyphenated"), "already-hyphenated");
        assert_eq!(slugify(""), "new-service");
        assert_eq!(slugify(" Fade"), "-fade");
    }

    #[test]
    fn test_new_form_defaults_to_hair() {
        let form = ServiceForm::new();
        assert_eq!(form.category, Category::Hair);
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_validate_requires_both_titles() {
        assert!(matches!(
            form("", "Cut", 1).validate(),
            Err(AdminError::MissingField("Vietnamese title"))
        ));
        assert!(matches!(
            form("Cắt", "  ", 1).validate(),
            Err(AdminError::MissingField("English title"))
        ));
        assert!(form("Cắt", "Cut", 1).validate().is_ok());
    }

    #[test]
    fn test_create_appends_with_timestamp_id() {
        let mut store = PersistedStore::open(MemoryBackend::new());
        let before = store.services().len();

        let service =
            save_service(&mut store, None, form("Cạo Mặt", "Royal Face Shave", 120_000), now())
                .unwrap();

        assert_eq!(service.id, now().timestamp_millis().to_string());
        assert_eq!(service.slug, "royal-face-shave");
        assert_eq!(store.services().len(), before + 1);
        assert_eq!(store.services().last(), Some(&service));
        let matching = store.services().iter().filter(|s| s.id == service.id).count();
        assert_eq!(matching, 1);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut store = PersistedStore::open(MemoryBackend::new());
        let original = store.service("2").cloned().unwrap();

        let mut edit = ServiceForm::from_service(&original);
        edit.price = 999_000;
        edit.title.en = "Skin Fade".to_string();
        let saved = save_service(&mut store, Some("2"), edit, now()).unwrap();

        assert_eq!(saved.id, "2");
        assert_eq!(saved.slug, "skin-fade");
        assert_eq!(store.services()[1], saved);
        assert_eq!(store.services().len(), default_services().len());
    }

    #[test]
    fn test_edit_unknown_service() {
        let mut store = PersistedStore::open(MemoryBackend::new());
        let result = save_service(&mut store, Some("404"), form("A", "B", 1), now());
        assert!(matches!(result, Err(AdminError::UnknownService(id)) if id == "404"));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut store = PersistedStore::open(MemoryBackend::new());
        let count = store.services().len();

        let removed = delete_service(&mut store, "3", |_| false).unwrap();
        assert!(!removed);
        assert_eq!(store.services().len(), count);

        let mut prompted = String::new();
        let removed = delete_service(&mut store, "3", |service| {
            prompted = service.title.en.clone();
            true
        })
        .unwrap();
        assert!(removed);
        assert!(!prompted.is_empty());
        assert!(store.service("3").is_none());
        assert_eq!(store.services().len(), count - 1);
    }

    #[test]
    fn test_parse_form_numbers() {
        assert_eq!(parse_price(" 150000 ").unwrap(), 150_000);
        assert!(parse_price("-5").is_err());
        assert!(parse_price("").is_err());
        assert_eq!(parse_duration("45").unwrap(), 45);
        assert!(parse_duration("forty").is_err());
    }
}
