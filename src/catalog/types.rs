//! Core data types for the LuxeCut catalog
//!
//! This module defines the records the site stores and displays:
//! - `Service`: a bookable grooming offering
//! - `Barber`: a staff profile picked during booking
//! - `Booking`: a confirmed reservation
//! - `SocialLinks`: footer links edited from the admin dashboard
//! - `Language`, `LocalizedText`, `Category`: supporting enums and text
//!
//! Field names serialize in camelCase so stored JSON keeps the shape the
//! browser site has always written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported UI languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Vietnamese, the site's primary language (prices in VND)
    #[default]
    Vi,
    /// English (prices shown in USD)
    En,
}

impl Language {
    /// Get all languages for iteration
    pub fn all() -> &'static [Language] {
        &[Language::Vi, Language::En]
    }

    /// Two-letter language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
        }
    }

    /// The other language (the navbar switch)
    pub fn toggle(self) -> Self {
        match self {
            Language::Vi => Language::En,
            Language::En => Language::Vi,
        }
    }

    /// Language name used when instructing the text generator
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::Vi => "Vietnamese",
            Language::En => "English",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vi" => Ok(Language::Vi),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// Text available in every supported language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LocalizedText {
    #[serde(default)]
    pub vi: String,
    #[serde(default)]
    pub en: String,
}

impl LocalizedText {
    pub fn new(vi: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            vi: vi.into(),
            en: en.into(),
        }
    }

    /// Text for the given language
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Vi => &self.vi,
            Language::En => &self.en,
        }
    }

    /// Replace the text for one language
    pub fn set(&mut self, lang: Language, text: impl Into<String>) {
        match lang {
            Language::Vi => self.vi = text.into(),
            Language::En => self.en = text.into(),
        }
    }
}

/// Service category, used for the home page filter chips
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Cuts, styling, coloring
    #[default]
    Hair,
    /// Shaves and beard sculpting
    Beard,
    /// Facials, massages, treatments
    Spa,
}

impl Category {
    /// Get all categories for iteration
    pub fn all() -> &'static [Category] {
        &[Category::Hair, Category::Beard, Category::Spa]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Hair => write!(f, "hair"),
            Category::Beard => write!(f, "beard"),
            Category::Spa => write!(f, "spa"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hair" => Ok(Category::Hair),
            "beard" => Ok(Category::Beard),
            "spa" => Ok(Category::Spa),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// Home page service filter ("all" plus one chip per category)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filters in chip order
    pub fn all() -> [CategoryFilter; 4] {
        [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Hair),
            CategoryFilter::Only(Category::Beard),
            CategoryFilter::Only(Category::Spa),
        ]
    }

    pub fn matches(&self, service: &Service) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => service.category == *category,
        }
    }

    /// Keep only the services this filter lets through, in catalog order
    pub fn apply<'a>(&self, services: &'a [Service]) -> Vec<&'a Service> {
        services.iter().filter(|s| self.matches(s)).collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// A sellable grooming offering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Stable id; a millisecond timestamp string for admin-created services
    pub id: String,
    /// URL slug derived from the English title when the service is saved
    pub slug: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    /// Price in VND
    pub price: u64,
    /// Duration in minutes
    pub duration: u32,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub image_url: String,
}

impl Service {
    /// Localized title
    pub fn title_in(&self, lang: Language) -> &str {
        self.title.get(lang)
    }
}

/// A staff profile selectable during booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: String,
    pub name: String,
    pub specialty: LocalizedText,
    pub image_url: String,
}

/// A confirmed reservation
///
/// `total_price` is copied from the service when the booking is made and
/// never follows later catalog edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub service_id: String,
    pub barber_id: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Half-hour slot, `HH:MM`
    pub time: String,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default)]
    pub total_price: u64,
}

/// Footer social media links
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub twitter: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            facebook: "https://facebook.com".to_string(),
            instagram: "https://instagram.com".to_string(),
            twitter: "https://twitter.com".to_string(),
        }
    }
}

/// Find a service by id
pub fn find_service<'a>(services: &'a [Service], id: &str) -> Option<&'a Service> {
    services.iter().find(|s| s.id == id)
}

/// Millisecond Unix timestamp as a string, the id scheme for new records
pub fn timestamp_id(now: DateTime<Utc>) -> String {
    now.timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_service(id: &str, category: Category) -> Service {
        Service {
            id: id.to_string(),
            slug: format!("service-{}", id),
            title: LocalizedText::new(format!("Dịch vụ {}", id), format!("Service {}", id)),
            description: LocalizedText::default(),
            price: 100_000,
            duration: 30,
            category,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_language_toggle_and_parse() {
        assert_eq!(Language::Vi.toggle(), Language::En);
        assert_eq!(Language::En.toggle(), Language::Vi);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_service_json_uses_camel_case() {
        let service = sample_service("1", Category::Beard);
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["imageUrl"], "");
        assert_eq!(json["category"], "beard");
        assert_eq!(json["title"]["en"], "Service 1");
    }

    #[test]
    fn test_booking_parses_stored_shape() {
        let raw = r#"{"id":"1700000000000","serviceId":"1","barberId":"b1",
            "date":"2026-10-20","time":"09:30","customerName":"An",
            "customerPhone":"0123","totalPrice":150000}"#;
        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert_eq!(booking.total_price, 150_000);
        assert_eq!(booking.customer_name, "An");
    }

    #[test]
    fn test_category_filter() {
        let services = vec![
            sample_service("1", Category::Hair),
            sample_service("2", Category::Spa),
            sample_service("3", Category::Hair),
        ];

        assert_eq!(CategoryFilter::All.apply(&services).len(), 3);
        let hair = CategoryFilter::Only(Category::Hair).apply(&services);
        assert_eq!(hair.len(), 2);
        assert_eq!(hair[1].id, "3");
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "spa".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Spa)
        );
    }

    #[test]
    fn test_timestamp_id() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        assert_eq!(timestamp_id(now), now.timestamp_millis().to_string());
    }
}
