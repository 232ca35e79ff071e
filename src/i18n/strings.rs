//! Typed UI string tree
//!
//! Every piece of copy the site shows has a named field here. The admin
//! content editor addresses fields through [`ContentField`] instead of
//! walking arbitrary paths.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::booking::WizardStep;
use crate::catalog::{Category, CategoryFilter, Language};

/// UI strings for both languages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translations {
    pub vi: Strings,
    pub en: Strings,
}

impl Translations {
    pub fn get(&self, lang: Language) -> &Strings {
        match lang {
            Language::Vi => &self.vi,
            Language::En => &self.en,
        }
    }

    pub fn get_mut(&mut self, lang: Language) -> &mut Strings {
        match lang {
            Language::Vi => &mut self.vi,
            Language::En => &mut self.en,
        }
    }
}

impl Translations {
    /// Parse stored copy on top of the built-in copy
    ///
    /// Fields missing from the stored JSON (saved by an older release) keep
    /// their built-in text; stored fields win everywhere else.
    pub fn from_stored(raw: &str) -> serde_json::Result<Self> {
        let stored: serde_json::Value = serde_json::from_str(raw)?;
        let mut merged = serde_json::to_value(Self::default())?;
        overlay(&mut merged, stored);
        serde_json::from_value(merged)
    }
}

fn overlay(base: &mut serde_json::Value, stored: serde_json::Value) {
    match (base, stored) {
        (serde_json::Value::Object(base), serde_json::Value::Object(stored)) => {
            for (key, value) in stored {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            vi: super::defaults::vietnamese(),
            en: super::defaults::english(),
        }
    }
}

/// All UI strings for one language
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Strings {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub services: ServicesStrings,
    pub consultation: ConsultationStrings,
    pub booking: BookingStrings,
    pub concierge: ConciergeStrings,
    pub admin: AdminStrings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavStrings {
    pub services: String,
    pub ai_consult: String,
    pub about: String,
    pub book_now: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeroStrings {
    pub badge: String,
    pub title_main: String,
    pub title_italic: String,
    pub subtitle: String,
    pub btn_book: String,
    pub btn_services: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServicesStrings {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub details: String,
    pub mins: String,
    pub starting_at: String,
    pub all: String,
    pub hair: String,
    pub beard: String,
    pub spa: String,
}

impl ServicesStrings {
    /// Label for a home page filter chip
    pub fn filter_label(&self, filter: CategoryFilter) -> &str {
        match filter {
            CategoryFilter::All => &self.all,
            CategoryFilter::Only(Category::Hair) => &self.hair,
            CategoryFilter::Only(Category::Beard) => &self.beard,
            CategoryFilter::Only(Category::Spa) => &self.spa,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationStrings {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
    pub label_desc: String,
    pub placeholder_desc: String,
    pub upload_btn: String,
    pub remove_btn: String,
    pub submit_btn: String,
    pub analyzing: String,
    pub verdict: String,
    pub suggested: String,
    pub tips: String,
    pub book_regimen: String,
    pub awaiting_title: String,
    pub awaiting_desc: String,
    pub photo_error: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingStrings {
    pub title: String,
    pub subtitle: String,
    pub step1: String,
    pub step2: String,
    pub step3: String,
    pub step4: String,
    pub select_service: String,
    pub select_barber: String,
    pub select_date_time: String,
    pub customer_info: String,
    pub invalid_date: String,
    pub full_name: String,
    pub phone: String,
    pub summary: String,
    pub total: String,
    pub confirm_booking: String,
    pub next: String,
    pub prev: String,
    pub success: String,
    pub success_desc: String,
    pub back_to_home: String,
}

impl BookingStrings {
    /// Sidebar label for a wizard step
    pub fn step_label(&self, step: WizardStep) -> &str {
        match step.number() {
            1 => &self.step1,
            2 => &self.step2,
            3 => &self.step3,
            _ => &self.step4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConciergeStrings {
    pub title: String,
    pub welcome: String,
    pub placeholder: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStrings {
    pub title: String,
    pub overview: String,
    pub bookings_tab: String,
    pub services_tab: String,
    pub content_tab: String,
    pub social_tab: String,
    pub add_service: String,
    pub edit: String,
    pub delete: String,
    pub save: String,
    pub cancel: String,
    pub discard: String,
    /// Confirmation prompt, followed by the service title
    pub confirm_delete: String,
    pub service_saved: String,
    pub service_deleted: String,
    pub content_saved: String,
    pub stats: AdminStatsStrings,
    pub labels: AdminLabelStrings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsStrings {
    pub revenue: String,
    pub total_bookings: String,
    pub active_services: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminLabelStrings {
    pub title_vi: String,
    pub title_en: String,
    pub description_vi: String,
    pub description_en: String,
    pub price: String,
    pub duration: String,
    pub category: String,
    pub image_url: String,
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
}

/// Site copy editable from the admin content tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentField {
    HeroBadge,
    HeroTitleMain,
    HeroTitleItalic,
    HeroSubtitle,
    ServicesBadge,
    ServicesTitle,
    ServicesSubtitle,
    ConsultationTitle,
    ConsultationSubtitle,
}

impl ContentField {
    pub const ALL: [ContentField; 9] = [
        ContentField::HeroBadge,
        ContentField::HeroTitleMain,
        ContentField::HeroTitleItalic,
        ContentField::HeroSubtitle,
        ContentField::ServicesBadge,
        ContentField::ServicesTitle,
        ContentField::ServicesSubtitle,
        ContentField::ConsultationTitle,
        ContentField::ConsultationSubtitle,
    ];

    /// Dotted key, matching the stored JSON layout
    pub fn key(&self) -> &'static str {
        match self {
            ContentField::HeroBadge => "hero.badge",
            ContentField::HeroTitleMain => "hero.titleMain",
            ContentField::HeroTitleItalic => "hero.titleItalic",
            ContentField::HeroSubtitle => "hero.subtitle",
            ContentField::ServicesBadge => "services.badge",
            ContentField::ServicesTitle => "services.title",
            ContentField::ServicesSubtitle => "services.subtitle",
            ContentField::ConsultationTitle => "consultation.title",
            ContentField::ConsultationSubtitle => "consultation.subtitle",
        }
    }

    /// Editor section heading
    pub fn section(&self) -> &'static str {
        match self {
            ContentField::HeroBadge
            | ContentField::HeroTitleMain
            | ContentField::HeroTitleItalic
            | ContentField::HeroSubtitle => "Hero Section",
            ContentField::ServicesBadge
            | ContentField::ServicesTitle
            | ContentField::ServicesSubtitle => "Services Section",
            ContentField::ConsultationTitle | ContentField::ConsultationSubtitle => {
                "Consultation Section"
            }
        }
    }
}

impl std::fmt::Display for ContentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentField::ALL
            .into_iter()
            .find(|field| field.key() == s.trim())
            .ok_or_else(|| format!("unknown content field: {}", s))
    }
}

impl Strings {
    /// Current text of an editable field
    pub fn content(&self, field: ContentField) -> &str {
        match field {
            ContentField::HeroBadge => &self.hero.badge,
            ContentField::HeroTitleMain => &self.hero.title_main,
            ContentField::HeroTitleItalic => &self.hero.title_italic,
            ContentField::HeroSubtitle => &self.hero.subtitle,
            ContentField::ServicesBadge => &self.services.badge,
            ContentField::ServicesTitle => &self.services.title,
            ContentField::ServicesSubtitle => &self.services.subtitle,
            ContentField::ConsultationTitle => &self.consultation.title,
            ContentField::ConsultationSubtitle => &self.consultation.subtitle,
        }
    }

    /// Replace the text of an editable field
    pub fn set_content(&mut self, field: ContentField, value: impl Into<String>) {
        let slot = match field {
            ContentField::HeroBadge => &mut self.hero.badge,
            ContentField::HeroTitleMain => &mut self.hero.title_main,
            ContentField::HeroTitleItalic => &mut self.hero.title_italic,
            ContentField::HeroSubtitle => &mut self.hero.subtitle,
            ContentField::ServicesBadge => &mut self.services.badge,
            ContentField::ServicesTitle => &mut self.services.title,
            ContentField::ServicesSubtitle => &mut self.services.subtitle,
            ContentField::ConsultationTitle => &mut self.consultation.title,
            ContentField::ConsultationSubtitle => &mut self.consultation.subtitle,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_field_keys_round_trip() {
        for field in ContentField::ALL {
            assert_eq!(field.key().parse::<ContentField>().unwrap(), field);
        }
        assert!("hero.nonexistent".parse::<ContentField>().is_err());
    }

    #[test]
    fn test_set_content_touches_one_language() {
        let mut translations = Translations::default();
        let en_before = translations.en.clone();

        translations
            .get_mut(Language::Vi)
            .set_content(ContentField::HeroTitleMain, "Phong Cách Mới");

        assert_eq!(
            translations.vi.content(ContentField::HeroTitleMain),
            "Phong Cách Mới"
        );
        assert_eq!(translations.vi.hero.title_main, "Phong Cách Mới");
        assert_eq!(translations.en, en_before);
    }

    #[test]
    fn test_stored_json_uses_original_keys() {
        let json = serde_json::to_value(Translations::default()).unwrap();
        assert!(json["vi"]["hero"]["titleMain"].is_string());
        assert!(json["en"]["nav"]["aiConsult"].is_string());
        assert!(json["en"]["admin"]["stats"]["totalBookings"].is_string());
        assert!(json["vi"]["booking"]["step1"].is_string());
    }

    #[test]
    fn test_from_stored_fills_missing_fields() {
        let raw = r#"{"vi":{"hero":{"badge":"Tiệm Mới"}},"en":{}}"#;
        let translations = Translations::from_stored(raw).unwrap();
        let defaults = Translations::default();

        assert_eq!(translations.vi.hero.badge, "Tiệm Mới");
        assert_eq!(translations.vi.hero.title_main, defaults.vi.hero.title_main);
        assert_eq!(translations.en, defaults.en);
        assert!(Translations::from_stored(r#"{"vi":{"hero":{"badge":7}}}"#).is_err());
        assert!(Translations::from_stored("not json").is_err());
    }

    #[test]
    fn test_step_and_filter_labels() {
        let en = Translations::default().en;
        assert_eq!(en.booking.step_label(WizardStep::SelectingService), en.booking.step1);
        assert_eq!(en.booking.step_label(WizardStep::Success), en.booking.step4);
        assert_eq!(
            en.services.filter_label(CategoryFilter::Only(Category::Beard)),
            en.services.beard
        );
    }
}
