//! Translations
//!
//! Vietnamese and English copy for every UI surface, as a typed tree with
//! one named accessor per section.

mod defaults;
mod strings;

pub use strings::{
    AdminLabelStrings, AdminStatsStrings, AdminStrings, BookingStrings, ConciergeStrings,
    ConsultationStrings, ContentField, HeroStrings, NavStrings, ServicesStrings, Strings,
    Translations,
};
