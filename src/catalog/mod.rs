//! Service Catalog
//!
//! Domain records for the barbershop and how they are presented:
//!
//! - **types**: services, barbers, bookings, social links, languages
//! - **defaults**: the seed catalog and barber roster
//! - **pricing**: locale-dependent price display (VND / USD)

mod defaults;
mod pricing;
mod types;

pub use defaults::{default_barbers, default_services, find_barber};
pub use pricing::{display_price, format_price, format_vnd, Money, VND_PER_USD};
pub use types::{
    find_service, timestamp_id, Barber, Booking, Category, CategoryFilter, Language,
    LocalizedText, Service, SocialLinks,
};
