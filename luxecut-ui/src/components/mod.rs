//! UI Components
//!
//! Reusable Leptos components for the site.

pub mod booking_modal;
pub mod concierge;
pub mod consultation;
pub mod loading;
pub mod nav;
pub mod service_card;
pub mod toast;

pub use booking_modal::BookingModal;
pub use concierge::Concierge;
pub use consultation::Consultation;
pub use loading::InlineLoading;
pub use nav::Nav;
pub use service_card::ServiceCard;
pub use toast::Toast;
