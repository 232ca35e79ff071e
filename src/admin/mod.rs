//! Admin Dashboard
//!
//! Operations behind the `/admin` surface:
//!
//! - **services**: the add/edit form and service create, update, delete
//! - **dashboard**: overview totals and the read-only bookings table
//! - **editor**: staged translation and social link editors
//! - **error**: Error types
//!
//! The dashboard has no access control.

pub mod dashboard;
pub mod editor;
pub mod error;
pub mod services;

pub use dashboard::{booking_rows, AdminTab, BookingRow, DashboardStats, MISSING_SERVICE_LABEL};
pub use editor::{SocialLinksEditor, SocialNetwork, StagedEditor, TranslationEditor};
pub use error::{AdminError, AdminResult};
pub use services::{
    delete_service, parse_duration, parse_price, save_service, slugify, ServiceForm,
    DEFAULT_DURATION,
};
