//! Booking
//!
//! The four-step reservation flow and the calendar rules it enforces:
//!
//! - **slots**: half-hour time slots and bookable dates
//! - **wizard**: the `BookingWizard` state machine that turns selections into
//!   a stored `Booking`

pub mod slots;
pub mod wizard;

pub use slots::{earliest_bookable_date, format_date, is_bookable_date, time_slots, TimeSlot};
pub use wizard::{
    BookingSummary, BookingWizard, CustomerInfo, ResetTicket, WizardError, WizardResult,
    WizardStep, RESET_DELAY, RESET_DELAY_MS,
};
