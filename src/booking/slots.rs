//! Bookable dates and time slots
//!
//! Appointments start on the half hour between 09:00 and 20:30 inclusive,
//! on any date from today onward.

use chrono::{NaiveDate, NaiveTime, Timelike};
use std::str::FromStr;

/// First bookable slot, in minutes after midnight (09:00)
const FIRST_SLOT_MINUTES: u32 = 9 * 60;
/// Last bookable slot, in minutes after midnight (20:30)
const LAST_SLOT_MINUTES: u32 = 20 * 60 + 30;
/// Slot spacing in minutes
const SLOT_STEP_MINUTES: u32 = 30;

/// A half-hour appointment start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Build a slot from an hour and minute, if it is a bookable slot
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        let minutes = hour.checked_mul(60)?.checked_add(minute)?;
        if minute >= 60
            || minutes < FIRST_SLOT_MINUTES
            || minutes > LAST_SLOT_MINUTES
            || minute % SLOT_STEP_MINUTES != 0
        {
            return None;
        }
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeSlot)
    }

    /// Parse `HH:MM` (`9:30` is accepted too)
    pub fn parse(s: &str) -> Option<Self> {
        let (hour, minute) = s.trim().split_once(':')?;
        Self::new(hour.parse().ok()?, minute.parse().ok()?)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::parse(s).ok_or_else(|| {
            format!(
                "invalid time slot {:?}: expected a half-hour between 09:00 and 20:30",
                s
            )
        })
    }
}

/// Every bookable slot of a day, in order (24 slots)
pub fn time_slots() -> Vec<TimeSlot> {
    (FIRST_SLOT_MINUTES..=LAST_SLOT_MINUTES)
        .step_by(SLOT_STEP_MINUTES as usize)
        .filter_map(|m| TimeSlot::new(m / 60, m % 60))
        .collect()
}

/// The minimum date the date picker accepts
pub fn earliest_bookable_date(today: NaiveDate) -> NaiveDate {
    today
}

/// Whether `date` can be booked when the current date is `today`
pub fn is_bookable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date >= earliest_bookable_date(today)
}

/// Calendar date in the stored booking format (`YYYY-MM-DD`)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
