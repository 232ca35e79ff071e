//! Dashboard overview and bookings table

use serde::Serialize;
use std::str::FromStr;

use crate::catalog::{format_vnd, Language};
use crate::i18n::AdminStrings;
use crate::storage::{PersistedStore, StorageBackend};

/// Shown in place of a service title when the service no longer exists
pub const MISSING_SERVICE_LABEL: &str = "N/A";

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdminTab {
    #[default]
    Overview,
    Bookings,
    Services,
    Content,
}

impl AdminTab {
    /// Tabs in header order
    pub fn all() -> &'static [AdminTab] {
        &[
            AdminTab::Overview,
            AdminTab::Bookings,
            AdminTab::Services,
            AdminTab::Content,
        ]
    }

    /// Localized tab label
    pub fn label<'a>(&self, strings: &'a AdminStrings) -> &'a str {
        match self {
            AdminTab::Overview => &strings.overview,
            AdminTab::Bookings => &strings.bookings_tab,
            AdminTab::Services => &strings.services_tab,
            AdminTab::Content => &strings.content_tab,
        }
    }
}

impl FromStr for AdminTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(AdminTab::Overview),
            "bookings" => Ok(AdminTab::Bookings),
            "services" => Ok(AdminTab::Services),
            "content" => Ok(AdminTab::Content),
            other => Err(format!("unknown admin tab: {}", other)),
        }
    }
}

/// Totals shown on the overview tab
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of all booking prices, in VND, saturating at `u64::MAX`
    pub revenue: u64,
    pub total_bookings: usize,
    pub active_services: usize,
}

impl DashboardStats {
    pub fn compute<B: StorageBackend>(store: &PersistedStore<B>) -> Self {
        Self {
            revenue: store
                .bookings()
                .iter()
                .fold(0u64, |sum, b| sum.saturating_add(b.total_price)),
            total_bookings: store.bookings().len(),
            active_services: store.services().len(),
        }
    }

    /// Revenue formatted in VND whatever the UI language
    pub fn revenue_display(&self) -> String {
        format_vnd(self.revenue)
    }
}

/// One row of the read-only bookings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRow {
    pub booking_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub service_title: String,
    /// `date | time`
    pub when: String,
    /// Stored price formatted in VND
    pub price: String,
}

/// Rows for the bookings table, in storage order
pub fn booking_rows<B: StorageBackend>(store: &PersistedStore<B>, lang: Language) -> Vec<BookingRow> {
    store
        .bookings()
        .iter()
        .map(|booking| BookingRow {
            booking_id: booking.id.clone(),
            customer_name: booking.customer_name.clone(),
            customer_phone: booking.customer_phone.clone(),
            service_title: store
                .service(&booking.service_id)
                .map(|s| s.title_in(lang).to_string())
                .unwrap_or_else(|| MISSING_SERVICE_LABEL.to_string()),
            when: format!("{} | {}", booking.date, booking.time),
            price: format_vnd(booking.total_price),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Booking;
    use crate::i18n::Translations;
    use crate::storage::{MemoryBackend, BOOKINGS_KEY};

    fn booking(id: &str, service_id: &str, price: u64) -> Booking {
        Booking {
            id: id.to_string(),
            service_id: service_id.to_string(),
            barber_id: "b2".to_string(),
            date: "2026-11-02".to_string(),
            time: "14:30".to_string(),
            customer_name: "Tuấn".to_string(),
            customer_phone: "0909".to_string(),
            total_price: price,
        }
    }

    #[test]
    fn test_stats_sum_booking_prices() {
        let mut store = PersistedStore::open(MemoryBackend::new());
        assert_eq!(DashboardStats::compute(&store).revenue, 0);

        store.append_booking(booking("1", "1", 250_000)).unwrap();
        store.append_booking(booking("2", "4", 150_000)).unwrap();

        let stats = DashboardStats::compute(&store);
        assert_eq!(stats.revenue, 400_000);
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.active_services, 6);
        assert_eq!(stats.revenue_display(), "400.000 ₫");
    }

    #[test]
    fn test_revenue_saturates_on_oversized_stored_prices() {
        let raw = r#"[
            {"id":"1","serviceId":"1","barberId":"b1","date":"2026-11-02","time":"10:00",
             "customerName":"A","customerPhone":"1","totalPrice":18000000000000000000},
            {"id":"2","serviceId":"1","barberId":"b1","date":"2026-11-02","time":"10:30",
             "customerName":"B","customerPhone":"2","totalPrice":18000000000000000000}
        ]"#;
        let store = PersistedStore::open(MemoryBackend::new().with_item(BOOKINGS_KEY, raw));
        assert_eq!(store.bookings().len(), 2);

        let stats = DashboardStats::compute(&store);
        assert_eq!(stats.revenue, u64::MAX);
        assert_eq!(stats.total_bookings, 2);
    }

    #[test]
    fn test_booking_rows() {
        let mut store = PersistedStore::open(MemoryBackend::new());
        store.append_booking(booking("1", "1", 250_000)).unwrap();
        store.append_booking(booking("2", "gone", 90_000)).unwrap();

        let rows = booking_rows(&store, Language::En);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].service_title, "Signature Cut");
        assert_eq!(rows[0].when, "2026-11-02 | 14:30");
        assert_eq!(rows[0].price, "250.000 ₫");
        assert_eq!(rows[1].service_title, MISSING_SERVICE_LABEL);
    }

    #[test]
    fn test_tab_labels_follow_language() {
        let translations = Translations::default();
        let tab: AdminTab = "bookings".parse().unwrap();
        assert_eq!(
            tab.label(&translations.en.admin),
            translations.en.admin.bookings_tab
        );
        assert!("settings".parse::<AdminTab>().is_err());
        assert_eq!(AdminTab::all().len(), 4);
    }
}
