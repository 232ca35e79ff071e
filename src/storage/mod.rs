//! LuxeCut Persisted Store
//!
//! This module provides the site's persistence layer:
//!
//! - **backend**: string-keyed storage (memory, files; the UI adds browser
//!   local storage)
//! - **store**: the `PersistedStore` holding services, bookings, social links
//!   and translations
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//! Load:
//!   open(backend) → read key → parse JSON → (corrupt/missing → defaults)
//!
//! Write:
//!   setter → update in memory → serialize collection → backend.set_item
//! ```
//!
//! # Example
//!
//! ```rust
//! use luxecut::storage::{MemoryBackend, PersistedStore};
//!
//! let mut store = PersistedStore::open(MemoryBackend::new());
//! assert!(!store.services().is_empty());
//!
//! let mut links = store.social_links().clone();
//! links.instagram = "https://instagram.com/luxecut".to_string();
//! store.set_social_links(links).unwrap();
//!
//! let backend = store.close().unwrap();
//! let reopened = PersistedStore::open(backend);
//! assert_eq!(reopened.social_links().instagram, "https://instagram.com/luxecut");
//! ```

pub mod backend;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::{StorageError, StorageResult};
pub use store::{
    PersistedStore, StoreStats, BOOKINGS_KEY, SERVICES_KEY, SOCIAL_KEY, TRANSLATIONS_KEY,
};
