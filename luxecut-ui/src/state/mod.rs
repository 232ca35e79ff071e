//! State Management
//!
//! Application context and the browser storage backend.

pub mod global;
pub mod storage;

pub use global::{provide_app_context, use_app, AppContext};
