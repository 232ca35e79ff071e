//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
pub mod home;

pub use admin::Admin;
pub use home::Home;
