//! LuxeCut Site
//!
//! Barbershop booking site built with Leptos (WASM).
//!
//! # Features
//!
//! - Service catalog with category filters and localized prices
//! - Four-step booking wizard
//! - AI grooming consultation and concierge chat
//! - Admin dashboard for services, bookings and site copy
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data lives in browser local storage through the
//! `luxecut` store; the only network traffic is the generative-language API.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
