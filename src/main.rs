//! Dentist Voice Agent Dashboard
//!
//! Patient roster dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Patient roster table fed by the dentist API
//! - Per-patient detail dialog with visit statistics
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the dentist patient API via HTTP.

use leptos::*;

mod api;
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
