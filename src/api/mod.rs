//! API Client
//!
//! HTTP access to the dentist patient service.

pub mod client;

pub use client::*;
