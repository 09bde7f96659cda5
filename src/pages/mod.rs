//! Pages
//!
//! Top-level page components.

pub mod patients;

pub use patients::Patients;
