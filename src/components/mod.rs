//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod patient_dialog;
pub mod yes_no;

pub use patient_dialog::PatientDialog;
pub use yes_no::YesNo;
