//! State Management
//!
//! Global application state shared across the dashboard.

pub mod global;

pub use global::{provide_global_state, DashboardState, Patient, PatientStats, RosterState};
