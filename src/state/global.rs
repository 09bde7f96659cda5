//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct DashboardState {
    /// Patient roster from the API
    pub roster: RwSignal<RosterState>,
    /// Patient currently open in the detail dialog, if any
    pub selected: RwSignal<Option<Patient>>,
    /// Total visit count for the selected patient
    pub visit_count: RwSignal<Option<u32>>,
    /// Whether the selected patient's first recorded visit was flagged new
    pub first_time_new: RwSignal<Option<bool>>,
}

/// Patient record from the API
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub new_patient: bool,
}

/// Per-patient visit statistics from the API
#[derive(Clone, Copy, Debug, serde::Deserialize, PartialEq)]
pub struct PatientStats {
    pub visit_count: u32,
    pub new_patient_first_time: bool,
}

/// Roster fetch lifecycle
///
/// `Loading` renders the same placeholder as an empty roster; the backend
/// returns quickly and the list starts empty either way. A failed fetch is
/// kept distinct so it is never mistaken for "no patients".
#[derive(Clone, Debug, PartialEq)]
pub enum RosterState {
    Loading,
    Loaded(Vec<Patient>),
    Failed,
}

impl RosterState {
    /// Patients to render, empty unless loaded
    pub fn patients(&self) -> &[Patient] {
        match self {
            RosterState::Loaded(patients) => patients,
            _ => &[],
        }
    }

    /// Placeholder row text, or `None` when there are rows to show
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            RosterState::Loading => Some("No patients found."),
            RosterState::Loaded(patients) if patients.is_empty() => Some("No patients found."),
            RosterState::Loaded(_) => None,
            RosterState::Failed => Some("Failed to load patients."),
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(DashboardState::new());
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            roster: create_rw_signal(RosterState::Loading),
            selected: create_rw_signal(None),
            visit_count: create_rw_signal(None),
            first_time_new: create_rw_signal(None),
        }
    }

    /// Open the detail dialog for a patient.
    ///
    /// Stats are cleared before the selection changes so a reopened dialog
    /// never shows numbers that belong to a previously viewed patient.
    pub fn open_details(&self, patient: Patient) {
        self.visit_count.set(None);
        self.first_time_new.set(None);
        self.selected.set(Some(patient));
    }

    /// Dismiss the detail dialog, clearing selection and stats
    pub fn close_details(&self) {
        self.selected.set(None);
        self.visit_count.set(None);
        self.first_time_new.set(None);
    }

    /// Apply a stats fetch outcome for `patient_id`.
    ///
    /// A response is only applied while `patient_id` is still the selected
    /// patient; a late response for a stale selection is discarded. `None`
    /// marks a failed fetch and leaves both stats fields unset, keeping the
    /// dialog usable without numbers.
    pub fn apply_stats(&self, patient_id: i64, stats: Option<PatientStats>) {
        let current = self.selected.with_untracked(|s| s.as_ref().map(|p| p.id));
        if current != Some(patient_id) {
            return;
        }

        match stats {
            Some(stats) => {
                self.visit_count.set(Some(stats.visit_count));
                self.first_time_new.set(Some(stats.new_patient_first_time));
            }
            None => {
                self.visit_count.set(None);
                self.first_time_new.set(None);
            }
        }
    }
}
