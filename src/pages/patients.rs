//! Patients Page
//!
//! Roster table with a View action per patient.

use leptos::*;

use crate::api;
use crate::components::YesNo;
use crate::state::global::{DashboardState, Patient, RosterState};

/// Patient roster page
#[component]
pub fn Patients() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Extract the signals we need
    let roster = state.roster;

    // Fetch the roster on mount; no retry, order comes from the backend
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_patients().await {
                Ok(patients) => {
                    state.roster.set(RosterState::Loaded(patients));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch patients: {}", e).into());
                    state.roster.set(RosterState::Failed);
                }
            }
        });
    });

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <table class="w-full text-left">
                <thead>
                    <tr class="bg-indigo-50">
                        <th class="px-4 py-2">"First Name"</th>
                        <th class="px-4 py-2">"Last Name"</th>
                        <th class="px-4 py-2">"Phone"</th>
                        <th class="px-4 py-2">"Address"</th>
                        <th class="px-4 py-2">"New Patient"</th>
                        <th class="px-4 py-2"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let roster = roster.get();
                        if let Some(message) = roster.placeholder() {
                            view! {
                                <tr>
                                    <td colspan="6" class="text-center text-gray-400 py-4">
                                        {message}
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            roster.patients().iter().cloned().map(|patient| {
                                view! { <PatientRow patient=patient /> }
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Single roster row
#[component]
fn PatientRow(patient: Patient) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Show the dialog right away, then fill stats in when they arrive.
    // The response is applied through apply_stats so a late response for a
    // patient who is no longer selected gets discarded.
    let on_view = {
        let patient = patient.clone();
        move |_| {
            let state = state.clone();
            let id = patient.id;
            state.open_details(patient.clone());
            spawn_local(async move {
                match api::fetch_patient_stats(id).await {
                    Ok(stats) => {
                        state.apply_stats(id, Some(stats));
                    }
                    Err(e) => {
                        web_sys::console::warn_1(
                            &format!("Failed to fetch stats for patient {}: {}", id, e).into(),
                        );
                        state.apply_stats(id, None);
                    }
                }
            });
        }
    };

    view! {
        <tr class="hover:bg-gray-50 transition">
            <td class="px-4 py-2">{patient.first_name.clone()}</td>
            <td class="px-4 py-2">{patient.last_name.clone()}</td>
            <td class="px-4 py-2">{patient.phone_number.clone()}</td>
            <td class="px-4 py-2">{patient.address.clone()}</td>
            <td class="px-4 py-2">
                <YesNo value=patient.new_patient />
            </td>
            <td class="px-4 py-2">
                <button
                    on:click=on_view
                    class="px-3 py-1 border border-indigo-200 text-indigo-600 rounded-lg
                           hover:bg-indigo-50 transition-colors"
                >
                    "View"
                </button>
            </td>
        </tr>
    }
}
