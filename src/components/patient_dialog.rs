//! Patient Detail Dialog
//!
//! Modal overlay showing the selected patient's record plus visit stats.
//! Visible only while a selection is active; the stats lines appear once
//! their values arrive and are omitted while loading or after a failed
//! stats fetch.

use leptos::*;

use crate::components::YesNo;
use crate::state::global::DashboardState;

/// Patient detail modal
#[component]
pub fn PatientDialog() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Extract the signals we need
    let selected = state.selected;
    let visit_count = state.visit_count;
    let first_time_new = state.first_time_new;

    view! {
        {move || {
            selected.get().map(|patient| {
                let state = state.clone();
                view! {
                    <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                        <div class="bg-white rounded-xl shadow-lg p-6 w-full max-w-md mx-4">
                            <div class="flex items-center justify-between mb-6">
                                <h2 class="text-xl font-semibold">"Patient Details"</h2>
                                <button
                                    on:click=move |_| state.close_details()
                                    class="text-gray-400 hover:text-gray-600"
                                >
                                    "✕"
                                </button>
                            </div>

                            <div class="space-y-3 text-gray-700">
                                <p><strong>"First Name: "</strong>{patient.first_name.clone()}</p>
                                <p><strong>"Last Name: "</strong>{patient.last_name.clone()}</p>
                                <p><strong>"Phone: "</strong>{patient.phone_number.clone()}</p>
                                <p><strong>"Address: "</strong>{patient.address.clone()}</p>
                                <p>
                                    <strong>"New Patient: "</strong>
                                    <YesNo value=patient.new_patient />
                                </p>

                                {move || visit_count.get().map(|count| view! {
                                    <p><strong>"Visits: "</strong>{count}</p>
                                })}

                                {move || first_time_new.get().map(|first| view! {
                                    <p>
                                        <strong>"First-time New: "</strong>
                                        <YesNo value=first />
                                    </p>
                                })}
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
