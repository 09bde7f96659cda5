//! App Root Component
//!
//! Page shell with the global state provider.

use leptos::*;

use crate::components::PatientDialog;
use crate::pages::Patients;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <main class="min-h-screen bg-gray-100 p-10">
            <div class="max-w-5xl mx-auto space-y-6">
                <h1 class="text-4xl font-bold text-center text-indigo-600">
                    "🦷 Dentist Voice Agent Dashboard"
                </h1>
                <p class="text-center text-gray-600">"Manage patients created via voice input"</p>

                <Patients />

                <PatientDialog />
            </div>
        </main>
    }
}
