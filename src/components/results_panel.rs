//! Results Panel Component
//!
//! Loading indicator, error banner and the two rendered fragments.

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div id="loading-details" class="loading" hidden=move || !store.loading().get()>
            "Loading..."
        </div>
        <div id="error-message" class="error-message" hidden=move || !store.error_shown().get()>
            "Could not load that subreddit. Check the name and try again."
        </div>
        <div
            id="details"
            hidden=move || !store.results_shown().get()
            inner_html=move || store.details_html().get()
        ></div>
        <div
            id="results"
            hidden=move || !store.results_shown().get()
            inner_html=move || store.results_html().get()
        ></div>
    }
}
