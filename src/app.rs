//! Subreddit Viewer App
//!
//! Root component: search form above the status banners and result panels.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ResultsPanel, SubredditForm};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{StorePort, UiState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(UiState::default());
    provide_context(store);

    // Provide dependencies to all children
    provide_context(AppContext::new(config, StorePort::new(store)));

    view! {
        <main class="subreddit-viewer">
            <h1>"Subreddit Viewer"</h1>
            <SubredditForm />
            <ResultsPanel />
        </main>
    }
}
