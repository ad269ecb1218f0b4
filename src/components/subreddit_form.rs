//! Subreddit Form Component
//!
//! Text field plus submit button; each submit hands off to the orchestrator.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::RedditClient;
use crate::context::AppContext;
use crate::orchestrator::Orchestrator;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn SubredditForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Taken before spawning so a later submit always supersedes this one
        let ticket = ctx.guard.begin();
        let ctx = ctx.clone();

        spawn_local(async move {
            let client = RedditClient::new(ctx.config.api_base.as_str());
            let outcome = Orchestrator::new(&client, &ctx.templates, &ctx.port, ticket)
                .handle_submit()
                .await;
            log::debug!("[FORM] submission finished: {:?}", outcome);
        });
    };

    view! {
        <form id="enter-subreddit" class="subreddit-form" on:submit=on_submit>
            <input
                type="text"
                id="subreddit-input"
                placeholder="Enter a subreddit, e.g. funny"
                prop:value=move || store.input().get()
                on:input=move |ev| {
                    if let Some(input) = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                    {
                        store.input().set(input.value());
                    }
                }
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
