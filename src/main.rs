#![allow(warnings)]
//! Subreddit Viewer Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod extract;
mod guard;
mod logger;
mod markdown;
mod models;
mod orchestrator;
mod store;
mod templates;
mod ui;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(err) = logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", err).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
