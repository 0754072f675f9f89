//! AllVale Site Frontend Entry Point

mod actions;
mod app;
mod components;
mod config;
mod context;
mod engine;
mod logging;
mod markdown;
mod models;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);

    match config::detect() {
        Ok(setup) => mount_to_body(move || view! { <App setup=setup /> }),
        Err(err) => tracing::error!(error = %err, "[Main] cannot read page setup"),
    }
}
