//! Client Form Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod timer;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    tracing::info!("starting client form frontend");
    mount_to_body(App);
}
