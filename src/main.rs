//! Team Dashboard Frontend Entry Point

mod app;
mod charts;
mod commands;
mod components;
mod context;
mod format;
mod history;
mod markdown;
mod models;
mod notify;
mod plot;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
