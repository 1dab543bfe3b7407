//! Kanban Board Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    mount_to_body(App);
}
