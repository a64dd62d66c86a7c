//! Items Frontend Entry Point

mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = browser_logger::init(level) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }

    mount_to_body(App);
}
