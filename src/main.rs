//! Todo Frontend Entry Point

mod app;
mod components;
mod context;

use app::App;
use leptos::prelude::*;

/// Console log level, overridable at build time with `TODO_LOG_LEVEL`
fn log_level() -> log::Level {
    option_env!("TODO_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::Level::Info)
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level()) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    mount_to_body(App);
}
