//! WASM entry point
//!
//! Trunk compiles this to WASM. It installs the panic hook and console
//! logging, then mounts the App component to the document body.

use goalboard_core::BoardConfig;
use goalboard_ui::{App, config, logging};
use leptos::prelude::*;

fn main() {
    // Readable panics in the browser console
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (BoardConfig::default(), Some(e)),
    };
    logging::init(&config);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Embedded configuration rejected, using defaults");
    }

    mount_to_body(move || {
        view! {
            <App config=config.clone() />
        }
    });
}
