//! Web UI for zome-scaffold
//!
//! A Yew-based browser front end for interactively describing a zomes
//! configuration and mirroring it into annotated YAML.

mod app;
mod components;
mod i18n;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
