//! Web UI for p2p-feed
//!
//! A Yew-based single page showing the P2P marketplace feed: navigation
//! bar, offers selector, the selected message and its sender's profile.

mod api;
mod app;
mod components;
mod state;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
