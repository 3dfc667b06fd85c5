//! Browser wallet connect page for Concordium dapps
//!
//! Mounts the Leptos app that runs the wallet-connection handshake.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod services;
mod state;
mod utils;

use app::App;
use utils::config::load_connector_config;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Wallet connect page starting");

    let config = load_connector_config();
    hide_loading_screen();

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}

/// Hide the static loading placeholder once the wasm bundle runs
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    match document.get_element_by_id(LOADING_ELEMENT_ID) {
        Some(element) => {
            if let Err(e) = element.set_attribute("style", "display: none !important;") {
                log::warn!("Failed to hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("Loading element '{}' not found", LOADING_ELEMENT_ID),
    }
}
