//! Telegram Mini App client for the MNT marketplace.
//!
//! Runs inside the Telegram WebApp container; the host supplies the user's
//! identity and the init-data token, the REST API holds all state.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;
use services::telegram;

#[wasm_bindgen(start)]
pub fn main() {
    // Readable panics in the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("MNT marketplace mini app starting");

    // Tell the host we are ready and take the full viewport. Both are no-ops
    // outside Telegram; session checks happen later, at view activation.
    telegram::notify_ready();
    telegram::expand_viewport();

    leptos::mount::mount_to_body(|| view! { <App/> });
}
