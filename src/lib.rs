//! # base-claim
//!
//! Leptos + WASM front-end for the Base Claim mini-app: wallet sign-in,
//! campaign browsing and creation, and hold-to-claim.
//!
//! Domain logic lives in the `claims` crate. This crate contains the app
//! shell, pages, components, UI state, and the browser implementations of the
//! wallet provider, timer scheduler, and host container.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let (config, config_error) = claims::AppConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    if let Some(e) = config_error {
        log::warn!("using default config: {e}");
    }
    log::info!("{} starting", config.app_name);

    leptos::mount::mount_to_body(move || {
        view! { <App config=config.clone()/> }
    });
}
