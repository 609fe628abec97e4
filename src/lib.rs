//! # panelprompt-auth
//!
//! Leptos + WASM client for the PanelPrompt sign-in page: a login form and a
//! signup form behind two tabs, both posting JSON to the auth API and showing
//! the outcome inline.
//!
//! Browser-only plumbing (fetch, timers, `window.location`) is compiled under
//! the `csr` feature. Everything that decides *what* happens lives in plain
//! Rust modules and is tested natively.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let config = config::PortalConfig::from_document();
    log::info!(
        "mounting auth portal (initial tab: {}, api base: {:?})",
        config.initial_tab,
        config.api_base
    );
    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config/> });
}
