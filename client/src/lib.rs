//! # comissao-ui
//!
//! Leptos + WASM frontend for the committee voting administration console.
//!
//! This crate contains pages, components, application state and the REST
//! client for the voting backend. The `comissao-admin` host renders it on the
//! server and the browser hydrates it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
