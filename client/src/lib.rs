//! # client
//!
//! Leptos + WASM frontend for the OpenAcre landing site.
//!
//! This crate contains the app shell, the five site views, their components,
//! view-model state, and typed local-storage persistence. Listing markers are
//! drawn through the `pinmap` crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
