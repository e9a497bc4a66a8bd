//! # incident-board
//!
//! Leptos + WASM single-page incident tracker. The collection lives in the
//! browser tab and is mirrored to `localStorage`; there is no server.
//!
//! Domain rules (numbering, status rotation, filtering, seed data, storage
//! fallback) live in the `incidents` crate. This crate holds the page,
//! components, reactive state, and the browser storage adapter. Browser-only
//! code is gated behind the `csr` feature so the crate also builds and tests
//! natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
