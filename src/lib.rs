//! # signalfx-client
//!
//! Leptos + WASM frontend for the SmartSignalFX forex signal service.
//!
//! This crate owns the browser side of authentication: the persisted bearer
//! credential, startup session resolution, email/password and OAuth sign-in,
//! and the route gate that decides which views a visitor may see. Pages and
//! components render on top of that session state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
