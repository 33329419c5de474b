//! # fleetdesk
//!
//! Leptos + WASM admin dashboard for a vehicle rental business. Pages and
//! tables are backed by an external REST API; the core of the crate is
//! the client-side session/authentication lifecycle (`auth`) and the
//! single request gateway every API call passes through (`net`).

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
