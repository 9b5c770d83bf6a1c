//! # revx-client
//!
//! Leptos + WASM frontend shell for the Revolution X trading dashboard.
//!
//! This crate contains the route tree, layouts, pages, components, and the
//! pure shell state (sidebar state machine, navigation table, error-boundary
//! bookkeeping, status source). Auth screens are inert stand-ins until the
//! auth service exists.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod layouts;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) leaves the first logger in place.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
