//! # schedule-board
//!
//! Leptos + WASM dashboard for weekly collection schedules.
//!
//! The crate renders a sortable schedule table with an edit dialog, keeps a
//! local copy of the list merged from server snapshots, and sends delete and
//! update requests to the schedules REST API with toast feedback.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
