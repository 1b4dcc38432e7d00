//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! Page behavior (active section, progress, theme, loading gate) lives in the
//! browser-free `nav` crate. This crate renders it, wires DOM events into
//! `nav::page::PageCore`, and performs the actions it returns.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
