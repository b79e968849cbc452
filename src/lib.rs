//! # parking-client
//!
//! Leptos + WASM front-end for the parking reservation system.
//!
//! This crate contains the session store (auth state persisted to
//! `localStorage`), the REST client that injects the bearer credential and
//! reacts to auth rejections, the guarded route table, and the pages that sit
//! on top of them. Booking and administration logic lives behind the HTTP API.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
