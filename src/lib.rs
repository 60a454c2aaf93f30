//! # trackboard
//!
//! Leptos + WASM single-page client for the Trackboard project and
//! issue-tracking product.
//!
//! This crate contains the route table and navigation guard, per-form input
//! schemas, the injected session store, the typed REST client, and the pages
//! and components that tie them together. Everything except the browser
//! transport and storage glue is plain Rust and unit-tested on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::ClientConfig::from_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("trackboard client starting; api at {}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
