//! # dropchat
//!
//! Leptos + WASM client for a single page that hosts two independent widgets:
//! a drag-and-drop file uploader with progress feedback and a polled chat
//! transcript.
//!
//! State transitions live in plain structs under `state` so they compile and
//! test natively. Everything that touches the DOM, `fetch`, or
//! `XMLHttpRequest` is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(|| view! { <App/> });
}
