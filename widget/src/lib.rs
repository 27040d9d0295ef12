//! # chat-widget
//!
//! Leptos + WASM embeddable chat widget: a floating toggle that expands into
//! a support menu and a conversation view with rich bot messages.
//!
//! The `csr` build is the browser bundle: its start function registers the
//! `<agodify-chatbot>` / `<agodify-fullchatbot>` tags, mounting a widget into
//! each one on the host page now or later and unmounting it when the tag goes
//! away. The `ssr` build adds [`app`], the server-rendered demo host page.

#[cfg(feature = "ssr")]
pub mod app;
pub mod components;
pub mod embed;
pub mod model;
pub mod state;
pub mod styles;
pub mod util;

/// WASM entry point: panic hook, console logger, then register the tags.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    embed::register_widgets();
}
