//! # postboard
//!
//! Leptos + WASM frontend for a blog-style posting application. Renders a
//! rich-text editor for composing posts, submits them to a remote post
//! store, and renders the stored collection as cards.
//!
//! This crate contains pages, components, application state, network types,
//! and the bridge to the page-level Quill editor widget. The remote store is
//! an opaque collaborator reached through the `net::store::PostStore` seam.

pub mod app;
pub mod components;
pub mod editor;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the server-rendered
/// document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
