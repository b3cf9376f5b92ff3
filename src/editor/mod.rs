//! Bridge to the page-level Quill rich-text editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editor widget is a black box loaded from the HTML shell; this module
//! owns its construction options, the `wasm-bindgen` bindings, and a handle
//! exposing the two operations the rest of the crate needs: read the
//! document as HTML and clear it. Everything browser-specific is gated on
//! `hydrate`; SSR builds get inert no-op behavior.

pub mod handle;
#[cfg(feature = "hydrate")]
pub mod quill;
pub mod toolbar;

pub use handle::EditorHandle;

/// Quill constructor options: snow theme plus the fixed toolbar.
#[cfg(feature = "hydrate")]
pub(crate) fn editor_options() -> wasm_bindgen::JsValue {
    let config = serde_json::json!({
        "theme": "snow",
        "modules": { "toolbar": toolbar::toolbar_groups() },
    });
    js_sys::JSON::parse(&config.to_string()).unwrap_or(wasm_bindgen::JsValue::NULL)
}
