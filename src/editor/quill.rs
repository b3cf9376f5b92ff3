//! `wasm-bindgen` bindings for the Quill global loaded by the HTML shell.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
extern "C" {
    /// A Quill editor instance.
    pub type Quill;

    /// `new Quill(container, options)`.
    #[wasm_bindgen(constructor)]
    pub fn new(container: &web_sys::HtmlElement, options: &JsValue) -> Quill;

    /// The root editing element; its `innerHTML` is the current document.
    #[wasm_bindgen(method, getter)]
    pub fn root(this: &Quill) -> web_sys::Element;

    /// Replace the document with the given delta.
    #[wasm_bindgen(method, js_name = setContents)]
    pub fn set_contents(this: &Quill, delta: &JsValue);
}
