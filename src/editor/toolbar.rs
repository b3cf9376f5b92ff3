//! Fixed toolbar layout for the post editor.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

/// Toolbar groups in Quill's configuration format: inline styling, block
/// quoting, headers, lists, sub/superscript, indentation, link/image
/// insertion, and formatting-clear.
pub fn toolbar_groups() -> serde_json::Value {
    serde_json::json!([
        ["bold", "italic", "underline", "strike"],
        ["blockquote", "code-block"],
        [{ "header": 1 }, { "header": 2 }],
        [{ "list": "ordered" }, { "list": "bullet" }],
        [{ "script": "sub" }, { "script": "super" }],
        [{ "indent": "-1" }, { "indent": "+1" }],
        ["link", "image"],
        ["clean"],
    ])
}
