use super::*;

#[test]
fn detached_handle_reads_empty_document() {
    let handle = EditorHandle::default();
    assert!(!handle.is_attached());
    assert_eq!(handle.html(), "");
}

#[test]
fn clear_on_detached_handle_is_harmless_and_idempotent() {
    let handle = EditorHandle::default();
    handle.clear();
    handle.clear();
    assert_eq!(handle.html(), "");
}

#[test]
fn clones_share_detached_state() {
    let handle = EditorHandle::default();
    let clone = handle.clone();
    assert_eq!(handle.is_attached(), clone.is_attached());
}
