use super::*;

#[test]
fn starts_hidden_and_idle() {
    let c = ComposerState::default();
    assert!(!c.form_visible);
    assert!(!c.publishing);
    assert_eq!(c.submit_label(), PUBLISH_LABEL);
}

#[test]
fn show_then_hide_leaves_form_hidden_and_fields_empty() {
    let mut c = ComposerState::default();
    c.show();
    assert!(c.form_visible);
    c.title = "Draft title".to_owned();
    c.author = "Bo".to_owned();
    c.hide();
    assert!(!c.form_visible);
    assert!(c.title.is_empty());
    assert!(c.author.is_empty());
}

#[test]
fn hide_twice_matches_hide_once() {
    let mut once = ComposerState::default();
    once.show();
    once.title = "t".to_owned();
    once.hide();

    let mut twice = ComposerState::default();
    twice.show();
    twice.title = "t".to_owned();
    twice.hide();
    twice.hide();

    assert_eq!(once.form_visible, twice.form_visible);
    assert_eq!(once.title, twice.title);
    assert_eq!(once.author, twice.author);
}

#[test]
fn show_is_idempotent() {
    let mut c = ComposerState::default();
    c.show();
    c.show();
    assert!(c.form_visible);
}

#[test]
fn publish_flag_drives_label_and_restores_original() {
    let mut c = ComposerState::default();
    c.begin_publish();
    assert!(c.publishing);
    assert_eq!(c.submit_label(), PUBLISHING_LABEL);
    c.finish_publish();
    assert!(!c.publishing);
    assert_eq!(c.submit_label(), PUBLISH_LABEL);
}
