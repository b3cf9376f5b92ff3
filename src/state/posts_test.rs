use super::*;

fn post(title: &str) -> Post {
    Post {
        title: title.to_owned(),
        body: "<p>x</p>".to_owned(),
        author: "Bo".to_owned(),
        timestamp: 1_000_000,
    }
}

#[test]
fn defaults_to_idle_and_empty() {
    let s = PostsState::default();
    assert!(s.posts.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn begin_load_sets_loading_and_clears_stale_error() {
    let mut s = PostsState::default();
    s.error = Some("old".to_owned());
    s.begin_load();
    assert!(s.loading);
    assert!(s.error.is_none());
}

#[test]
fn finish_load_with_empty_store_renders_no_cards_and_no_error() {
    let mut s = PostsState::default();
    s.begin_load();
    s.finish_load(Ok(Vec::new()));
    assert!(!s.loading);
    assert!(s.posts.is_empty());
    assert!(s.error.is_none());
}

#[test]
fn finish_load_replaces_previous_collection() {
    let mut s = PostsState::default();
    s.finish_load(Ok(vec![post("first")]));
    s.begin_load();
    s.finish_load(Ok(vec![post("second"), post("third")]));
    assert_eq!(s.posts.len(), 2);
    assert_eq!(s.posts[0].title, "second");
}

#[test]
fn finish_load_failure_clears_list_and_sets_static_message() {
    let mut s = PostsState::default();
    s.finish_load(Ok(vec![post("kept?")]));
    s.begin_load();
    s.finish_load(Err(StoreError::TimedOut));
    assert!(!s.loading);
    assert!(s.posts.is_empty());
    assert_eq!(s.error.as_deref(), Some(LOAD_FAILED_TEXT));
}
