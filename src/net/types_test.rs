use super::*;

#[test]
fn post_deserializes_with_integer_timestamp() {
    let json = r#"{"title":"A","body":"<p>x</p>","author":"Bo","timestamp":1000000}"#;
    let post: Post = serde_json::from_str(json).expect("post");
    assert_eq!(post.title, "A");
    assert_eq!(post.author, "Bo");
    assert_eq!(post.body, "<p>x</p>");
    assert_eq!(post.timestamp, 1_000_000);
}

#[test]
fn post_deserializes_with_float_timestamp() {
    let json = r#"{"title":"A","body":"","author":"Bo","timestamp":1000000.0}"#;
    let post: Post = serde_json::from_str(json).expect("post");
    assert_eq!(post.timestamp, 1_000_000);
}

#[test]
fn post_rejects_fractional_timestamp() {
    let json = r#"{"title":"A","body":"","author":"Bo","timestamp":0.5}"#;
    assert!(serde_json::from_str::<Post>(json).is_err());
}

#[test]
fn post_rejects_negative_timestamp() {
    let json = r#"{"title":"A","body":"","author":"Bo","timestamp":-1}"#;
    assert!(serde_json::from_str::<Post>(json).is_err());
}

#[test]
fn post_rejects_string_timestamp() {
    let json = r#"{"title":"A","body":"","author":"Bo","timestamp":"soon"}"#;
    assert!(serde_json::from_str::<Post>(json).is_err());
}

#[test]
fn create_request_serializes_all_three_fields() {
    let req = CreatePostRequest {
        title: "A".to_owned(),
        body: "<p>x</p>".to_owned(),
        author: "Bo".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("json");
    assert_eq!(
        value,
        serde_json::json!({"title": "A", "body": "<p>x</p>", "author": "Bo"})
    );
}

#[test]
fn post_collection_preserves_store_order() {
    let json = r#"[
        {"title":"newest","body":"","author":"a","timestamp":3},
        {"title":"oldest","body":"","author":"b","timestamp":1},
        {"title":"middle","body":"","author":"c","timestamp":2}
    ]"#;
    let posts: Vec<Post> = serde_json::from_str(json).expect("posts");
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["newest", "oldest", "middle"]);
}
