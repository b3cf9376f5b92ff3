//! The post-store seam and the call-sequencing helpers built on it.
//!
//! DESIGN
//! ======
//! Pages depend on the `PostStore` trait rather than on HTTP details, so the
//! publish flow's call ordering (exactly one create, then at most one
//! refresh) can be exercised against scripted stores in unit tests.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::net::types::{CreatePostRequest, Post};

/// Failure modes of a store call. The UI collapses all of them into one
/// generic failure path; the variants exist for logging.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("store responded with status {0}")]
    Status(u16),
    #[error("malformed store response: {0}")]
    Decode(String),
    #[error("store call timed out")]
    TimedOut,
    #[error("store not reachable in this environment")]
    Unavailable,
}

/// The remote post store: create one post, or fetch the full collection in
/// store order. Both calls are plain request/response with no retry.
///
/// Callers are always generic over the store, so the futures never need to
/// be named or boxed.
#[allow(async_fn_in_trait)]
pub trait PostStore {
    async fn create_post(&self, req: &CreatePostRequest) -> Result<Post, StoreError>;
    async fn get_posts(&self) -> Result<Vec<Post>, StoreError>;
}

/// What the publish flow should render next.
#[derive(Debug)]
pub enum PublishOutcome {
    /// The post was stored. Carries the follow-up fetch result so the list
    /// can be re-rendered (or show its inline error if the refresh failed).
    Published(Result<Vec<Post>, StoreError>),
    /// The store rejected the post; the form stays open for another try.
    Failed(StoreError),
}

/// Publish a post and, on success only, re-fetch the collection.
///
/// `on_created` runs between the two calls — the caller hides the form and
/// starts its loading indicator there, before the refresh settles. Exactly
/// one `create_post` is issued per invocation; `get_posts` is skipped
/// entirely when the create fails.
pub async fn publish_and_refresh<S, F>(
    store: &S,
    req: &CreatePostRequest,
    on_created: F,
) -> PublishOutcome
where
    S: PostStore,
    F: FnOnce(),
{
    match store.create_post(req).await {
        Ok(_) => {
            on_created();
            PublishOutcome::Published(store.get_posts().await)
        }
        Err(err) => PublishOutcome::Failed(err),
    }
}
