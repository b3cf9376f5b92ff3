//! HTTP implementation of the post store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by a
//! fixed timeout budget so a hung call surfaces as a failure instead of
//! leaving the UI disabled.
//! Server-side (SSR): stubs returning `StoreError::Unavailable` since the
//! store is only reachable from the browser.

#![allow(clippy::unused_async)]

use crate::net::store::{PostStore, StoreError};
use crate::net::types::{CreatePostRequest, Post};

/// Collection endpoint: `GET` fetches all posts, `POST` creates one.
pub const POSTS_ENDPOINT: &str = "/api/posts";

/// Budget for a single store call, in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// `PostStore` backed by the remote HTTP store.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemoteStore;

impl PostStore for RemoteStore {
    async fn create_post(&self, req: &CreatePostRequest) -> Result<Post, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(POSTS_ENDPOINT)
                .json(req)
                .map_err(|e| StoreError::Network(e.to_string()))?;
            let resp = send_with_timeout(request).await?;
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            resp.json::<Post>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = req;
            Err(StoreError::Unavailable)
        }
    }

    async fn get_posts(&self) -> Result<Vec<Post>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(POSTS_ENDPOINT).build()
                .map_err(|e| StoreError::Network(e.to_string()))?;
            let resp = send_with_timeout(request).await?;
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            resp.json::<Vec<Post>>()
                .await
                .map_err(|e| StoreError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable)
        }
    }
}

/// Send a request, racing it against the timeout budget.
#[cfg(feature = "hydrate")]
async fn send_with_timeout(
    request: gloo_net::http::Request,
) -> Result<gloo_net::http::Response, StoreError> {
    use futures::future::{Either, select};
    use std::pin::pin;

    let send = pin!(request.send());
    let timeout = pin!(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| StoreError::Network(e.to_string())),
        Either::Right(((), _)) => Err(StoreError::TimedOut),
    }
}
