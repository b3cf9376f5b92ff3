//! Post-list state for the board view.
//!
//! DESIGN
//! ======
//! The list is re-fetched in full on every load; there is no client-side
//! cache or merge. A failed load clears the list and replaces it with a
//! static error message, so rendering is a pure function of this state.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::net::store::StoreError;
use crate::net::types::Post;

/// Inline message shown in place of the list when a fetch fails.
pub const LOAD_FAILED_TEXT: &str = "Error loading posts. Please try again later.";

/// Shared post-list state: the fetched collection plus loading/error flags.
#[derive(Clone, Debug, Default)]
pub struct PostsState {
    /// Posts in store order; never reordered client-side.
    pub posts: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PostsState {
    /// Start a load cycle: show the loading indicator and drop any stale
    /// error from a previous attempt.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a fetch. Success replaces the whole collection;
    /// failure clears it and surfaces the static inline message.
    pub fn finish_load(&mut self, result: Result<Vec<Post>, StoreError>) {
        self.loading = false;
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.error = None;
            }
            Err(_) => {
                self.posts.clear();
                self.error = Some(LOAD_FAILED_TEXT.to_owned());
            }
        }
    }
}
