//! Board page: initial load, new-post trigger, form and list composition.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single route. It fetches the full collection once on mount
//! and coordinates the show-form / cancel / publish interaction loop
//! through the shared composer and post-list state.

use leptos::prelude::*;

use crate::components::post_form::PostForm;
use crate::components::post_list::PostList;
use crate::state::composer::ComposerState;
use crate::state::posts::PostsState;

/// Board page — shows the post collection and the creation form.
#[component]
pub fn HomePage() -> impl IntoView {
    let posts = expect_context::<RwSignal<PostsState>>();
    let composer = expect_context::<RwSignal<ComposerState>>();

    // Initial fetch — runs once after mount.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_posts(posts);
    });

    let on_new_post = move |_| composer.update(ComposerState::show);

    view! {
        <div class="post-board">
            <header class="post-board__header">
                <h1>"PostBoard"</h1>
                <button
                    class="btn btn--primary post-board__new"
                    style:display=move || if composer.get().form_visible { "none" } else { "block" }
                    on:click=on_new_post
                >
                    "+ New Post"
                </button>
            </header>

            <PostForm/>
            <PostList/>
        </div>
    }
}

/// Start a full load-and-render cycle for the post collection.
fn load_posts(posts: RwSignal<PostsState>) {
    posts.update(PostsState::begin_load);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::store::PostStore as _;

        let result = crate::net::api::RemoteStore.get_posts().await;
        if let Err(err) = &result {
            leptos::logging::error!("loading posts failed: {err}");
        }
        posts.update(|s| s.finish_load(result));
    });
}
