//! Post collection rendering: loading indicator, inline error, or cards.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::state::posts::PostsState;

/// The board body. Renders exactly one of: the loading indicator, the
/// static fetch-error message, or one card per post in store order. An
/// empty collection renders an empty container.
#[component]
pub fn PostList() -> impl IntoView {
    let posts = expect_context::<RwSignal<PostsState>>();

    view! {
        <div class="post-list">
            {move || {
                let state = posts.get();
                if state.loading {
                    return view! {
                        <div class="post-list__loading">"Loading posts..."</div>
                    }
                        .into_any();
                }
                if let Some(message) = state.error {
                    return view! { <p class="post-list__error">{message}</p> }.into_any();
                }
                view! {
                    <div class="post-list__cards">
                        {state
                            .posts
                            .into_iter()
                            .map(|post| view! { <PostCard post=post/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
