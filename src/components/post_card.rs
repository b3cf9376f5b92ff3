//! Card component for a single stored post.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::util::time::post_date;

/// One rendered post: title, author, creation date, and the body.
///
/// The body is injected as raw HTML. It was produced by this application's
/// own editor and the store holds nothing else, so no sanitization pass is
/// applied here — this is the only place post HTML reaches the document.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let date = post_date(post.timestamp);

    view! {
        <article class="post-card">
            <h2 class="post-card__title">{post.title}</h2>
            <div class="post-card__meta">
                <span class="post-card__author">{post.author}</span>
                <span class="post-card__date">{date}</span>
            </div>
            <div class="post-card__body" inner_html=post.body></div>
        </article>
    }
}
