//! Creation form: title/author fields, the editor host, cancel and publish.

use leptos::prelude::*;

use crate::components::editor_host::EditorHost;
use crate::editor::EditorHandle;
use crate::net::types::CreatePostRequest;
use crate::state::composer::ComposerState;
use crate::state::posts::PostsState;

/// The create-post form. Hidden until the new-post trigger reveals it;
/// visibility is driven entirely by the shared composer state.
///
/// Field non-emptiness is left to the `required` markup — the submit
/// handler itself performs no validation.
#[component]
pub fn PostForm() -> impl IntoView {
    let posts = expect_context::<RwSignal<PostsState>>();
    let composer = expect_context::<RwSignal<ComposerState>>();

    // Constructed once here and passed explicitly: to the host component
    // for mounting, and to the cancel/submit handlers for document access.
    let editor = RwSignal::new_local(EditorHandle::default());

    let on_cancel = move |_| {
        composer.update(ComposerState::hide);
        editor.with(EditorHandle::clear);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if composer.get().publishing {
            return;
        }

        let state = composer.get();
        let request = CreatePostRequest {
            title: state.title,
            body: editor.with(EditorHandle::html),
            author: state.author,
        };
        composer.update(ComposerState::begin_publish);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::store::{PublishOutcome, publish_and_refresh};

            let outcome = publish_and_refresh(&crate::net::api::RemoteStore, &request, || {
                // The post is stored: close the form and start the refresh
                // cycle while the follow-up fetch is in flight.
                composer.update(ComposerState::hide);
                editor.with(EditorHandle::clear);
                posts.update(PostsState::begin_load);
            })
            .await;

            match outcome {
                PublishOutcome::Published(refreshed) => {
                    if let Err(err) = &refreshed {
                        leptos::logging::error!("loading posts failed: {err}");
                    }
                    posts.update(|s| s.finish_load(refreshed));
                }
                PublishOutcome::Failed(err) => {
                    leptos::logging::error!("creating post failed: {err}");
                    publish_failure_alert();
                }
            }
            composer.update(ComposerState::finish_publish);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <section
            class="post-form"
            style:display=move || if composer.get().form_visible { "block" } else { "none" }
        >
            <form class="post-form__fields" on:submit=on_submit>
                <label class="post-form__label">
                    "Title"
                    <input
                        class="post-form__input"
                        type="text"
                        required=true
                        prop:value=move || composer.get().title
                        on:input=move |ev| composer.update(|c| c.title = event_target_value(&ev))
                    />
                </label>
                <label class="post-form__label">
                    "Author"
                    <input
                        class="post-form__input"
                        type="text"
                        required=true
                        prop:value=move || composer.get().author
                        on:input=move |ev| composer.update(|c| c.author = event_target_value(&ev))
                    />
                </label>
                <EditorHost editor=editor/>
                <div class="post-form__actions">
                    <button class="btn" type="button" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary post-form__submit"
                        type="submit"
                        disabled=move || composer.get().publishing
                    >
                        {move || composer.get().submit_label()}
                    </button>
                </div>
            </form>
        </section>
    }
}

/// Blocking browser alert for a rejected publish.
#[cfg(feature = "hydrate")]
fn publish_failure_alert() {
    use crate::state::composer::PUBLISH_FAILED_TEXT;

    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(PUBLISH_FAILED_TEXT);
    }
}
