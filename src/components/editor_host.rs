//! Bridge component between the Leptos UI and the imperative Quill widget.
//!
//! Mounts the editor container and, on the client, constructs the Quill
//! instance once the node is attached, handing it to the provided handle.

use leptos::prelude::*;

use crate::editor::EditorHandle;

/// Editor host — renders the container element the widget takes over.
///
/// Construction happens in an effect so it runs only in the browser, after
/// the container exists; the attached-check keeps re-runs from stacking a
/// second instance on the same node.
#[component]
pub fn EditorHost(editor: RwSignal<EditorHandle, LocalStorage>) -> impl IntoView {
    let host_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if editor.with(EditorHandle::is_attached) {
                return;
            }
            let Some(el) = host_ref.get() else {
                return;
            };
            let instance = crate::editor::quill::Quill::new(&el, &crate::editor::editor_options());
            editor.with(|handle| handle.attach(instance));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = editor;
            let _ = host_ref;
        }
    });

    view! { <div class="editor-host" node_ref=host_ref></div> }
}
