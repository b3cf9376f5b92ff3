//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{composer::ComposerState, posts::PostsState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The Quill script and stylesheet are loaded here so the editor constructor
/// is available as a page global before the WASM bundle hydrates.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link href="https://cdn.quilljs.com/1.3.7/quill.snow.css" rel="stylesheet"/>
                <script src="https://cdn.quilljs.com/1.3.7/quill.js"></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared post-list and composer state contexts and sets up
/// client-side routing for the single board route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let posts = RwSignal::new(PostsState::default());
    let composer = RwSignal::new(ComposerState::default());

    provide_context(posts);
    provide_context(composer);

    view! {
        <Stylesheet id="leptos" href="/pkg/postboard.css"/>
        <Title text="PostBoard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
