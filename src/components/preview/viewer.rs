//! Full document view shown inside the overlay.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::PDF_MIME_TYPE;

stylance::import_crate_style!(css, "src/components/preview/viewer.module.css");

/// Viewer content: title bar with share and close controls above the
/// host's native rendering of the document.
#[component]
pub fn DocumentViewer(
    title: String,
    url: String,
    on_share: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=css::viewer>
            <header class=css::header>
                <h3 class=css::title>{title}</h3>
                <div class=css::actions>
                    <button
                        class=css::iconButton
                        on:click=move |_| on_share.run(())
                        title="Share"
                        aria-label="Share document"
                    >
                        <Icon icon=ic::SHARE />
                    </button>
                    <button
                        class=css::iconButton
                        on:click=move |_| on_close.run(())
                        title="Close (Esc)"
                        aria-label="Close viewer"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            </header>

            <div class=css::body>
                <embed src=url type=PDF_MIME_TYPE class=css::document />
            </div>
        </div>
    }
}
