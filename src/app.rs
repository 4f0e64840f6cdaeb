//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::ToolCallView;
use crate::config::{APP_NAME, TOOL_CALLS_ELEMENT_ID};
use crate::core::overlay::OverlayRegistry;
use crate::core::share::Platform;
use crate::models::ToolCall;
use crate::utils::dom::{self, BodyScroll};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// The [`OverlayRegistry`] is provided next to it as its own context value,
/// so overlays do not depend on the document platform.
#[derive(Clone)]
pub struct AppContext {
    /// Platform collaborators for document actions.
    pub platform: Platform,
}

impl AppContext {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Context backed by the real browser: anchor downloads, and
    /// `navigator.share` when present.
    pub fn browser() -> Self {
        let platform = dom::browser_platform();
        leptos::logging::log!(
            "native share available: {}",
            platform.share_provider().is_native()
        );
        Self::new(platform)
    }
}

/// Tool calls embedded in the page by the conversation host.
fn embedded_tool_calls() -> Vec<ToolCall> {
    let Some(json) = dom::element_text(TOOL_CALLS_ELEMENT_ID) else {
        return Vec::new();
    };

    match ToolCall::parse_list(&json) {
        Ok(calls) => calls,
        Err(err) => {
            leptos::logging::error!("unreadable tool calls: {err}");
            Vec::new()
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext and overlay registry
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders each embedded tool call through the tool UI registry
#[component]
pub fn App() -> impl IntoView {
    provide_context(OverlayRegistry::new(BodyScroll));
    provide_context(AppContext::browser());

    let calls = embedded_tool_calls();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ef4444; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #6b7280;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = dom::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <header>
                <h1>{APP_NAME}</h1>
            </header>
            <main>
                {calls
                    .into_iter()
                    .map(|call| view! { <ToolCallView call=call /> })
                    .collect_view()}
            </main>
        </ErrorBoundary>
    }
}
