//! Document card: thumbnail, summary line, action menu, and viewer overlay.

use leptos::prelude::*;
use leptos_icons::Icon;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use super::{ActionMenu, DocumentViewer};
use crate::app::AppContext;
use crate::components::Overlay;
use crate::components::icons as ic;
use crate::config::{API_BASE_URL, PDF_MIME_TYPE};
use crate::core::error::DescriptorError;
use crate::models::{ActionPanel, DocumentAction, InvoiceDocument, PanelPhase};
use crate::utils::format::document_meta_line;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Preview for a `create_invoice` tool result.
///
/// A missing or malformed result renders the error display and no actions.
#[component]
pub fn InvoicePreview(result: Option<Value>) -> impl IntoView {
    match InvoiceDocument::resolve(result.as_ref(), API_BASE_URL) {
        Ok(document) => view! { <DocumentCard document=document /> }.into_any(),
        Err(error) => {
            leptos::logging::warn!("invoice preview unavailable: {error}");
            view! { <PreviewError error=error /> }.into_any()
        }
    }
}

/// Terminal error state. Offers no actions.
#[component]
fn PreviewError(error: DescriptorError) -> impl IntoView {
    view! {
        <div class=css::error role="alert" title=error.to_string()>
            "Error: Invalid invoice data"
        </div>
    }
}

/// Card for a resolved invoice document.
#[component]
fn DocumentCard(document: InvoiceDocument) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let platform = StoredValue::new(ctx.platform);

    let panel = RwSignal::new(ActionPanel::new());

    let url = document.descriptor.retrieval_url.clone();
    let thumbnail_url = url.clone();
    let filename = document.descriptor.filename.clone();
    let meta_line = document_meta_line(&document.descriptor);
    let document = StoredValue::new(document);

    // Commit the state change first, then run the side effect.
    let select = move |action: DocumentAction| {
        let Some(effect) = document.with_value(|doc| panel.try_update(|p| p.select(action, doc)))
        else {
            return;
        };
        if let Some(task) = platform.with_value(|platform| platform.perform(effect)) {
            spawn_local(async move {
                task.settle().await;
            });
        }
    };
    let on_select = Callback::new(select);

    let viewer_open = Signal::derive(move || panel.with(|p| p.viewer_open()));
    let close_viewer = Callback::new(move |_: ()| panel.update(|p| p.close_viewer()));
    let share = Callback::new(move |_: ()| select(DocumentAction::Share));

    let card_class = move || match panel.with(|p| p.phase()) {
        PanelPhase::Idle => css::card.to_string(),
        PanelPhase::MenuOpen | PanelPhase::ViewerOpen => {
            format!("{} {}", css::card, css::cardActive)
        }
    };

    view! {
        <div class=card_class>
            <div
                class=css::thumbnail
                on:click=move |_| select(DocumentAction::View)
                title="View document"
            >
                <object data=thumbnail_url type=PDF_MIME_TYPE class=css::thumbnailObject>
                    <div class=css::thumbnailFallback>
                        <p>"PDF preview not available"</p>
                    </div>
                </object>
                <div class=css::thumbnailShade></div>
            </div>

            <div class=css::info>
                <div class=css::badge>
                    <Icon icon=ic::FILE_PDF />
                </div>
                <div class=css::details>
                    <p class=css::filename>{filename}</p>
                    <p class=css::meta>{meta_line}</p>
                </div>
                <ActionMenu panel=panel on_select=on_select />
            </div>

            <Overlay is_open=viewer_open on_close=close_viewer>
                <DocumentViewer
                    title=document.with_value(|doc| doc.title())
                    url=url.clone()
                    on_share=share
                    on_close=close_viewer
                />
            </Overlay>
        </div>
    }
}
