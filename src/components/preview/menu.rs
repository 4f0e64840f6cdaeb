//! Contextual action menu for a document card.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{ActionPanel, DocumentAction};

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Toggle button plus the view / download / share dropdown.
///
/// Selecting an item goes through `on_select`, which closes the menu as part
/// of the selection. Focus leaving the wrapper dismisses the menu.
#[component]
pub fn ActionMenu(
    panel: RwSignal<ActionPanel>,
    on_select: Callback<DocumentAction>,
) -> impl IntoView {
    let menu_open = Signal::derive(move || panel.with(|p| p.menu_open()));

    // Close menu when focus leaves the dropdown wrapper
    let on_focusout = move |event: web_sys::FocusEvent| {
        if let Some(related) = event.related_target() {
            if let Some(current) = event.current_target() {
                use wasm_bindgen::JsCast;
                if let (Some(wrapper), Some(target)) = (
                    current.dyn_ref::<web_sys::Node>(),
                    related.dyn_ref::<web_sys::Node>(),
                ) && !wrapper.contains(Some(target))
                {
                    panel.update(|p| p.dismiss_menu());
                }
            }
        } else {
            // Focus moved outside the document (e.g., clicked elsewhere)
            panel.update(|p| p.dismiss_menu());
        }
    };

    view! {
        <div class=css::menuWrapper on:focusout=on_focusout>
            <button
                class=css::menuButton
                on:click=move |_| panel.update(|p| p.toggle_menu())
                title="Document actions"
                aria-haspopup="menu"
                aria-expanded=move || menu_open.get().to_string()
            >
                <Icon icon=ic::MORE />
            </button>
            <Show when=move || menu_open.get()>
                <div class=css::menu role="menu">
                    <MenuItem icon=ic::VIEW label="View" action=DocumentAction::View on_select=on_select />
                    <MenuItem icon=ic::DOWNLOAD label="Download" action=DocumentAction::Download on_select=on_select />
                    <MenuItem icon=ic::SHARE label="Share" action=DocumentAction::Share on_select=on_select />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn MenuItem(
    icon: icondata::Icon,
    label: &'static str,
    action: DocumentAction,
    on_select: Callback<DocumentAction>,
) -> impl IntoView {
    view! {
        <button
            class=css::menuItem
            role="menuitem"
            on:click=move |_| on_select.run(action)
        >
            <span class=css::menuIcon><Icon icon=icon /></span>
            {label}
        </button>
    }
}
