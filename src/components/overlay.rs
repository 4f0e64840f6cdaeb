//! Generic modal overlay.
//!
//! Renders nothing while closed. While open, the content sits above a dimmed
//! full-viewport backdrop; clicking the backdrop or pressing the cancellation
//! key requests a close. The open lifetime is scoped to [`OverlayLayer`]:
//! mounting it opens an [`OverlaySession`] holding the lease and the keydown
//! listener, and its cleanup drops the session, so every exit path
//! (including the parent unmounting) restores page scrolling.

use leptos::{ev, prelude::*};

use crate::core::overlay::{OverlayInput, OverlayRegistry, OverlaySession};
use crate::utils::dom::BodyScroll;

stylance::import_crate_style!(css, "src/components/overlay.module.css");

/// Modal overlay.
///
/// # Props
/// - `is_open`: Whether the overlay is shown
/// - `on_close`: Invoked on backdrop click or cancellation key. The overlay
///   stays open until the caller sets `is_open` to false.
#[component]
pub fn Overlay(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);

    view! {
        <Show when=move || is_open.get()>
            <OverlayLayer on_close=on_close>
                {children.with_value(|children| children())}
            </OverlayLayer>
        </Show>
    }
}

/// The registry provided by the app, or a private one when mounted
/// outside it.
fn overlay_registry() -> OverlayRegistry {
    use_context::<OverlayRegistry>().unwrap_or_else(|| {
        leptos::logging::warn!("overlay mounted without a registry, using a private one");
        OverlayRegistry::new(BodyScroll)
    })
}

/// The mounted overlay. Exists exactly while the overlay is open.
///
/// DOM events are forwarded to the [`OverlaySession`], which decides
/// whether they close the overlay.
#[component]
fn OverlayLayer(on_close: Callback<()>, children: Children) -> impl IntoView {
    let registry = overlay_registry();
    let mut session = OverlaySession::new(registry.open());
    let id = session.id();

    let dispatch = Callback::new(move |input: OverlayInput| {
        let close = registry.closes_on(id, &input);
        if close {
            on_close.run(());
        }
        close
    });

    // Only the topmost overlay reacts to the cancellation key.
    let keydown = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if dispatch.run(OverlayInput::Key(event.key())) {
            event.prevent_default();
        }
    });
    session.on_detach(move || keydown.remove());

    on_cleanup(move || drop(session));

    view! {
        <div class=css::overlay role="dialog" aria-modal="true">
            <div
                class=css::backdrop
                on:click=move |_| {
                    dispatch.run(OverlayInput::Backdrop);
                }
            ></div>
            <div
                class=css::content
                on:click=move |event: ev::MouseEvent| {
                    event.stop_propagation();
                    dispatch.run(OverlayInput::Content);
                }
            >
                {children()}
            </div>
        </div>
    }
}
