//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling,
//! plus the browser implementations of the platform primitives used by the
//! document preview.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CssStyleDeclaration, Document, HtmlAnchorElement, Navigator, Window};

use crate::core::error::ShareError;
use crate::core::overlay::ScrollSurface;
use crate::core::share::{
    FileSaver, NativeShare, Platform, SaveRequest, ShareFuture, SharePayload, ShareProvider,
};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Text content of the element with the given id.
pub fn element_text(id: &str) -> Option<String> {
    document()?.get_element_by_id(id)?.text_content()
}

/// Best-effort human-readable message for a thrown JS value.
fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// =============================================================================
// Scroll Suppression
// =============================================================================

/// The document body as the scroll surface suspended behind overlays.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScroll;

fn body_style() -> Option<CssStyleDeclaration> {
    Some(document()?.body()?.style())
}

impl ScrollSurface for BodyScroll {
    fn suspend(&self) {
        if let Some(style) = body_style() {
            let _ = style.set_property("overflow", "hidden");
        }
    }

    fn restore(&self) {
        if let Some(style) = body_style() {
            let _ = style.remove_property("overflow");
        }
    }
}

// =============================================================================
// File Save
// =============================================================================

/// Saves files by clicking a temporary `<a download>` link.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorSaver;

impl FileSaver for AnchorSaver {
    fn save(&self, request: &SaveRequest) {
        if let Err(err) = click_download_link(request) {
            leptos::logging::warn!("download trigger failed: {}", describe_js_error(&err));
        }
    }
}

fn click_download_link(request: &SaveRequest) -> Result<(), JsValue> {
    let document = document().ok_or_else(|| JsValue::from_str("document not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&request.url);
    link.set_download(&request.filename);

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}

// =============================================================================
// Native Share
// =============================================================================

/// `navigator.share`, called through reflection so browsers without it
/// are detected rather than assumed.
#[derive(Clone, Copy, Debug)]
pub struct NavigatorShare;

impl NavigatorShare {
    /// Returns the share capability if this browser exposes one.
    pub fn detect() -> Option<Self> {
        share_function().map(|_| Self)
    }
}

/// Get `navigator` together with its `share` function.
fn share_function() -> Option<(Navigator, Function)> {
    let navigator = window()?.navigator();
    let share = Reflect::get(&navigator, &"share".into())
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((navigator, share))
}

/// Call `navigator.share(payload)`.
///
/// Must run synchronously inside the user gesture, so it is invoked before
/// the returned future is first polled.
fn start_share(payload: &SharePayload) -> Result<Promise, ShareError> {
    let (navigator, share) = share_function().ok_or(ShareError::Unavailable)?;
    let data = serde_wasm_bindgen::to_value(payload)
        .map_err(|e| ShareError::Rejected(e.to_string()))?;

    share
        .call1(&navigator, &data)
        .map(Promise::from)
        .map_err(|e| ShareError::Rejected(describe_js_error(&e)))
}

impl NativeShare for NavigatorShare {
    fn share(&self, payload: &SharePayload) -> ShareFuture {
        let started = start_share(payload);
        Box::pin(async move {
            let promise = started?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ShareError::Rejected(describe_js_error(&e)))
        })
    }
}

/// Build the platform collaborators for the current browser.
///
/// Share capability is detected once here and never re-checked.
pub fn browser_platform() -> Platform {
    let share = match NavigatorShare::detect() {
        Some(native) => ShareProvider::native(native),
        None => ShareProvider::SaveFallback,
    };
    Platform::new(AnchorSaver, share)
}
