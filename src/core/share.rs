//! Download and share dispatch.
//!
//! The platform hands us two primitives: a fire-and-forget file save and an
//! optional native share sheet. Whether native share exists is decided once,
//! when the [`ShareProvider`] is built, and never re-detected. Without it,
//! sharing substitutes the download action with the same URL and filename.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;

use crate::core::error::ShareError;
use crate::models::ActionEffect;

/// Payload handed to the native share sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// A client-side save of `url` under `filename`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveRequest {
    pub url: String,
    pub filename: String,
}

/// Everything needed to share a document, including the download to
/// perform instead when native share is absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRequest {
    pub payload: SharePayload,
    pub fallback: SaveRequest,
}

/// Platform primitive that triggers a file save. Completion is not observable.
pub trait FileSaver: Send + Sync {
    fn save(&self, request: &SaveRequest);
}

/// Future returned by a native share call.
///
/// Resolves `Ok` when shared, `Err` on cancel or failure, and may never
/// resolve if the user abandons the sheet.
pub type ShareFuture = Pin<Box<dyn Future<Output = Result<(), ShareError>>>>;

/// Platform-native share capability.
pub trait NativeShare: Send + Sync {
    fn share(&self, payload: &SharePayload) -> ShareFuture;
}

/// Share capability selected once at construction.
#[derive(Clone)]
pub enum ShareProvider {
    /// The platform has a native share sheet.
    Native(Arc<dyn NativeShare>),
    /// No share sheet: sharing saves the file instead.
    SaveFallback,
}

impl ShareProvider {
    pub fn native(share: impl NativeShare + 'static) -> Self {
        Self::Native(Arc::new(share))
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }
}

/// How a share attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native sheet reported success.
    Shared,
    /// The native sheet was cancelled or failed. Already logged.
    Dismissed,
}

/// Result of starting a share.
pub enum ShareDispatch {
    /// The fallback save already ran synchronously.
    SavedInstead,
    /// A native share sheet is in flight.
    Pending(ShareTask),
}

/// An in-flight native share.
///
/// Settling never fails: rejections are logged and swallowed, and no
/// fallback is attempted because the user has already seen the native UI.
pub struct ShareTask {
    future: ShareFuture,
}

impl ShareTask {
    pub async fn settle(self) -> ShareOutcome {
        match self.future.await {
            Ok(()) => {
                leptos::logging::log!("document shared");
                ShareOutcome::Shared
            }
            Err(err) => {
                leptos::logging::warn!("share dismissed: {err}");
                ShareOutcome::Dismissed
            }
        }
    }
}

/// Platform collaborators used by the document actions.
///
/// Cheap to clone; intended to be provided once through context.
#[derive(Clone)]
pub struct Platform {
    saver: Arc<dyn FileSaver>,
    share: ShareProvider,
}

impl Platform {
    pub fn new(saver: impl FileSaver + 'static, share: ShareProvider) -> Self {
        Self {
            saver: Arc::new(saver),
            share,
        }
    }

    pub fn share_provider(&self) -> &ShareProvider {
        &self.share
    }

    /// Trigger a client-side save. Fire and forget.
    pub fn save(&self, request: &SaveRequest) {
        self.saver.save(request);
    }

    /// Run the side effect of a committed action selection.
    ///
    /// Returns the in-flight share sheet, if one was opened, for the caller
    /// to settle. Opening the viewer needs no platform call.
    pub fn perform(&self, effect: ActionEffect) -> Option<ShareTask> {
        match effect {
            ActionEffect::OpenViewer => None,
            ActionEffect::Save(request) => {
                self.save(&request);
                None
            }
            ActionEffect::Share(request) => match self.share(&request) {
                ShareDispatch::SavedInstead => None,
                ShareDispatch::Pending(task) => Some(task),
            },
        }
    }

    /// Start sharing a document.
    ///
    /// With native share this returns the pending sheet; otherwise it performs
    /// exactly the download that [`Platform::save`] would for the same request.
    pub fn share(&self, request: &ShareRequest) -> ShareDispatch {
        match &self.share {
            ShareProvider::Native(native) => ShareDispatch::Pending(ShareTask {
                future: native.share(&request.payload),
            }),
            ShareProvider::SaveFallback => {
                leptos::logging::log!("native share unavailable, saving instead");
                self.save(&request.fallback);
                ShareDispatch::SavedInstead
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// File saver that records every request.
    #[derive(Clone, Default)]
    pub struct RecordingSaver {
        saved: Arc<Mutex<Vec<SaveRequest>>>,
    }

    impl RecordingSaver {
        pub fn saved(&self) -> Vec<SaveRequest> {
            self.saved.lock().unwrap().clone()
        }
    }

    impl FileSaver for RecordingSaver {
        fn save(&self, request: &SaveRequest) {
            self.saved.lock().unwrap().push(request.clone());
        }
    }

    /// How a scripted share sheet responds.
    #[derive(Clone)]
    pub enum Script {
        Accept,
        Reject(ShareError),
        Abandon,
    }

    /// Native share double that records payloads and answers per script.
    #[derive(Clone)]
    pub struct ScriptedShare {
        script: Script,
        calls: Arc<Mutex<Vec<SharePayload>>>,
    }

    impl ScriptedShare {
        pub fn new(script: Script) -> Self {
            Self {
                script,
                calls: Arc::default(),
            }
        }

        pub fn calls(&self) -> Vec<SharePayload> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl NativeShare for ScriptedShare {
        fn share(&self, payload: &SharePayload) -> ShareFuture {
            self.calls.lock().unwrap().push(payload.clone());
            match self.script.clone() {
                Script::Accept => Box::pin(async { Ok::<(), ShareError>(()) }),
                Script::Reject(err) => Box::pin(async move { Err::<(), ShareError>(err) }),
                Script::Abandon => {
                    Box::pin(std::future::pending::<Result<(), ShareError>>())
                }
            }
        }
    }
}
