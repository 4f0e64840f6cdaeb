//! Overlay bookkeeping shared by every modal layer.
//!
//! Background scrolling is a single process-wide resource. The
//! [`OverlayRegistry`] owns it: each open overlay holds an [`OverlayLease`],
//! the first lease suspends scrolling and dropping the last one restores it.
//! Leases are kept in open order so the cancellation key only ever reaches
//! the topmost overlay.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::CANCEL_KEY;

/// The page area whose scrolling is suspended while an overlay is open.
pub trait ScrollSurface: Send + Sync {
    /// Stop the underlying page from scrolling.
    fn suspend(&self);
    /// Undo [`ScrollSurface::suspend`].
    fn restore(&self);
}

/// Identifies one open overlay within its registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayId(u64);

#[derive(Default)]
struct RegistryState {
    /// Open overlays, bottom first.
    open: Vec<OverlayId>,
    next_id: u64,
}

/// Registry of open overlays.
///
/// Cheap to clone; clones share the same stack and surface.
#[derive(Clone)]
pub struct OverlayRegistry {
    state: Arc<Mutex<RegistryState>>,
    surface: Arc<dyn ScrollSurface>,
}

impl OverlayRegistry {
    /// Create a registry that suspends scrolling on `surface`.
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(RegistryState::default())),
            surface: Arc::new(surface),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a newly opened overlay on top of the stack.
    ///
    /// Scrolling is suspended when this is the first open overlay.
    pub fn open(&self) -> OverlayLease {
        let mut state = self.lock();
        let id = OverlayId(state.next_id);
        state.next_id += 1;
        if state.open.is_empty() {
            self.surface.suspend();
        }
        state.open.push(id);

        OverlayLease {
            registry: self.clone(),
            id,
        }
    }

    fn release(&self, id: OverlayId) {
        let mut state = self.lock();
        let Some(pos) = state.open.iter().position(|open| *open == id) else {
            return;
        };
        state.open.remove(pos);
        if state.open.is_empty() {
            self.surface.restore();
        }
    }

    /// Whether `id` is the overlay on top of the stack.
    pub fn is_topmost(&self, id: OverlayId) -> bool {
        self.lock().open.last() == Some(&id)
    }

    /// Whether a key press should close overlay `id`.
    ///
    /// Only the cancellation key closes, and only the topmost overlay.
    pub fn closes_on_key(&self, id: OverlayId, key: &str) -> bool {
        is_cancel_key(key) && self.is_topmost(id)
    }

    /// Whether `input` reaching overlay `id` should close it.
    pub fn closes_on(&self, id: OverlayId, input: &OverlayInput) -> bool {
        match input {
            OverlayInput::Backdrop => self.is_open(id),
            OverlayInput::Content => false,
            OverlayInput::Key(key) => self.closes_on_key(id, key),
        }
    }

    fn is_open(&self, id: OverlayId) -> bool {
        self.lock().open.contains(&id)
    }
}

#[cfg(test)]
impl OverlayRegistry {
    fn open_count(&self) -> usize {
        self.lock().open.len()
    }

    fn is_scroll_suspended(&self) -> bool {
        !self.lock().open.is_empty()
    }
}

/// Scoped registration of one open overlay.
///
/// Dropping the lease unregisters the overlay, whatever path closed it.
pub struct OverlayLease {
    registry: OverlayRegistry,
    id: OverlayId,
}

impl OverlayLease {
    pub fn id(&self) -> OverlayId {
        self.id
    }
}

impl Drop for OverlayLease {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

/// User input delivered to an open overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayInput {
    /// Click on the dimmed area around the content.
    Backdrop,
    /// Click inside the content.
    Content,
    /// Key press anywhere in the window, as `KeyboardEvent.key`.
    Key(String),
}

/// One mounted overlay: its lease plus whatever it attached to the page.
///
/// Dropping the session runs the detach hooks (listeners) and then
/// releases the lease.
pub struct OverlaySession {
    detach: Vec<Box<dyn FnOnce() + Send + Sync>>,
    lease: OverlayLease,
}

impl OverlaySession {
    pub fn new(lease: OverlayLease) -> Self {
        Self {
            detach: Vec::new(),
            lease,
        }
    }

    pub fn id(&self) -> OverlayId {
        self.lease.id
    }

    /// Register something to undo when the overlay closes.
    pub fn on_detach(&mut self, detach: impl FnOnce() + Send + Sync + 'static) {
        self.detach.push(Box::new(detach));
    }

    /// Whether `input` should close this overlay.
    pub fn closes_on(&self, input: &OverlayInput) -> bool {
        self.lease.registry.closes_on(self.lease.id, input)
    }
}

impl Drop for OverlaySession {
    fn drop(&mut self) {
        for detach in self.detach.drain(..) {
            detach();
        }
    }
}

/// Check whether `key` (a `KeyboardEvent.key` value) is the cancellation key.
pub fn is_cancel_key(key: &str) -> bool {
    key == CANCEL_KEY
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSurface;
    use super::*;

    fn registry() -> (OverlayRegistry, RecordingSurface) {
        let surface = RecordingSurface::default();
        (OverlayRegistry::new(surface.clone()), surface)
    }

    #[test]
    fn test_open_suspends_scroll() {
        let (registry, surface) = registry();
        assert!(!surface.is_suspended());

        let _lease = registry.open();
        assert!(surface.is_suspended());
        assert!(registry.is_scroll_suspended());
        assert_eq!(registry.open_count(), 1);
    }

    #[test]
    fn test_drop_restores_scroll() {
        let (registry, surface) = registry();
        let lease = registry.open();
        drop(lease);

        assert!(!surface.is_suspended());
        assert!(!registry.is_scroll_suspended());
        assert_eq!(surface.restores(), 1);
    }

    #[test]
    fn test_reopen_cycles() {
        let (registry, surface) = registry();
        for _ in 0..3 {
            let lease = registry.open();
            assert!(surface.is_suspended());
            drop(lease);
            assert!(!surface.is_suspended());
        }
        assert_eq!(surface.suspends(), 3);
        assert_eq!(surface.restores(), 3);
    }

    #[test]
    fn test_nested_overlays_restore_once() {
        let (registry, surface) = registry();
        let outer = registry.open();
        let inner = registry.open();
        assert_eq!(surface.suspends(), 1);

        drop(inner);
        assert!(surface.is_suspended());
        drop(outer);
        assert!(!surface.is_suspended());
        assert_eq!(surface.restores(), 1);
    }

    #[test]
    fn test_out_of_order_release() {
        let (registry, surface) = registry();
        let outer = registry.open();
        let inner = registry.open();

        drop(outer);
        assert!(surface.is_suspended());
        assert!(registry.is_topmost(inner.id()));
        drop(inner);
        assert!(!surface.is_suspended());
    }

    #[test]
    fn test_cancel_key_reaches_topmost_only() {
        let (registry, _surface) = registry();
        let outer = registry.open();
        let inner = registry.open();

        assert!(registry.closes_on_key(inner.id(), "Escape"));
        assert!(!registry.closes_on_key(outer.id(), "Escape"));

        drop(inner);
        assert!(registry.closes_on_key(outer.id(), "Escape"));
    }

    #[test]
    fn test_other_keys_ignored() {
        let (registry, _surface) = registry();
        let lease = registry.open();
        let id = lease.id();
        assert!(registry.closes_on_key(id, "Escape"));
        assert!(!registry.closes_on_key(id, "Enter"));
        assert!(!registry.closes_on_key(id, "q"));
        assert!(!registry.closes_on_key(id, "escape"));
    }

    #[test]
    fn test_released_id_never_closes() {
        let (registry, _surface) = registry();
        let lease = registry.open();
        let id = lease.id();
        drop(lease);

        assert!(!registry.closes_on_key(id, "Escape"));
    }

    #[test]
    fn test_backdrop_click_closes() {
        let (registry, _surface) = registry();
        let session = OverlaySession::new(registry.open());
        assert!(session.closes_on(&OverlayInput::Backdrop));
    }

    #[test]
    fn test_content_click_keeps_open() {
        let (registry, _surface) = registry();
        let session = OverlaySession::new(registry.open());
        assert!(!session.closes_on(&OverlayInput::Content));
        assert_eq!(registry.open_count(), 1);
    }

    #[test]
    fn test_cancel_key_closes_session() {
        let (registry, _surface) = registry();
        let session = OverlaySession::new(registry.open());
        assert!(session.closes_on(&OverlayInput::Key("Escape".to_string())));
        assert!(!session.closes_on(&OverlayInput::Key("Enter".to_string())));
    }

    #[test]
    fn test_inputs_after_close_are_ignored() {
        let (registry, _surface) = registry();
        let session = OverlaySession::new(registry.open());
        let id = session.id();
        drop(session);

        assert!(!registry.closes_on(id, &OverlayInput::Backdrop));
        assert!(!registry.closes_on(id, &OverlayInput::Key("Escape".to_string())));
    }

    #[test]
    fn test_session_drop_detaches_listeners() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let (registry, surface) = registry();
        let detached = Arc::new(AtomicUsize::new(0));
        let mut session = OverlaySession::new(registry.open());
        for _ in 0..2 {
            let detached = detached.clone();
            session.on_detach(move || {
                detached.fetch_add(1, Ordering::SeqCst);
            });
        }

        assert_eq!(detached.load(Ordering::SeqCst), 0);
        drop(session);
        assert_eq!(detached.load(Ordering::SeqCst), 2);
        assert!(!surface.is_suspended());
    }

    #[test]
    fn test_session_detaches_before_release() {
        let (registry, surface) = registry();
        let scroll_at_detach = Arc::new(Mutex::new(None));
        let mut session = OverlaySession::new(registry.open());
        {
            let surface = surface.clone();
            let scroll_at_detach = scroll_at_detach.clone();
            session.on_detach(move || {
                *scroll_at_detach.lock().unwrap() = Some(surface.is_suspended());
            });
        }
        drop(session);

        // Listeners go first; the page is still locked while they detach.
        assert_eq!(*scroll_at_detach.lock().unwrap(), Some(true));
        assert!(!surface.is_suspended());
    }

    #[test]
    fn test_ids_are_unique() {
        let (registry, _surface) = registry();
        let first = registry.open().id();
        let second = registry.open().id();
        assert_ne!(first, second);
    }
}
