//! Action panel state machine for a single document.
//!
//! The panel tracks two flags: whether the action menu is open and whether
//! the viewer overlay is open. Every action selection closes the menu first
//! and only then hands back the side effect to run, so a slow or failing
//! action can never leave the menu open.

use crate::core::share::{SaveRequest, ShareRequest};
use crate::models::InvoiceDocument;

/// User actions offered by the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentAction {
    View,
    Download,
    Share,
}

/// Side effect to perform after a selection has been committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionEffect {
    /// Show the viewer overlay. The state change is already applied.
    OpenViewer,
    Save(SaveRequest),
    Share(ShareRequest),
}

/// Observable phase of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    Idle,
    MenuOpen,
    ViewerOpen,
}

/// Menu and viewer state for one mounted document panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionPanel {
    menu_open: bool,
    viewer_open: bool,
}

impl ActionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn viewer_open(&self) -> bool {
        self.viewer_open
    }

    pub fn phase(&self) -> PanelPhase {
        if self.viewer_open {
            PanelPhase::ViewerOpen
        } else if self.menu_open {
            PanelPhase::MenuOpen
        } else {
            PanelPhase::Idle
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu without selecting anything (outside interaction).
    pub fn dismiss_menu(&mut self) {
        self.menu_open = false;
    }

    /// Select an action.
    ///
    /// The menu is closed before anything else; the returned effect is
    /// for the caller to run afterwards. Download and share leave the
    /// viewer untouched.
    pub fn select(&mut self, action: DocumentAction, document: &InvoiceDocument) -> ActionEffect {
        self.menu_open = false;
        match action {
            DocumentAction::View => {
                self.viewer_open = true;
                ActionEffect::OpenViewer
            }
            DocumentAction::Download => ActionEffect::Save(document.save_request()),
            DocumentAction::Share => ActionEffect::Share(document.share_request()),
        }
    }

    /// The viewer overlay was closed (cancel key, backdrop, or close control).
    pub fn close_viewer(&mut self) {
        self.viewer_open = false;
    }
}
