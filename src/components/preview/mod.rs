//! Invoice document preview.
//!
//! [`InvoicePreview`] resolves the document from a tool result and renders
//! either the document card or a terminal error. The card owns the action
//! panel state and the viewer overlay.

mod card;
mod menu;
mod viewer;

pub use card::InvoicePreview;
pub use menu::ActionMenu;
pub use viewer::DocumentViewer;
