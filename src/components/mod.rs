//! UI components built with Leptos.
//!
//! - [`overlay`] - Generic modal overlay
//! - [`preview`] - Invoice document card, action menu and viewer
//! - [`tool`] - Tool UI registry for conversation tool calls
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod overlay;
pub mod preview;
pub mod tool;

pub use overlay::Overlay;
pub use preview::InvoicePreview;
pub use tool::ToolCallView;
