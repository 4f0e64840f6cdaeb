//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DocumentDescriptor`], [`InvoiceDocument`] - The document being previewed
//! - [`ActionPanel`], [`DocumentAction`], [`ActionEffect`] - Action panel state machine
//! - [`ToolCall`] - Tool invocations rendered in the conversation

mod document;
mod panel;
mod tool;

pub use document::{DocumentDescriptor, InvoiceDocument};
pub use panel::{ActionEffect, ActionPanel, DocumentAction, PanelPhase};
pub use tool::ToolCall;
