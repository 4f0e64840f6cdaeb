//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "Invoice Assistant";

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Id of the `<script type="application/json">` element carrying tool calls.
pub const TOOL_CALLS_ELEMENT_ID: &str = "tool-calls";

// =============================================================================
// Network Configuration
// =============================================================================

/// Origin of the invoice backend.
///
/// Origin-relative document URLs (e.g. `/invoices/Invoice-042.pdf`) are
/// resolved against this value. Override at build time with
/// `INVOICE_API_BASE_URL`.
pub const API_BASE_URL: &str = match option_env!("INVOICE_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

// =============================================================================
// Tool Configuration
// =============================================================================

/// Name of the tool whose results render as an invoice preview.
pub const INVOICE_TOOL_NAME: &str = "create_invoice";

// =============================================================================
// Document Configuration
// =============================================================================

/// Short kind label appended to the document summary line.
pub const DOCUMENT_KIND_LABEL: &str = "pdf";

/// MIME type handed to the host's native document viewer.
pub const PDF_MIME_TYPE: &str = "application/pdf";

// =============================================================================
// Overlay Configuration
// =============================================================================

/// Key that closes the topmost overlay.
pub const CANCEL_KEY: &str = "Escape";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
