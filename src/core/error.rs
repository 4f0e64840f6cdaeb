//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`DescriptorError`] - Missing or malformed document descriptors
//! - [`ShareError`] - Native share capability failures

use thiserror::Error;

/// Errors raised while resolving a document descriptor from a tool result.
///
/// None of these escape the preview: each one ends in the terminal
/// error display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// The tool result is null or absent.
    #[error("no invoice data")]
    Absent,
    /// The invoice carries no document attachment.
    #[error("invoice has no document attached")]
    MissingAttachment,
    /// The attachment has an empty filename.
    #[error("document filename is empty")]
    EmptyFilename,
    /// A required field is missing or has the wrong type.
    #[error("invalid invoice data: {0}")]
    Malformed(String),
}

/// Native share capability failures.
///
/// Recovered locally: logged, never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The platform exposes no callable share function.
    #[error("native share is not available")]
    Unavailable,
    /// The user dismissed the share sheet or the platform call failed.
    #[error("share rejected: {0}")]
    Rejected(String),
}
