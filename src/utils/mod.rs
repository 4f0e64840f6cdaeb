//! Utility modules for DOM access and display formatting.
//!
//! Provides:
//! - [`dom`] - Browser primitives (scroll surface, file save, native share)
//! - [`format`] - File size and page count labels

pub mod dom;
pub mod format;
