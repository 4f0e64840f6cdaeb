//! Core preview logic, independent of any rendering.
//!
//! - [`overlay`] - Overlay registry, scroll suppression, cancellation key routing
//! - [`share`] - Download and share dispatch over platform capabilities
//! - [`error`] - Error types

pub mod error;
pub mod overlay;
pub mod share;
