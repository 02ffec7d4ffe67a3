//! Shared building blocks: the error taxonomy and small numeric helpers.

/// Frame rate and numeric formatting helpers.
pub mod core;
/// Crate-wide error type.
pub mod error;
