//! Source media metadata consumed by the compiler.
//!
//! Running `ffprobe` is the caller's job; this module only turns its output into a
//! [`MediaInfo`](info::MediaInfo) with the documented fallbacks.

/// Media metadata and fallback values.
pub mod info;
/// Probe result parsing.
pub mod probe;
