//! Command assembly for the three invocation modes.
//!
//! The crate only produces argument vectors. Running them, and reporting back through
//! [`report::ExecutionReport`], is up to the caller.

/// Mode-aware command compilation.
pub mod assembler;
/// Bounded diagnostics from the process runner.
pub mod report;
/// Encoder options per mode.
pub mod settings;
