//! Video filter compilation.
//!
//! Filters are built as structured records ([`expr::Filter`]) and only turned into
//! ffmpeg text at the edge, so chain order and graph wiring can be checked first.

/// Canvas composite graph (blurred background, rounded foreground).
pub mod canvas;
/// Simple single-input filter chain.
pub mod chain;
/// Filter operations and linear chains.
pub mod expr;
/// Labeled multi-node filter graphs.
pub mod graph;
