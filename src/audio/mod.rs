//! Audio filter compilation: pitch shift via resampling plus `atempo` chains.

/// Tempo decomposition and the pitch/tempo resolver.
pub mod tempo;
