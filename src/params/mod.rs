//! Edit parameters: the typed [`ParameterSet`](model::ParameterSet), its export schema
//! and the randomized uniquify presets.

/// Flat export schema for external consumers.
pub mod export;
/// Parameter set, defaults and bounds.
pub mod model;
/// Randomized one-click presets.
pub mod presets;
