//! Container metadata directives for exports.

/// Clear/randomize directive generation.
pub mod randomizer;
