/// Convenience result type used across uniqcut.
pub type CompileResult<T> = Result<T, CompileError>;

/// Top-level error taxonomy used by compiler APIs.
#[derive(thiserror::Error, Debug)]
pub enum CompileError {
    /// Malformed or out-of-range user-provided data that cannot be repaired.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request cannot be served in the current state (e.g. canvas without frame size).
    #[error("unsupported state: {0}")]
    UnsupportedState(String),

    /// An internal filter-graph invariant was violated; no command is produced.
    #[error("graph construction error: {0}")]
    GraphConstruction(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CompileError {
    /// Build a [`CompileError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CompileError::UnsupportedState`] value.
    pub fn unsupported_state(msg: impl Into<String>) -> Self {
        Self::UnsupportedState(msg.into())
    }

    /// Build a [`CompileError::GraphConstruction`] value.
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::GraphConstruction(msg.into())
    }

    /// Build a [`CompileError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CompileError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
