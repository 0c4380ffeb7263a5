//! Common error types for Tether.

use thiserror::Error;

/// Errors raised while building core values from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The node type identifier is empty or ends with a package separator.
    #[error("Invalid node type: {0:?}")]
    InvalidNodeType(String),

    /// No category has the given name.
    #[error("Unknown node category: {0}")]
    UnknownCategory(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
