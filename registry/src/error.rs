//! Registry error types.

use thiserror::Error;

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur during registry construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Invalid type name: {0:?}")]
    InvalidTypeName(String),

    #[error("Invalid registry config: {message}")]
    InvalidConfig { message: String },
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidConfig {
            message: e.to_string(),
        }
    }
}
