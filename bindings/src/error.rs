//! Binding error types.

use tether_core::CoreError;
use tether_registry::RegistryError;
use tether_rule::RuleError;
use thiserror::Error;

/// Result type for binding operations.
pub type BindingResult<T> = Result<T, BindingError>;

/// Errors raised at the editor boundary.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid node: {0}")]
    Node(#[from] CoreError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("Invalid JS value: {message}")]
    Js { message: String },
}

impl BindingError {
    pub fn js(message: impl Into<String>) -> Self {
        Self::Js {
            message: message.into(),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for BindingError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::js(e.to_string())
    }
}
