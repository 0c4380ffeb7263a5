//! Rule error types.

use tether_registry::RegistryError;
use thiserror::Error;

/// Result type for rule set construction.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors that can occur while assembling rules.
///
/// Dispatching itself never fails; a connection no rule matches is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("Duplicate rule: {name}")]
    DuplicateRule { name: String },

    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl RuleError {
    pub fn duplicate_rule(name: impl Into<String>) -> Self {
        Self::DuplicateRule { name: name.into() }
    }

    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }
}
