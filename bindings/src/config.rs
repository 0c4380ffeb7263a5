//! Connector configuration.

use serde::Deserialize;
use tether_registry::RegistryConfig;

use crate::error::BindingResult;

/// Startup configuration for a [`crate::Connector`].
///
/// The default reproduces the standard registry and rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConnectorConfig {
    /// Category membership.
    pub registry: RegistryConfig,
    /// Standard rules to leave out.
    pub disabled_rules: Vec<String>,
}

impl ConnectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> BindingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_registry(mut self, registry: RegistryConfig) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_disabled_rule(mut self, name: impl Into<String>) -> Self {
        self.disabled_rules.push(name.into());
        self
    }
}
