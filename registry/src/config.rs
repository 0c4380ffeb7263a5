//! Registry configuration loaded at startup.

use crate::{Registry, RegistryBuilder, RegistryResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use tether_core::NodeCategory;

/// Extra category membership supplied by the host.
///
/// ```json
/// {
///   "mergeStandard": true,
///   "categories": { "memory": ["memoryMongoDbChat"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistryConfig {
    /// Start from the standard tables before adding extra types.
    pub merge_standard: bool,
    /// Extra type names per category.
    pub categories: BTreeMap<NodeCategory, Vec<String>>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            merge_standard: true,
            categories: BTreeMap::new(),
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_merge_standard(mut self, merge_standard: bool) -> Self {
        self.merge_standard = merge_standard;
        self
    }

    pub fn with_type(mut self, category: NodeCategory, name: impl Into<String>) -> Self {
        self.categories.entry(category).or_default().push(name.into());
        self
    }

    /// Build the registry this configuration describes.
    pub fn build(&self) -> RegistryResult<Registry> {
        let mut builder = RegistryBuilder::new();
        if self.merge_standard {
            builder.add_standard_types();
        }
        for (category, names) in &self.categories {
            for name in names {
                builder.assign(name, *category)?;
            }
        }
        Ok(builder.build())
    }
}
