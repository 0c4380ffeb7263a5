//! Node type identifiers.
//!
//! The editor names node types as `<package>.<name>`, for example
//! `@n8n/n8n-nodes-langchain.agent`. Rules only care about the bare name,
//! so both the qualified and the bare form classify identically.

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Package that ships the AI chain, trigger and memory nodes.
pub const LANGCHAIN_PACKAGE: &str = "@n8n/n8n-nodes-langchain";

/// Package that ships the core workflow nodes.
pub const BASE_PACKAGE: &str = "n8n-nodes-base";

/// Type identifier of a workflow node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeType(String);

impl NodeType {
    /// Create a type identifier from its raw string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Create a type identifier inside a package.
    pub fn qualified(package: &str, name: &str) -> Self {
        Self(format!("{}.{}", package, name))
    }

    /// Create a type identifier, rejecting strings with no bare name.
    pub fn parse(name: &str) -> CoreResult<Self> {
        let node_type = Self::new(name);
        if node_type.bare_name().is_empty() {
            return Err(CoreError::InvalidNodeType(name.to_string()));
        }
        Ok(node_type)
    }

    /// Get the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name after the last package separator.
    pub fn bare_name(&self) -> &str {
        match self.0.rsplit_once('.') {
            Some((_, name)) => name,
            None => &self.0,
        }
    }

    /// The package prefix, if the identifier is qualified.
    pub fn package(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(package, _)| package)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NodeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for NodeType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NodeType {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
