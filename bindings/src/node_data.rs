//! Node records as the editor stores them.

use serde::{Deserialize, Serialize};
use tether_core::{Node, NodeType, Parameters};

use crate::error::BindingResult;

/// A workflow node in the editor's JSON shape.
///
/// Only `name`, `type` and `parameters` are interpreted; every other field
/// (id, position, typeVersion, credentials...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NodeData {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            parameters,
            extra: serde_json::Map::new(),
        }
    }

    /// Parse a record from JSON.
    pub fn from_json(json: &str) -> BindingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the record to JSON.
    pub fn to_json(&self) -> BindingResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Copy into a dispatcher node.
    pub fn to_node(&self) -> BindingResult<Node> {
        let node_type = NodeType::parse(&self.type_name)?;
        Ok(Node::new(self.name.clone(), node_type, self.parameters.clone()))
    }

    /// Move the parameter bag into a dispatcher node, leaving this record's
    /// bag empty until [`NodeData::restore`] puts it back.
    pub(crate) fn take_node(&mut self) -> BindingResult<Node> {
        let node_type = NodeType::parse(&self.type_name)?;
        let parameters = std::mem::take(&mut self.parameters);
        Ok(Node::new(self.name.clone(), node_type, parameters))
    }

    pub(crate) fn restore(&mut self, node: Node) {
        self.parameters = node.parameters;
    }
}

impl From<&Node> for NodeData {
    fn from(node: &Node) -> Self {
        Self::new(node.name.clone(), node.node_type.as_str(), node.parameters.clone())
    }
}
