//! The node record handed over by the editor.
//!
//! A node is owned by the editor's in-memory graph. Connection rules read its
//! type and write defaults into its parameter bag in place.

use crate::{NodeCategory, NodeKind, NodeType, Parameters, Value};

/// A workflow node as seen by connection rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Display name of the node in the workflow.
    pub name: String,
    /// Type identifier of the node.
    pub node_type: NodeType,
    /// Incremented every time a parameter actually changes.
    pub version: u64,
    /// Parameter values.
    pub parameters: Parameters,
}

impl Node {
    /// Create a new node with the given properties.
    pub fn new(name: impl Into<String>, node_type: impl Into<NodeType>, parameters: Parameters) -> Self {
        Self {
            name: name.into(),
            node_type: node_type.into(),
            version: 1,
            parameters,
        }
    }

    /// Create a node of a known kind, named after it.
    pub fn of_kind(kind: NodeKind) -> Self {
        Self::new(kind.name(), kind.node_type(), Parameters::new())
    }

    /// The known kind of this node, if any.
    pub fn kind(&self) -> Option<NodeKind> {
        NodeKind::from_type(&self.node_type)
    }

    /// The standard category of this node, if any.
    pub fn standard_category(&self) -> Option<NodeCategory> {
        self.kind().and_then(NodeKind::category)
    }

    /// Get a parameter value by name.
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Set a parameter value. Returns true if the bag changed.
    pub fn set_param(&mut self, name: &str, value: Value) -> bool {
        if self.parameters.get(name) == Some(&value) {
            return false;
        }
        self.parameters.insert(name.to_string(), value);
        self.version += 1;
        true
    }

    /// Remove a parameter.
    pub fn remove_param(&mut self, name: &str) -> Option<Value> {
        let result = self.parameters.remove(name);
        if result.is_some() {
            self.version += 1;
        }
        result
    }
}
