//! Node predicates used on either side of a connection.

use std::fmt;
use tether_core::{Node, NodeCategory};
use tether_registry::Registry;

/// Classifies a node by its type.
///
/// Evaluation is total: a node whose type the registry does not know simply
/// belongs to no category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every node.
    Any,
    /// The node's type is in the category.
    InCategory(NodeCategory),
    /// The node's type is not in the category.
    NotInCategory(NodeCategory),
    /// The node's bare type name equals the given name.
    TypeIs(String),
}

impl Predicate {
    /// Check a node against this predicate.
    pub fn matches(&self, registry: &Registry, node: &Node) -> bool {
        match self {
            Predicate::Any => true,
            Predicate::InCategory(category) => registry.is_member(&node.node_type, *category),
            Predicate::NotInCategory(category) => !registry.is_member(&node.node_type, *category),
            Predicate::TypeIs(name) => node.node_type.bare_name() == name,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Any => write!(f, "any"),
            Predicate::InCategory(category) => write!(f, "in {}", category),
            Predicate::NotInCategory(category) => write!(f, "not in {}", category),
            Predicate::TypeIs(name) => write!(f, "type {}", name),
        }
    }
}
