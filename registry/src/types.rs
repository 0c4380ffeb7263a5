//! Registry entry definitions.

use tether_core::{NodeCategory, NodeKind};

/// Category membership of one node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    /// Bare type name.
    pub name: String,
    /// Known kind with this name, if any.
    pub kind: Option<NodeKind>,
    /// Categories this type belongs to, in declaration order.
    pub categories: Vec<NodeCategory>,
}

impl TypeEntry {
    /// Create an entry with no categories.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = NodeKind::ALL.iter().copied().find(|k| k.name() == name);
        Self {
            name,
            kind,
            categories: Vec::new(),
        }
    }

    /// Check whether this type belongs to a category.
    pub fn is_in(&self, category: NodeCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Add a category, ignoring repeats.
    pub(crate) fn add_category(&mut self, category: NodeCategory) {
        if !self.is_in(category) {
            self.categories.push(category);
        }
    }
}
