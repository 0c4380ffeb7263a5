//! The Registry - immutable category lookup.

use crate::{RegistryBuilder, TypeEntry};
use std::collections::HashMap;
use tether_core::{NodeCategory, NodeType};

/// The Registry maps bare node type names to their categories.
/// It is immutable after construction.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Entries in declaration order.
    entries: Vec<TypeEntry>,
    /// Entry index lookup by bare name.
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Create a registry from resolved entries (use RegistryBuilder for construction).
    pub(crate) fn new(entries: Vec<TypeEntry>) -> Self {
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name.clone(), i))
            .collect();
        Self { entries, by_name }
    }

    /// The registry holding the standard AI chain, prompt provider and memory tables.
    pub fn standard() -> Self {
        let mut builder = RegistryBuilder::new();
        builder.add_standard_types();
        builder.build()
    }

    /// A registry with no types; every membership check is false.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    // ==================== Lookups ====================

    /// Get an entry by bare name.
    pub fn get(&self, name: &str) -> Option<&TypeEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Get the entry for a node type, ignoring its package prefix.
    pub fn entry_for(&self, node_type: &NodeType) -> Option<&TypeEntry> {
        self.get(node_type.bare_name())
    }

    /// Check whether a node type belongs to a category.
    ///
    /// Total: unknown types belong to no category.
    pub fn is_member(&self, node_type: &NodeType, category: NodeCategory) -> bool {
        self.entry_for(node_type)
            .map(|entry| entry.is_in(category))
            .unwrap_or(false)
    }

    /// Categories of a node type; empty for unknown types.
    pub fn categories_of(&self, node_type: &NodeType) -> &[NodeCategory] {
        self.entry_for(node_type)
            .map(|entry| entry.categories.as_slice())
            .unwrap_or(&[])
    }

    /// Bare names of all types in a category, in declaration order.
    pub fn types_in(&self, category: NodeCategory) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |entry| entry.is_in(category))
            .map(|entry| entry.name.as_str())
    }

    /// Get all entries.
    pub fn all_types(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.iter()
    }

    /// Get the number of types.
    pub fn type_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
