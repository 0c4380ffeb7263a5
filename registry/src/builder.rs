//! RegistryBuilder for constructing an immutable Registry.

use crate::{Registry, RegistryError, RegistryResult, TypeEntry};
use std::collections::HashMap;
use tether_core::{NodeCategory, NodeKind, NodeType};

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Entries being built, in declaration order.
    entries: Vec<TypeEntry>,
    /// Bare name to entry index.
    names: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type definition. Qualified names are stored by their bare name.
    pub fn add_type(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        TypeBuilder {
            builder: self,
            name: name.into(),
            categories: Vec::new(),
        }
    }

    /// Add a category to a type, creating the type if it is not declared yet.
    pub fn assign(&mut self, name: &str, category: NodeCategory) -> RegistryResult<()> {
        let bare = bare_name(name)?;
        let index = self.index_or_insert(&bare);
        self.entries[index].add_category(category);
        Ok(())
    }

    /// Declare every known kind with its standard category.
    pub fn add_standard_types(&mut self) -> &mut Self {
        for kind in NodeKind::ALL {
            let index = self.index_or_insert(kind.name());
            if let Some(category) = kind.category() {
                self.entries[index].add_category(category);
            }
        }
        self
    }

    /// Check whether a bare name has been declared.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Build the immutable Registry.
    ///
    /// Names are validated as they are declared, so building cannot fail.
    pub fn build(self) -> Registry {
        Registry::new(self.entries)
    }

    fn index_or_insert(&mut self, bare: &str) -> usize {
        if let Some(&index) = self.names.get(bare) {
            return index;
        }
        let index = self.entries.len();
        self.entries.push(TypeEntry::new(bare));
        self.names.insert(bare.to_string(), index);
        index
    }
}

fn bare_name(name: &str) -> RegistryResult<String> {
    NodeType::parse(name)
        .map(|node_type| node_type.bare_name().to_string())
        .map_err(|_| RegistryError::InvalidTypeName(name.to_string()))
}

/// Builder for a type definition.
pub struct TypeBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    name: String,
    categories: Vec<NodeCategory>,
}

impl<'a> TypeBuilder<'a> {
    /// Add a category.
    pub fn category(mut self, category: NodeCategory) -> Self {
        self.categories.push(category);
        self
    }

    /// Finish building this type.
    pub fn done(self) -> RegistryResult<()> {
        let bare = bare_name(&self.name)?;

        // Check for duplicate name
        if self.builder.contains(&bare) {
            return Err(RegistryError::DuplicateTypeName(bare));
        }

        let index = self.builder.index_or_insert(&bare);
        for category in self.categories {
            self.builder.entries[index].add_category(category);
        }
        Ok(())
    }
}
