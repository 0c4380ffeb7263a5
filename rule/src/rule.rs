//! Connection rules.

use crate::mutation::{
    Mutation, PROMPT_TYPE_DEFINE, PROMPT_TYPE_PARAM, SESSION_ID_CUSTOM_KEY, SESSION_ID_TYPE_PARAM,
};
use crate::predicate::Predicate;
use tether_core::{Node, NodeCategory};
use tether_registry::Registry;

/// Name of the rule that defines the prompt inline below a chain or agent.
pub const PROMPT_DEFAULT_RULE: &str = "prompt-default";

/// Name of the rule that keys memory sessions below a chat trigger.
pub const SESSION_ID_DEFAULT_RULE: &str = "session-id-default";

/// A (parent predicate, child predicate, mutation) triple.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    parent: Predicate,
    child: Predicate,
    mutation: Mutation,
}

impl Rule {
    pub fn new(name: impl Into<String>, parent: Predicate, child: Predicate, mutation: Mutation) -> Self {
        Self {
            name: name.into(),
            parent,
            child,
            mutation,
        }
    }

    /// Chains and agents connected to anything but a prompt provider get an
    /// inline prompt.
    pub fn prompt_default() -> Self {
        Self::new(
            PROMPT_DEFAULT_RULE,
            Predicate::InCategory(NodeCategory::AiChain),
            Predicate::NotInCategory(NodeCategory::PromptProvider),
            Mutation::set_parameter(PROMPT_TYPE_PARAM, PROMPT_TYPE_DEFINE),
        )
    }

    /// Memory nodes connected to a prompt provider read their session id from
    /// a custom key.
    pub fn session_id_default() -> Self {
        Self::new(
            SESSION_ID_DEFAULT_RULE,
            Predicate::InCategory(NodeCategory::PromptProvider),
            Predicate::InCategory(NodeCategory::Memory),
            Mutation::set_parameter(SESSION_ID_TYPE_PARAM, SESSION_ID_CUSTOM_KEY),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check both predicates. The child predicate is skipped when the parent
    /// does not match.
    pub fn matches(&self, registry: &Registry, parent: &Node, child: &Node) -> bool {
        self.parent.matches(registry, parent) && self.child.matches(registry, child)
    }

    /// Run the mutation on the child. Returns true if the child changed.
    pub fn mutate(&self, parent: &Node, child: &mut Node) -> bool {
        self.mutation.apply(parent, child)
    }
}
