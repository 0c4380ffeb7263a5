//! Connection mutation dispatcher.

use tether_core::Node;
use tether_registry::Registry;
use tracing::{debug, trace};

use crate::ruleset::RuleSet;

/// What happened to a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No rule matched; the child is untouched.
    NoMatch,
    /// A rule matched and its mutation ran.
    Fired {
        /// Name of the rule that fired.
        rule: String,
        /// Whether the mutation changed the child.
        applied: bool,
    },
}

impl DispatchOutcome {
    /// Name of the rule that fired, if any.
    pub fn rule(&self) -> Option<&str> {
        match self {
            DispatchOutcome::NoMatch => None,
            DispatchOutcome::Fired { rule, .. } => Some(rule),
        }
    }

    pub fn is_fired(&self) -> bool {
        matches!(self, DispatchOutcome::Fired { .. })
    }
}

/// Applies the first matching rule of a rule set to a new connection.
///
/// The dispatcher holds no per-call state, so the same (parent type, child
/// type) pair always produces the same outcome.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Registry,
    rules: RuleSet,
}

impl Dispatcher {
    /// Create a dispatcher over a registry and a rule set.
    pub fn new(registry: Registry, rules: RuleSet) -> Self {
        Self { registry, rules }
    }

    /// The standard registry with the standard rules.
    pub fn standard() -> Self {
        Self::new(Registry::standard(), RuleSet::standard())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Handle a connection from `parent` to `child`.
    ///
    /// Rules are evaluated in order; the first one whose parent and child
    /// predicates both hold has its mutation applied to `child` and
    /// evaluation stops there, whatever the mutation reports. The caller
    /// holds the only reference to `child` for the duration of the call.
    pub fn dispatch(&self, parent: &Node, child: &mut Node) -> DispatchOutcome {
        for rule in &self.rules {
            if !rule.matches(&self.registry, parent, child) {
                continue;
            }

            let applied = rule.mutate(parent, child);
            debug!(
                rule = rule.name(),
                parent = %parent.node_type,
                child = %child.node_type,
                applied,
                "connection rule fired"
            );
            return DispatchOutcome::Fired {
                rule: rule.name().to_string(),
                applied,
            };
        }

        trace!(
            parent = %parent.node_type,
            child = %child.node_type,
            "no connection rule matched"
        );
        DispatchOutcome::NoMatch
    }

    /// Fire-and-forget form of [`Dispatcher::dispatch`].
    pub fn mutate_nodes_for_connection(&self, parent: &Node, child: &mut Node) {
        let _ = self.dispatch(parent, child);
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}
