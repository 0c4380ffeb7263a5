//! Native connector used by editor hosts.

use serde::Serialize;
use tether_rule::{DispatchOutcome, Dispatcher, RuleSet};
use tracing::debug;

use crate::config::ConnectorConfig;
use crate::error::BindingResult;
use crate::node_data::NodeData;

/// Result handed back to the editor after a connection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResult {
    pub fired: bool,
    pub rule: Option<String>,
    pub applied: bool,
    pub child: NodeData,
}

impl ConnectionResult {
    fn new(outcome: DispatchOutcome, child: NodeData) -> Self {
        match outcome {
            DispatchOutcome::NoMatch => Self {
                fired: false,
                rule: None,
                applied: false,
                child,
            },
            DispatchOutcome::Fired { rule, applied } => Self {
                fired: true,
                rule: Some(rule),
                applied,
                child,
            },
        }
    }
}

/// Owns a dispatcher built from a [`ConnectorConfig`].
#[derive(Debug, Clone, Default)]
pub struct Connector {
    dispatcher: Dispatcher,
}

impl Connector {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Build the registry and rule set a configuration describes.
    pub fn from_config(config: &ConnectorConfig) -> BindingResult<Self> {
        let registry = config.registry.build()?;
        let rules = RuleSet::standard().without(config.disabled_rules.as_slice())?;
        debug!(
            types = registry.type_count(),
            rules = ?rules.names(),
            "connector configured"
        );
        Ok(Self::new(Dispatcher::new(registry, rules)))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Apply the first matching rule to `child` in place.
    ///
    /// Fails only when a record has no usable type; `child` is left as it was
    /// in that case.
    pub fn mutate_nodes_for_connection(
        &self,
        parent: &NodeData,
        child: &mut NodeData,
    ) -> BindingResult<DispatchOutcome> {
        let parent_node = parent.to_node()?;
        let mut child_node = child.take_node()?;
        let outcome = self.dispatcher.dispatch(&parent_node, &mut child_node);
        child.restore(child_node);
        Ok(outcome)
    }

    /// JSON-in, JSON-out form for hosts outside the browser.
    pub fn mutate_json(&self, parent_json: &str, child_json: &str) -> BindingResult<String> {
        let result = self.connect(NodeData::from_json(parent_json)?, NodeData::from_json(child_json)?)?;
        Ok(serde_json::to_string(&result)?)
    }

    pub(crate) fn connect(&self, parent: NodeData, mut child: NodeData) -> BindingResult<ConnectionResult> {
        let outcome = self.mutate_nodes_for_connection(&parent, &mut child)?;
        Ok(ConnectionResult::new(outcome, child))
    }
}
