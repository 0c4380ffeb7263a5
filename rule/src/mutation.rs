//! Mutations applied to the child node when a rule fires.

use std::fmt;
use tether_core::{Node, Value};

/// Parameter that selects where a chain or agent reads its prompt from.
pub const PROMPT_TYPE_PARAM: &str = "promptType";

/// `promptType` value for a prompt defined inline on the node.
pub const PROMPT_TYPE_DEFINE: &str = "define";

/// Parameter that selects where a memory node reads its session id from.
pub const SESSION_ID_TYPE_PARAM: &str = "sessionIdType";

/// `sessionIdType` value for a session id given as a custom key.
pub const SESSION_ID_CUSTOM_KEY: &str = "customKey";

/// Custom mutation: receives the parent and the child, returns whether it applied.
pub type MutateFn = fn(&Node, &mut Node) -> bool;

/// An in-place change to the child node.
#[derive(Clone)]
pub enum Mutation {
    /// Assign a single parameter, leaving the rest of the bag untouched.
    SetParameter { name: String, value: Value },
    /// Arbitrary change.
    Custom(MutateFn),
}

impl Mutation {
    pub fn set_parameter(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::SetParameter {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Apply to the child. Returns true if the child changed.
    pub fn apply(&self, parent: &Node, child: &mut Node) -> bool {
        match self {
            Mutation::SetParameter { name, value } => child.set_param(name, value.clone()),
            Mutation::Custom(mutate) => mutate(parent, child),
        }
    }
}

impl fmt::Debug for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::SetParameter { name, value } => f
                .debug_struct("SetParameter")
                .field("name", name)
                .field("value", value)
                .finish(),
            Mutation::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::SetParameter { name, value } => write!(f, "set {} = {}", name, value),
            Mutation::Custom(_) => write!(f, "custom"),
        }
    }
}
