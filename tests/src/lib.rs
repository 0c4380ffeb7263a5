//! Tether Integration Tests
//!
//! Scenario harness for connection rules. A scenario wires parent nodes to
//! child nodes through a dispatcher and checks what happened to each child.
//!
//! ```ignore
//! use tether_tests::prelude::*;
//!
//! Scenario::new("agent_memory")
//!     .connect("agent_to_buffer", node(NodeKind::Agent), node(NodeKind::MemoryBufferWindow), |e| {
//!         e.fires(PROMPT_DEFAULT_RULE).param(PROMPT_TYPE_PARAM, PROMPT_TYPE_DEFINE)
//!     })
//!     .run()
//!     .unwrap();
//! ```

mod expectation;

pub use error::{ScenarioError, ScenarioResult};
pub use expectation::Expectation;
pub use fixtures::{all_type_names, node, typed, UNKNOWN_TYPES};
pub use logging::init_tracing;
pub use scenario::{Scenario, Step};

/// Everything a test file needs.
pub mod prelude {
    pub use crate::{
        all_type_names, init_tracing, node, typed, Expectation, Scenario, ScenarioError,
        ScenarioResult, Step, UNKNOWN_TYPES,
    };
    pub use tether_core::{params, Node, NodeCategory, NodeKind, NodeType, Parameters, Value};
    pub use tether_registry::{Registry, RegistryBuilder, RegistryConfig};
    pub use tether_rule::{
        DispatchOutcome, Dispatcher, Mutation, Predicate, Rule, RuleSet, PROMPT_DEFAULT_RULE,
        PROMPT_TYPE_DEFINE, PROMPT_TYPE_PARAM, SESSION_ID_CUSTOM_KEY, SESSION_ID_DEFAULT_RULE,
        SESSION_ID_TYPE_PARAM,
    };
}
