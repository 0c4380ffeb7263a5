//! Tether Rule
//!
//! Apply connection rules when the editor links two nodes.
//!
//! Responsibilities:
//! - Classify parent and child nodes with category predicates
//! - Evaluate rules in their fixed order
//! - Fire the first matching rule and stop
//! - Write parameter defaults into the child in place
//!
//! Only the first matching rule fires. Later rules are never evaluated once
//! one has fired, even if they would also match.

mod dispatcher;
mod error;
mod mutation;
mod predicate;
mod rule;
mod ruleset;

pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use error::{RuleError, RuleResult};
pub use mutation::{
    MutateFn, Mutation, PROMPT_TYPE_DEFINE, PROMPT_TYPE_PARAM, SESSION_ID_CUSTOM_KEY,
    SESSION_ID_TYPE_PARAM,
};
pub use predicate::Predicate;
pub use rule::{Rule, PROMPT_DEFAULT_RULE, SESSION_ID_DEFAULT_RULE};
pub use ruleset::{RuleSet, RuleSetBuilder};
