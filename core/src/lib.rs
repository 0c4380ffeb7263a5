//! Tether Core Types
//!
//! This crate provides the foundational types shared by the connection
//! mutation dispatcher:
//! - Type identifiers (NodeType) and the known node kinds (NodeKind)
//! - Node categories used by rule predicates (NodeCategory)
//! - Parameter values (the Value enum and the Parameters bag)
//! - The node record handed over by the editor (Node)
//! - Common error types

mod error;
mod kind;
mod node;
mod node_type;
mod value;

pub use error::*;
pub use kind::*;
pub use node::*;
pub use node_type::*;
pub use value::*;
