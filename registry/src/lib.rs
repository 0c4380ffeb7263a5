//! Tether Registry
//!
//! Category membership lookup for node types. The registry answers "is this
//! node type an AI chain / a prompt provider / a memory node?" and is
//! immutable after construction via RegistryBuilder.
//!
//! Names are stored bare (package prefix stripped). The registry does not
//! check that a name exists in the editor's node type registry.

mod builder;
mod config;
mod error;
mod registry;
mod types;

pub use builder::{RegistryBuilder, TypeBuilder};
pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use registry::Registry;
pub use types::TypeEntry;
