//! Tether Bindings
//!
//! The boundary between the workflow editor and the dispatcher. The editor
//! hands over node records as JSON (or as JS objects in the browser); the
//! child record comes back with its parameter defaults filled in.

mod bindings;
mod config;
mod connector;
mod error;
mod node_data;

pub use bindings::WasmConnector;
pub use config::ConnectorConfig;
pub use connector::{ConnectionResult, Connector};
pub use error::{BindingError, BindingResult};
pub use node_data::NodeData;
