//! JSON configuration for the producer and the command-line tool.
//!
//! - [`producer`]: producer parameters with their conventional names and defaults.
//! - [`tool`]: the `isolation_demo` configuration (input, kind, outputs).

pub mod producer;
pub mod tool;

pub use producer::ProducerConfig;
pub use tool::{load_config, IsolationToolConfig};
