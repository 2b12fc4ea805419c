//! Per-event orchestration around the isolation engine.
//!
//! Modules
//! - [`options`] – resolved labels and isolation parameters.
//! - `pipeline` – the [`IsolationProducer`] itself.
//! - `value_map` – the published [`IsolationMap`].
//!
//! The producer reads one candidate collection and the HCAL cluster
//! collection from the event; when forward clusters are enabled it also reads
//! the HF EM and HF HAD collections. Any configured product missing from the
//! event is a [`PersistencyError`](crate::error::PersistencyError).

pub mod options;
mod pipeline;
mod value_map;

pub use options::ProducerOptions;
pub use pipeline::IsolationProducer;
pub use value_map::IsolationMap;
