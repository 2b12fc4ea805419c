#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod cluster;
pub mod diagnostics;
pub mod error;
pub mod event;
pub mod isolation;
pub mod producer;
pub mod types;

// Supporting modules used by the tools.
pub mod config;
pub mod geometry;
pub mod io;

// --- High-level re-exports -------------------------------------------------

// Main entry points: producer + published values.
pub use crate::event::Event;
pub use crate::producer::{IsolationMap, IsolationProducer, ProducerOptions};

// The engine and its parameters, for callers driving it directly.
pub use crate::isolation::{HcalClusterIsolation, IsolationParams, RegionCuts};

pub use crate::error::PersistencyError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use egamma_isolation::prelude::*;
///
/// # fn main() {
/// let engine = HcalClusterIsolation::new(IsolationParams::default());
/// let photon = Photon::new(0.0, 0.0, 40.0);
/// let clusters = vec![PfCluster::new(0.1, 0.05, 3.0, ClusterLayer::Hcal)];
/// let iso = engine.sum(&photon, &[&clusters]);
/// println!("hcal iso={iso:.3}");
/// # }
/// ```
pub mod prelude {
    pub use crate::cluster::{ClusterLayer, PfCluster};
    pub use crate::types::{Candidate, Electron, Photon};
    pub use crate::{Event, HcalClusterIsolation, IsolationParams, IsolationProducer};
}
