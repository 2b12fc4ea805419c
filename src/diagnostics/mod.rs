//! Diagnostics data model exposed by the isolation producer.
//!
//! `ProductionReport` is the main entry point: it bundles the published
//! `IsolationMap` with a per-candidate `IsolationBreakdown` and the timing of
//! each stage of the event.

pub mod isolation;
pub mod production;
pub mod timing;

pub use isolation::IsolationBreakdown;
pub use production::{InputDescriptor, ProductionReport};
pub use timing::{StageTiming, TimingBreakdown};
