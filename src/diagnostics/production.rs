use super::{IsolationBreakdown, TimingBreakdown};
use crate::producer::IsolationMap;
use serde::Serialize;

/// Sizes of the collections a producer consumed for one event.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub event_id: u64,
    pub candidates: usize,
    /// `(label, cluster count)` in the order the collections were visited.
    pub cluster_collections: Vec<(String, usize)>,
}

/// Result of [`IsolationProducer::produce_with_diagnostics`](crate::IsolationProducer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReport {
    pub map: IsolationMap,
    pub input: InputDescriptor,
    pub candidates: Vec<IsolationBreakdown>,
    pub timings: TimingBreakdown,
}
