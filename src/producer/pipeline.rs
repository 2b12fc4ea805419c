//! Per-event isolation producer.
//!
//! The [`IsolationProducer`] resolves its configured input collections from an
//! [`Event`], evaluates the isolation engine once per candidate and publishes
//! the values as an index-aligned [`IsolationMap`].
//!
//! Typical usage:
//! ```no_run
//! use egamma_isolation::{Event, IsolationProducer, ProducerOptions};
//! use egamma_isolation::types::Electron;
//!
//! # fn example(event: &Event) -> egamma_isolation::error::Result<()> {
//! let producer = IsolationProducer::<Electron>::new(ProducerOptions::default());
//! let map = producer.produce(event)?;
//! for (index, iso) in map.iter() {
//!     println!("electron {index}: hcal iso {iso:.3}");
//! }
//! # Ok(())
//! # }
//! ```
use super::options::ProducerOptions;
use super::value_map::IsolationMap;
use crate::cluster::PfCluster;
use crate::diagnostics::{InputDescriptor, IsolationBreakdown, ProductionReport, TimingBreakdown};
use crate::error::{PersistencyError, Result};
use crate::event::Event;
use crate::isolation::HcalClusterIsolation;
use crate::types::Candidate;
use log::debug;
use std::marker::PhantomData;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const PRODUCE: &str = "IsolationProducer::produce";

/// Computes HCAL PF-cluster isolation for every candidate of type `T`.
pub struct IsolationProducer<T> {
    options: ProducerOptions,
    engine: HcalClusterIsolation,
    _candidate: PhantomData<fn() -> T>,
}

/// Input collections of one event, borrowed from the event.
struct ResolvedInputs<'e, T> {
    candidates: &'e [T],
    labels: Vec<&'e str>,
    clusters: Vec<&'e [PfCluster]>,
}

impl<T: Candidate> IsolationProducer<T> {
    /// Create a producer; the engine is built once and reused for every event.
    pub fn new(options: ProducerOptions) -> Self {
        let engine = HcalClusterIsolation::new(options.isolation.clone());
        Self {
            options,
            engine,
            _candidate: PhantomData,
        }
    }

    /// Module label used when none is configured.
    pub fn default_label() -> &'static str {
        T::KIND.producer_label()
    }

    pub fn options(&self) -> &ProducerOptions {
        &self.options
    }

    pub fn engine(&self) -> &HcalClusterIsolation {
        &self.engine
    }

    /// Isolation value for each candidate, in candidate order.
    pub fn compute(&self, candidates: &[T], clusters: &[&[PfCluster]]) -> Vec<f32> {
        self.map_candidates(candidates, |cand| self.engine.sum(cand, clusters) as f32)
    }

    /// Resolve the configured products from `event` and compute their value map.
    pub fn produce(&self, event: &Event) -> Result<IsolationMap> {
        let t0 = Instant::now();
        let inputs = self.resolve(event)?;
        let values = self.compute(inputs.candidates, &inputs.clusters);
        debug!(
            "IsolationProducer: event={} candidates={} clusters={:?} elapsed_ms={:.3}",
            event.id,
            inputs.candidates.len(),
            inputs.clusters.iter().map(|c| c.len()).collect::<Vec<_>>(),
            t0.elapsed().as_secs_f64() * 1000.0
        );
        Ok(IsolationMap::new(&self.options.candidate_label, values))
    }

    /// Like [`produce`](Self::produce), with per-candidate breakdowns and timings.
    pub fn produce_with_diagnostics(&self, event: &Event) -> Result<ProductionReport> {
        let mut timings = TimingBreakdown::default();
        let inputs = timings.measure("resolve", || self.resolve(event))?;
        let breakdowns: Vec<IsolationBreakdown> = timings.measure("isolation", || {
            self.map_candidates(inputs.candidates, |cand| {
                self.engine.sum_with_breakdown(cand, &inputs.clusters)
            })
        });
        let values = breakdowns.iter().map(|b| b.sum as f32).collect();
        debug!(
            "IsolationProducer: event={} candidates={} total_ms={:.3}",
            event.id,
            inputs.candidates.len(),
            timings.total_ms
        );

        let input = InputDescriptor {
            event_id: event.id,
            candidates: inputs.candidates.len(),
            cluster_collections: inputs
                .labels
                .iter()
                .zip(&inputs.clusters)
                .map(|(label, clusters)| (label.to_string(), clusters.len()))
                .collect(),
        };
        Ok(ProductionReport {
            map: IsolationMap::new(&self.options.candidate_label, values),
            input,
            candidates: breakdowns,
            timings,
        })
    }

    fn resolve<'e>(&'e self, event: &'e Event) -> Result<ResolvedInputs<'e, T>> {
        let label = self.options.candidate_label.as_str();
        let candidates = T::collection(event, label).ok_or_else(|| missing(event, label))?;

        let labels = self.options.cluster_labels();
        let clusters = labels
            .iter()
            .map(|label| event.clusters(label).ok_or_else(|| missing(event, label)))
            .collect::<Result<Vec<_>>>()?;

        Ok(ResolvedInputs {
            candidates,
            labels,
            clusters,
        })
    }

    #[cfg(feature = "parallel")]
    fn map_candidates<R, F>(&self, candidates: &[T], f: F) -> Vec<R>
    where
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        candidates.par_iter().map(f).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn map_candidates<R, F>(&self, candidates: &[T], f: F) -> Vec<R>
    where
        F: Fn(&T) -> R,
    {
        candidates.iter().map(f).collect()
    }
}

fn missing(event: &Event, label: &str) -> PersistencyError {
    PersistencyError::with_method(
        format!("product '{label}' not found in event {}", event.id),
        PRODUCE,
    )
}
