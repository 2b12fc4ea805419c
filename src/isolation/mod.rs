//! HCAL PF-cluster isolation sum.
//!
//! For each e/γ candidate the engine adds up the energy of calorimeter clusters
//! inside a cone of radius `dr_max` around the candidate direction, excluding
//! an inner veto cone and an η strip, and ignoring clusters below an energy
//! threshold.
//!
//! Selection, per cluster
//! - Region: the candidate's |η| against 1.479 picks the barrel or endcap cuts.
//! - Forward clusters (HF EM/HAD) only count when `use_hf` is enabled.
//! - Cone: ΔR² = Δη² + Δφ² (Δφ wrapped to [-π, π]) must be below `dr_max²`.
//! - Veto: ΔR below the region's `dr_veto`, or |Δη| below its `eta_strip`,
//!   removes the cluster. Both exclusions apply at once.
//! - Threshold: Et in the barrel, E in the endcap, must reach the region's
//!   `energy_threshold`. The comparison is signed.
//! - Accumulation: cluster Et when `use_et`, cluster energy otherwise.
//!
//! Notes
//! - The engine is stateless apart from its parameters; calls are pure and
//!   can run concurrently over shared cluster collections.
//! - Nothing is validated. Degenerate inputs give degenerate sums, and empty
//!   collections give zero.

mod engine;
mod params;

pub use engine::{ClusterVerdict, HcalClusterIsolation};
pub use params::{IsolationParams, RegionCuts};
