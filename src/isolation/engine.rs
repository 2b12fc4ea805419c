use super::params::IsolationParams;
use crate::cluster::PfCluster;
use crate::diagnostics::IsolationBreakdown;
use crate::geometry::{delta_r2, Direction, Region};
use crate::types::Candidate;
use log::trace;

/// Outcome of testing one cluster against a candidate's isolation window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClusterVerdict {
    /// Cluster passes every cut and adds this amount to the sum.
    Accepted(f64),
    /// Forward-calorimeter cluster while HF clusters are disabled.
    ForwardDisabled,
    /// ΔR at or beyond the cone radius.
    OutsideCone,
    /// ΔR inside the region's veto cone.
    InsideVetoCone,
    /// |Δη| inside the region's eta strip.
    InsideEtaStrip,
    /// Cluster energy below the region's threshold.
    BelowThreshold,
}

/// Region-resolved cuts, squared where compared against ΔR².
#[derive(Clone, Copy, Debug)]
struct Window {
    region: Region,
    dr_veto2: f64,
    eta_strip: f64,
    energy_threshold: f64,
}

/// HCAL PF-cluster isolation around e/γ candidates.
///
/// Holds immutable parameters only, so a single instance can be shared across
/// threads and reused for every candidate of a processing pass.
#[derive(Clone, Debug)]
pub struct HcalClusterIsolation {
    params: IsolationParams,
    dr_max2: f64,
}

impl HcalClusterIsolation {
    pub fn new(params: IsolationParams) -> Self {
        let dr_max2 = params.dr_max * params.dr_max;
        Self { params, dr_max2 }
    }

    pub fn params(&self) -> &IsolationParams {
        &self.params
    }

    /// Sum of cluster energies (or Et) inside the isolation window of `candidate`.
    ///
    /// `collections` are visited in order; forward collections are ignored unless
    /// `use_hf` is set. Inputs are not validated: NaN values flow straight into
    /// the sum, and negative energies only count when they clear the threshold.
    pub fn sum<C: Candidate>(&self, candidate: &C, collections: &[&[PfCluster]]) -> f64 {
        let window = self.window(candidate.region());
        let direction = candidate.direction();
        let mut sum = 0.0;
        for cluster in collections.iter().flat_map(|c| c.iter()) {
            if let ClusterVerdict::Accepted(value) = self.classify(&window, &direction, cluster) {
                sum += value;
            }
        }
        trace!(
            "HcalClusterIsolation: eta={:.3} phi={:.3} sum={:.4}",
            direction.eta,
            direction.phi,
            sum
        );
        sum
    }

    /// Same sum as [`sum`](Self::sum), with per-verdict cluster counts.
    pub fn sum_with_breakdown<C: Candidate>(
        &self,
        candidate: &C,
        collections: &[&[PfCluster]],
    ) -> IsolationBreakdown {
        let window = self.window(candidate.region());
        let direction = candidate.direction();
        let mut breakdown = IsolationBreakdown::new(window.region);
        for cluster in collections.iter().flat_map(|c| c.iter()) {
            breakdown.record(self.classify(&window, &direction, cluster));
        }
        breakdown
    }

    /// Verdict for a single cluster against a candidate direction.
    pub fn verdict(&self, direction: &Direction, cluster: &PfCluster) -> ClusterVerdict {
        let window = self.window(Region::from_eta(direction.eta));
        self.classify(&window, direction, cluster)
    }

    fn window(&self, region: Region) -> Window {
        let cuts = self.params.cuts(region);
        Window {
            region,
            dr_veto2: cuts.dr_veto * cuts.dr_veto,
            eta_strip: cuts.eta_strip,
            energy_threshold: cuts.energy_threshold,
        }
    }

    fn classify(
        &self,
        window: &Window,
        direction: &Direction,
        cluster: &PfCluster,
    ) -> ClusterVerdict {
        if cluster.layer.is_forward() && !self.params.use_hf {
            return ClusterVerdict::ForwardDisabled;
        }

        let dr2 = delta_r2(direction, &cluster.direction);
        if dr2 >= self.dr_max2 {
            return ClusterVerdict::OutsideCone;
        }
        if dr2 < window.dr_veto2 {
            return ClusterVerdict::InsideVetoCone;
        }
        if (direction.eta - cluster.direction.eta).abs() < window.eta_strip {
            return ClusterVerdict::InsideEtaStrip;
        }

        // Barrel thresholds cut on Et, endcap thresholds on energy.
        let measured = match window.region {
            Region::Barrel => cluster.et(),
            Region::Endcap => cluster.energy,
        };
        if measured < window.energy_threshold {
            return ClusterVerdict::BelowThreshold;
        }

        let value = if self.params.use_et {
            cluster.et()
        } else {
            cluster.energy
        };
        ClusterVerdict::Accepted(value)
    }
}
