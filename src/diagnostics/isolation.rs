use crate::geometry::Region;
use crate::isolation::ClusterVerdict;
use serde::Serialize;

/// Per-candidate account of how every inspected cluster was treated.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolationBreakdown {
    pub region: Region,
    pub sum: f64,
    pub accepted: usize,
    pub forward_disabled: usize,
    pub outside_cone: usize,
    pub inside_veto_cone: usize,
    pub inside_eta_strip: usize,
    pub below_threshold: usize,
}

impl IsolationBreakdown {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            sum: 0.0,
            accepted: 0,
            forward_disabled: 0,
            outside_cone: 0,
            inside_veto_cone: 0,
            inside_eta_strip: 0,
            below_threshold: 0,
        }
    }

    pub fn record(&mut self, verdict: ClusterVerdict) {
        match verdict {
            ClusterVerdict::Accepted(value) => {
                self.accepted += 1;
                self.sum += value;
            }
            ClusterVerdict::ForwardDisabled => self.forward_disabled += 1,
            ClusterVerdict::OutsideCone => self.outside_cone += 1,
            ClusterVerdict::InsideVetoCone => self.inside_veto_cone += 1,
            ClusterVerdict::InsideEtaStrip => self.inside_eta_strip += 1,
            ClusterVerdict::BelowThreshold => self.below_threshold += 1,
        }
    }

    /// Number of clusters looked at, whatever their verdict.
    pub fn inspected(&self) -> usize {
        self.accepted
            + self.forward_disabled
            + self.outside_cone
            + self.inside_veto_cone
            + self.inside_eta_strip
            + self.below_threshold
    }
}
