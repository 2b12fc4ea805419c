//! Parameter types configuring the isolation sum.
//!
//! Radii are in (η, φ) units and thresholds in GeV. Defaults reproduce the
//! standard configuration: a 0.3 cone, no veto, no strip, no thresholds,
//! transverse-energy accumulation and HCAL clusters only.

use crate::geometry::Region;

/// Exclusion and threshold knobs applied to one detector region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionCuts {
    /// Clusters closer than this ΔR to the candidate are vetoed.
    pub dr_veto: f64,
    /// Clusters with |Δη| below this half-width are vetoed regardless of φ.
    pub eta_strip: f64,
    /// Minimum cluster energy (Et in the barrel, E in the endcap).
    pub energy_threshold: f64,
}

/// Isolation-wide parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct IsolationParams {
    /// Outer radius of the isolation cone.
    pub dr_max: f64,
    pub barrel: RegionCuts,
    pub endcap: RegionCuts,
    /// Accumulate cluster Et instead of cluster energy.
    pub use_et: bool,
    /// Let forward-calorimeter clusters contribute.
    pub use_hf: bool,
}

impl Default for IsolationParams {
    fn default() -> Self {
        Self {
            dr_max: 0.3,
            barrel: RegionCuts::default(),
            endcap: RegionCuts::default(),
            use_et: true,
            use_hf: false,
        }
    }
}

impl IsolationParams {
    pub fn cuts(&self, region: Region) -> &RegionCuts {
        match region {
            Region::Barrel => &self.barrel,
            Region::Endcap => &self.endcap,
        }
    }
}
