//! Resolved producer configuration.
//!
//! Labels name the event products the producer reads; the isolation knobs are
//! forwarded untouched to the engine.

use crate::isolation::IsolationParams;

pub const DEFAULT_CANDIDATE_LABEL: &str = "gedGsfElectrons";
pub const DEFAULT_HCAL_LABEL: &str = "particleFlowClusterHCAL";
pub const DEFAULT_HF_EM_LABEL: &str = "hltParticleFlowClusterHFEM";
pub const DEFAULT_HF_HAD_LABEL: &str = "hltParticleFlowClusterHFHAD";

#[derive(Clone, Debug, PartialEq)]
pub struct ProducerOptions {
    /// Candidate collection the values are computed for.
    pub candidate_label: String,
    /// HCAL PF clusters, always read.
    pub hcal_label: String,
    /// Forward EM clusters, read only when `isolation.use_hf` is set.
    pub hf_em_label: String,
    /// Forward HAD clusters, read only when `isolation.use_hf` is set.
    pub hf_had_label: String,
    pub isolation: IsolationParams,
}

impl Default for ProducerOptions {
    fn default() -> Self {
        Self {
            candidate_label: DEFAULT_CANDIDATE_LABEL.to_string(),
            hcal_label: DEFAULT_HCAL_LABEL.to_string(),
            hf_em_label: String::new(),
            hf_had_label: String::new(),
            isolation: IsolationParams::default(),
        }
    }
}

impl ProducerOptions {
    /// Labels of the cluster collections to read, in visiting order.
    pub fn cluster_labels(&self) -> Vec<&str> {
        let mut labels = vec![self.hcal_label.as_str()];
        if self.isolation.use_hf {
            labels.push(self.hf_em_label.as_str());
            labels.push(self.hf_had_label.as_str());
        }
        labels
    }
}
