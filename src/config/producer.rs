use crate::error::{PersistencyError, Result};
use crate::isolation::{IsolationParams, RegionCuts};
use crate::producer::options::{
    ProducerOptions, DEFAULT_CANDIDATE_LABEL, DEFAULT_HCAL_LABEL, DEFAULT_HF_EM_LABEL,
    DEFAULT_HF_HAD_LABEL,
};
use serde::Deserialize;

/// Producer parameters under their conventional names.
///
/// The HF labels are optional: when absent they default to the HLT forward
/// cluster collections if `useHF` is set and to an empty label otherwise.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProducerConfig {
    pub candidate_producer: String,
    #[serde(rename = "pfClusterProducerHCAL")]
    pub pf_cluster_producer_hcal: String,
    #[serde(rename = "pfClusterProducerHFEM")]
    pub pf_cluster_producer_hfem: Option<String>,
    #[serde(rename = "pfClusterProducerHFHAD")]
    pub pf_cluster_producer_hfhad: Option<String>,
    #[serde(rename = "useHF")]
    pub use_hf: bool,
    pub dr_max: f64,
    pub dr_veto_barrel: f64,
    pub dr_veto_endcap: f64,
    pub eta_strip_barrel: f64,
    pub eta_strip_endcap: f64,
    pub energy_barrel: f64,
    pub energy_endcap: f64,
    pub use_et: bool,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            candidate_producer: DEFAULT_CANDIDATE_LABEL.to_string(),
            pf_cluster_producer_hcal: DEFAULT_HCAL_LABEL.to_string(),
            pf_cluster_producer_hfem: None,
            pf_cluster_producer_hfhad: None,
            use_hf: false,
            dr_max: 0.3,
            dr_veto_barrel: 0.0,
            dr_veto_endcap: 0.0,
            eta_strip_barrel: 0.0,
            eta_strip_endcap: 0.0,
            energy_barrel: 0.0,
            energy_endcap: 0.0,
            use_et: true,
        }
    }
}

impl ProducerConfig {
    /// Fill in the HF labels and convert to producer options.
    ///
    /// With `useHF` enabled both forward labels must name a collection.
    pub fn resolve(&self) -> Result<ProducerOptions> {
        let hf_em_label = resolve_hf_label(
            self.pf_cluster_producer_hfem.as_deref(),
            self.use_hf,
            DEFAULT_HF_EM_LABEL,
            "pfClusterProducerHFEM",
        )?;
        let hf_had_label = resolve_hf_label(
            self.pf_cluster_producer_hfhad.as_deref(),
            self.use_hf,
            DEFAULT_HF_HAD_LABEL,
            "pfClusterProducerHFHAD",
        )?;

        Ok(ProducerOptions {
            candidate_label: self.candidate_producer.clone(),
            hcal_label: self.pf_cluster_producer_hcal.clone(),
            hf_em_label,
            hf_had_label,
            isolation: IsolationParams {
                dr_max: self.dr_max,
                barrel: RegionCuts {
                    dr_veto: self.dr_veto_barrel,
                    eta_strip: self.eta_strip_barrel,
                    energy_threshold: self.energy_barrel,
                },
                endcap: RegionCuts {
                    dr_veto: self.dr_veto_endcap,
                    eta_strip: self.eta_strip_endcap,
                    energy_threshold: self.energy_endcap,
                },
                use_et: self.use_et,
                use_hf: self.use_hf,
            },
        })
    }
}

fn resolve_hf_label(
    configured: Option<&str>,
    use_hf: bool,
    default: &str,
    name: &str,
) -> Result<String> {
    match (configured, use_hf) {
        (Some(""), true) => Err(PersistencyError::with_method(
            format!("{name} must name a collection when useHF is enabled"),
            "ProducerConfig::resolve",
        )),
        (Some(label), _) => Ok(label.to_string()),
        (None, true) => Ok(default.to_string()),
        (None, false) => Ok(String::new()),
    }
}
