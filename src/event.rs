//! In-memory container of the labelled input products of one event.
//!
//! Collections are looked up by the labels configured on a producer. The
//! event only stores what it is given; it never reorders or mutates products.

use crate::cluster::PfCluster;
use crate::error::{PersistencyError, Result};
use crate::types::{Electron, Photon};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    electrons: BTreeMap<String, Vec<Electron>>,
    #[serde(default)]
    photons: BTreeMap<String, Vec<Photon>>,
    #[serde(default)]
    clusters: BTreeMap<String, Vec<PfCluster>>,
}

impl Event {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn put_electrons(
        &mut self,
        label: impl Into<String>,
        electrons: Vec<Electron>,
    ) -> &mut Self {
        self.electrons.insert(label.into(), electrons);
        self
    }

    pub fn put_photons(&mut self, label: impl Into<String>, photons: Vec<Photon>) -> &mut Self {
        self.photons.insert(label.into(), photons);
        self
    }

    pub fn put_clusters(
        &mut self,
        label: impl Into<String>,
        clusters: Vec<PfCluster>,
    ) -> &mut Self {
        self.clusters.insert(label.into(), clusters);
        self
    }

    pub fn electrons(&self, label: &str) -> Option<&[Electron]> {
        self.electrons.get(label).map(Vec::as_slice)
    }

    pub fn photons(&self, label: &str) -> Option<&[Photon]> {
        self.photons.get(label).map(Vec::as_slice)
    }

    pub fn clusters(&self, label: &str) -> Option<&[PfCluster]> {
        self.clusters.get(label).map(Vec::as_slice)
    }

    /// Reads an event serialized as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        crate::io::read_json_file(path).map_err(|e| {
            PersistencyError::with_method(
                format!("Failed to load event: {}", e.message()),
                "Event::load",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::ClusterLayer;

    #[test]
    fn products_are_found_by_label() {
        let mut event = Event::new(7);
        event
            .put_photons("photons", vec![Photon::new(0.0, 0.0, 10.0)])
            .put_clusters(
                "particleFlowClusterHCAL",
                vec![PfCluster::new(0.1, 0.0, 2.0, ClusterLayer::Hcal)],
            );
        assert_eq!(event.photons("photons").map(<[_]>::len), Some(1));
        assert_eq!(event.clusters("particleFlowClusterHCAL").map(<[_]>::len), Some(1));
        assert!(event.clusters("particleFlowClusterHFEM").is_none());
        assert!(event.electrons("photons").is_none());
    }

    #[test]
    fn event_decodes_from_json() {
        let json = r#"{
            "id": 3,
            "electrons": { "gedGsfElectrons": [
                { "direction": { "eta": 0.2, "phi": 1.0 }, "energy": 40.0 }
            ]},
            "clusters": { "particleFlowClusterHCAL": [
                { "direction": { "eta": 0.25, "phi": 1.1 }, "energy": 1.5, "layer": "hcal" }
            ]}
        }"#;
        let event: Event = serde_json::from_str(json).expect("valid event json");
        assert_eq!(event.id, 3);
        let electrons = event.electrons("gedGsfElectrons").expect("electrons present");
        assert_eq!(electrons[0].charge, -1);
        assert_eq!(event.clusters("particleFlowClusterHCAL").map(<[_]>::len), Some(1));
    }
}
