//! Particle-flow calorimeter clusters consumed by the isolation engine.

use crate::geometry::{transverse, Direction};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Calorimeter subsystem a cluster was reconstructed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClusterLayer {
    /// Barrel/endcap hadron calorimeter.
    #[default]
    Hcal,
    /// Forward calorimeter, electromagnetic fibres.
    HfEm,
    /// Forward calorimeter, hadronic fibres.
    HfHad,
}

impl ClusterLayer {
    pub fn is_forward(self) -> bool {
        matches!(self, ClusterLayer::HfEm | ClusterLayer::HfHad)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PfCluster {
    pub direction: Direction,
    pub energy: f64,
    #[serde(default)]
    pub layer: ClusterLayer,
}

impl PfCluster {
    pub fn new(eta: f64, phi: f64, energy: f64, layer: ClusterLayer) -> Self {
        Self {
            direction: Direction::new(eta, phi),
            energy,
            layer,
        }
    }

    /// Cluster built from its reconstructed position in detector coordinates.
    pub fn from_position(position: &Point3<f64>, energy: f64, layer: ClusterLayer) -> Self {
        Self {
            direction: Direction::from_position(position),
            energy,
            layer,
        }
    }

    pub fn eta(&self) -> f64 {
        self.direction.eta
    }

    pub fn phi(&self) -> f64 {
        self.direction.phi
    }

    /// Transverse energy at the cluster's own pseudorapidity.
    pub fn et(&self) -> f64 {
        transverse(self.energy, self.direction.eta)
    }
}
