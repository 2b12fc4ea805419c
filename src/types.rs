use crate::event::Event;
use crate::geometry::{transverse, Direction, Region};
use serde::{Deserialize, Serialize};

/// Flavour of e/γ candidate an isolation producer runs over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Electron,
    Photon,
}

impl CandidateKind {
    /// Module label a producer of this kind is registered under by default.
    pub fn producer_label(self) -> &'static str {
        match self {
            CandidateKind::Electron => "electronHcalPFClusterIsolationProducer",
            CandidateKind::Photon => "photonHcalPFClusterIsolationProducer",
        }
    }
}

/// Reconstructed object the isolation sum is computed around.
pub trait Candidate: Sized + Sync {
    const KIND: CandidateKind;

    fn eta(&self) -> f64;
    fn phi(&self) -> f64;
    fn energy(&self) -> f64;

    /// Looks up a labelled collection of this candidate type in `event`.
    fn collection<'e>(event: &'e Event, label: &str) -> Option<&'e [Self]>;

    fn et(&self) -> f64 {
        transverse(self.energy(), self.eta())
    }

    fn direction(&self) -> Direction {
        Direction::new(self.eta(), self.phi())
    }

    fn region(&self) -> Region {
        Region::from_eta(self.eta())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Electron {
    pub direction: Direction,
    pub energy: f64,
    #[serde(default = "default_charge")]
    pub charge: i8,
}

fn default_charge() -> i8 {
    -1
}

impl Electron {
    pub fn new(eta: f64, phi: f64, energy: f64, charge: i8) -> Self {
        Self {
            direction: Direction::new(eta, phi),
            energy,
            charge,
        }
    }
}

impl Candidate for Electron {
    const KIND: CandidateKind = CandidateKind::Electron;

    fn eta(&self) -> f64 {
        self.direction.eta
    }
    fn phi(&self) -> f64 {
        self.direction.phi
    }
    fn energy(&self) -> f64 {
        self.energy
    }

    fn collection<'e>(event: &'e Event, label: &str) -> Option<&'e [Self]> {
        event.electrons(label)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Photon {
    pub direction: Direction,
    pub energy: f64,
}

impl Photon {
    pub fn new(eta: f64, phi: f64, energy: f64) -> Self {
        Self {
            direction: Direction::new(eta, phi),
            energy,
        }
    }
}

impl Candidate for Photon {
    const KIND: CandidateKind = CandidateKind::Photon;

    fn eta(&self) -> f64 {
        self.direction.eta
    }
    fn phi(&self) -> f64 {
        self.direction.phi
    }
    fn energy(&self) -> f64 {
        self.energy
    }

    fn collection<'e>(event: &'e Event, label: &str) -> Option<&'e [Self]> {
        event.photons(label)
    }
}
