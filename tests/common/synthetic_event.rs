use egamma_isolation::cluster::{ClusterLayer, PfCluster};
use egamma_isolation::producer::options::{
    DEFAULT_CANDIDATE_LABEL, DEFAULT_HCAL_LABEL, DEFAULT_HF_EM_LABEL, DEFAULT_HF_HAD_LABEL,
};
use egamma_isolation::types::Electron;
use egamma_isolation::Event;

/// Places `count` clusters of equal energy on a ring of radius `dr` around (eta, phi).
pub fn ring_clusters(
    eta: f64,
    phi: f64,
    dr: f64,
    count: usize,
    energy: f64,
    layer: ClusterLayer,
) -> Vec<PfCluster> {
    assert!(count > 0, "ring needs at least one cluster");
    (0..count)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / count as f64;
            PfCluster::new(eta + dr * angle.cos(), phi + dr * angle.sin(), energy, layer)
        })
        .collect()
}

/// Event with one barrel and one endcap electron, each surrounded by HCAL
/// clusters at ΔR = 0.02 (core) and ΔR = 0.2 (isolation ring), plus HF
/// clusters around the endcap electron.
pub fn two_electron_event() -> Event {
    let barrel = Electron::new(0.4, 0.8, 45.0, -1);
    let endcap = Electron::new(2.0, -2.0, 60.0, 1);

    let mut hcal = Vec::new();
    hcal.extend(ring_clusters(0.4, 0.8, 0.02, 2, 6.0, ClusterLayer::Hcal));
    hcal.extend(ring_clusters(0.4, 0.8, 0.2, 4, 1.0, ClusterLayer::Hcal));
    hcal.extend(ring_clusters(2.0, -2.0, 0.02, 2, 6.0, ClusterLayer::Hcal));
    hcal.extend(ring_clusters(2.0, -2.0, 0.2, 4, 2.0, ClusterLayer::Hcal));

    let hf_em = ring_clusters(2.0, -2.0, 0.15, 2, 3.0, ClusterLayer::HfEm);
    let hf_had = ring_clusters(2.0, -2.0, 0.25, 1, 4.0, ClusterLayer::HfHad);

    let mut event = Event::new(1001);
    event
        .put_electrons(DEFAULT_CANDIDATE_LABEL, vec![barrel, endcap])
        .put_clusters(DEFAULT_HCAL_LABEL, hcal)
        .put_clusters(DEFAULT_HF_EM_LABEL, hf_em)
        .put_clusters(DEFAULT_HF_HAD_LABEL, hf_had);
    event
}
