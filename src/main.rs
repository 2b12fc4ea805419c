use egamma_isolation::cluster::{ClusterLayer, PfCluster};
use egamma_isolation::types::Electron;
use egamma_isolation::{Event, IsolationProducer, ProducerOptions};

fn main() {
    // Demo stub: builds a small synthetic event and runs the electron producer
    let options = ProducerOptions::default();
    let mut event = Event::new(1);
    event
        .put_electrons(
            options.candidate_label.clone(),
            vec![
                Electron::new(0.3, 0.5, 45.0, -1),
                Electron::new(-1.9, 2.8, 30.0, 1),
            ],
        )
        .put_clusters(
            options.hcal_label.clone(),
            vec![
                PfCluster::new(0.35, 0.45, 2.5, ClusterLayer::Hcal),
                PfCluster::new(0.1, 0.6, 1.2, ClusterLayer::Hcal),
                PfCluster::new(-1.8, -3.1, 4.0, ClusterLayer::Hcal),
            ],
        );

    let producer = IsolationProducer::<Electron>::new(options);
    match producer.produce(&event) {
        Ok(map) => {
            for (index, iso) in map.iter() {
                println!("electron {index}: hcal_iso={iso:.3}");
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
