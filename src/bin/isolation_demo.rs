use egamma_isolation::config::{self, IsolationToolConfig};
use egamma_isolation::diagnostics::ProductionReport;
use egamma_isolation::error::PersistencyError;
use egamma_isolation::io::write_json_file;
use egamma_isolation::types::{Candidate, CandidateKind, Electron, Photon};
use egamma_isolation::{Event, IsolationProducer};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), PersistencyError> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;
    let event = Event::load(&config.input)?;

    let output = match config.candidate_kind {
        CandidateKind::Electron => produce::<Electron>(&config, &event)?,
        CandidateKind::Photon => produce::<Photon>(&config, &event)?,
    };
    for (index, iso) in output.report.map.iter() {
        println!("{} {index}: hcal_iso={iso:.4}", output.candidate_kind_label());
    }
    write_json_file(&config.output.result_json, &output)?;
    println!("Saved result to {}", config.output.result_json.display());
    Ok(())
}

fn produce<T: Candidate>(
    config: &IsolationToolConfig,
    event: &Event,
) -> Result<IsolationDemoOutput, PersistencyError> {
    let producer = IsolationProducer::<T>::new(config.producer.resolve()?);
    let report = producer.produce_with_diagnostics(event)?;
    Ok(IsolationDemoOutput {
        module_label: IsolationProducer::<T>::default_label(),
        candidate_kind: T::KIND,
        report,
    })
}

fn usage() -> PersistencyError {
    PersistencyError::new("Usage: isolation_demo <config.json>")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IsolationDemoOutput {
    module_label: &'static str,
    candidate_kind: CandidateKind,
    report: ProductionReport,
}

impl IsolationDemoOutput {
    fn candidate_kind_label(&self) -> &'static str {
        match self.candidate_kind {
            CandidateKind::Electron => "electron",
            CandidateKind::Photon => "photon",
        }
    }
}
