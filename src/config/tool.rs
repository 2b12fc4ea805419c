use super::producer::ProducerConfig;
use crate::error::{PersistencyError, Result};
use crate::types::CandidateKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration of the `isolation_demo` tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolationToolConfig {
    /// JSON event to process.
    pub input: PathBuf,
    #[serde(default = "default_kind")]
    pub candidate_kind: CandidateKind,
    #[serde(default)]
    pub producer: ProducerConfig,
    pub output: IsolationOutputConfig,
}

fn default_kind() -> CandidateKind {
    CandidateKind::Electron
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolationOutputConfig {
    pub result_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<IsolationToolConfig> {
    crate::io::read_json_file(path).map_err(|e| {
        PersistencyError::with_method(
            format!("Failed to load config: {}", e.message()),
            "config::load_config",
        )
    })
}
