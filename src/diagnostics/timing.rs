use serde::Serialize;
use std::time::Instant;

/// Wall-clock time spent in one stage of producing an event.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: &'static str,
    pub elapsed_ms: f64,
}

/// Stage timings for one produced event, in execution order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Runs `stage`, records its elapsed time under `label` and returns its output.
    pub fn measure<T>(&mut self, label: &'static str, stage: impl FnOnce() -> T) -> T {
        let t0 = Instant::now();
        let out = stage();
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        self.stages.push(StageTiming { label, elapsed_ms });
        self.total_ms += elapsed_ms;
        out
    }
}
