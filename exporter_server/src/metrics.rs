//! Prometheus metrics for workflow run observability.

use metrics::{counter, describe_counter, describe_gauge, gauge, with_local_recorder};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};

pub const RUNNING_GAUGE: &str = "github_actions_running_total";
pub const SUCCESS_COUNTER: &str = "github_actions_success_total";
pub const FAILURE_COUNTER: &str = "github_actions_failure_total";

/// Label every family is keyed by.
pub const WORKFLOW_LABEL: &str = "workflow_name";

/// Sink for the three per-workflow aggregates.
///
/// Takes `&mut self` so callers must hold the ledger lock to reach it.
pub trait RunMetrics: Send {
    fn run_started(&mut self, workflow: &str);
    fn run_finished(&mut self, workflow: &str);
    fn run_succeeded(&mut self, workflow: &str);
    fn run_failed(&mut self, workflow: &str);
}

/// Aggregates recorded into a process-owned Prometheus recorder.
///
/// The recorder is never installed globally, so each instance is isolated.
pub struct PrometheusRunMetrics {
    recorder: PrometheusRecorder,
}

impl PrometheusRunMetrics {
    pub fn new() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        with_local_recorder(&recorder, || {
            describe_gauge!(RUNNING_GAUGE, "Number of workflows currently running");
            describe_counter!(SUCCESS_COUNTER, "Total number of successful workflow runs");
            describe_counter!(FAILURE_COUNTER, "Total number of failed workflow runs");
        });
        Self { recorder }
    }

    /// Read side for `/metrics`; does not go through the ledger lock.
    pub fn handle(&self) -> PrometheusHandle {
        self.recorder.handle()
    }
}

impl Default for PrometheusRunMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RunMetrics for PrometheusRunMetrics {
    fn run_started(&mut self, workflow: &str) {
        with_local_recorder(&self.recorder, || {
            gauge!(RUNNING_GAUGE, WORKFLOW_LABEL => workflow.to_string()).increment(1.0);
        });
    }

    fn run_finished(&mut self, workflow: &str) {
        with_local_recorder(&self.recorder, || {
            gauge!(RUNNING_GAUGE, WORKFLOW_LABEL => workflow.to_string()).decrement(1.0);
        });
    }

    fn run_succeeded(&mut self, workflow: &str) {
        with_local_recorder(&self.recorder, || {
            counter!(SUCCESS_COUNTER, WORKFLOW_LABEL => workflow.to_string()).increment(1);
        });
    }

    fn run_failed(&mut self, workflow: &str) {
        with_local_recorder(&self.recorder, || {
            counter!(FAILURE_COUNTER, WORKFLOW_LABEL => workflow.to_string()).increment(1);
        });
    }
}

/// Pull a single sample out of rendered exposition text.
#[cfg(test)]
pub(crate) fn sample(rendered: &str, family: &str, workflow: &str) -> Option<f64> {
    let prefix = format!("{family}{{{WORKFLOW_LABEL}=\"{workflow}\"}} ");
    rendered
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .and_then(|value| value.trim().parse().ok())
}
