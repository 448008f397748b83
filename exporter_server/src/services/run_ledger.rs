//! Serialized application of run transitions to the metric sink.

use std::sync::{Mutex, PoisonError};

use crate::events::{RunOutcome, RunTransition};
use crate::metrics::RunMetrics;

/// Owns the metric sink and the lock that serializes every mutation.
pub struct RunLedger<M> {
    metrics: Mutex<M>,
}

impl<M: RunMetrics> RunLedger<M> {
    pub fn new(metrics: M) -> Self {
        Self {
            metrics: Mutex::new(metrics),
        }
    }

    /// Apply one transition for `workflow` under the ledger lock.
    ///
    /// A `Finished` transition touches two families; scrapers may see the
    /// gauge move before the counter does.
    pub fn apply(&self, workflow: &str, transition: RunTransition) {
        if transition == RunTransition::Ignored {
            return;
        }

        // A panic inside a sink call leaves the aggregates usable.
        let mut metrics = self.metrics.lock().unwrap_or_else(PoisonError::into_inner);

        match transition {
            RunTransition::Started => metrics.run_started(workflow),
            RunTransition::Finished(outcome) => {
                metrics.run_finished(workflow);
                match outcome {
                    RunOutcome::Succeeded => metrics.run_succeeded(workflow),
                    RunOutcome::Failed => metrics.run_failed(workflow),
                    RunOutcome::Untracked => {}
                }
            }
            RunTransition::Ignored => {}
        }
    }
}
