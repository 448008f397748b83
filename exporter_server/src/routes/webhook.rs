//! GitHub `workflow_run` webhook handler — decodes the run and updates metrics.

use crate::error::WebhookError;
use crate::events::RunTransition;
use crate::metrics::RunMetrics;
use crate::models::workflow_run::WorkflowEvent;
use crate::services::run_ledger::RunLedger;

pub const EVENT_PROCESSED: &str = "Event processed";

/// Handle an already-read webhook body.
///
/// Decoding happens before the ledger lock is taken; a rejected payload
/// never reaches the metrics.
pub fn handle_webhook<M: RunMetrics>(
    ledger: &RunLedger<M>,
    body: &[u8],
) -> Result<&'static str, WebhookError> {
    tracing::debug!(payload = %String::from_utf8_lossy(body), "Received workflow webhook");

    let event: WorkflowEvent = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Workflow webhook payload rejected: {e}");
        WebhookError::PayloadDecode(e)
    })?;

    let run = &event.workflow_run;
    let transition = RunTransition::classify(&run.status, run.conclusion.as_ref());
    ledger.apply(&run.name, transition);

    tracing::info!(
        workflow = %run.name,
        run_id = run.id,
        run_number = run.run_number,
        action = %event.action,
        status = run.status.as_str(),
        conclusion = run.conclusion.as_ref().map_or("none", |c| c.as_str()),
        transition = transition.as_str(),
        "Workflow run event processed"
    );

    Ok(EVENT_PROCESSED)
}
