//! Workflow run transitions.
//!
//! Each event is classified on its own. Nothing here remembers whether a
//! matching `in_progress` was seen before a `completed`.

use crate::models::workflow_run::{WorkflowConclusion, WorkflowStatus};

/// How a finished run ended, as far as the metrics care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Succeeded,
    Failed,
    /// Cancelled, skipped, timed out, neutral, or no conclusion at all.
    Untracked,
}

impl From<Option<&WorkflowConclusion>> for RunOutcome {
    fn from(conclusion: Option<&WorkflowConclusion>) -> Self {
        match conclusion {
            Some(WorkflowConclusion::Success) => Self::Succeeded,
            Some(WorkflowConclusion::Failure) => Self::Failed,
            _ => Self::Untracked,
        }
    }
}

/// Effect of a single webhook on a workflow's aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunTransition {
    /// Run picked up by a runner.
    Started,
    /// Run left the running state.
    Finished(RunOutcome),
    /// Queued, requested, waiting and anything unrecognised.
    Ignored,
}

impl RunTransition {
    pub fn classify(status: &WorkflowStatus, conclusion: Option<&WorkflowConclusion>) -> Self {
        match status {
            WorkflowStatus::InProgress => Self::Started,
            WorkflowStatus::Completed => Self::Finished(RunOutcome::from(conclusion)),
            _ => Self::Ignored,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Finished(RunOutcome::Succeeded) => "succeeded",
            Self::Finished(RunOutcome::Failed) => "failed",
            Self::Finished(RunOutcome::Untracked) => "finished",
            Self::Ignored => "ignored",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_progress_starts_regardless_of_conclusion() {
        assert_eq!(
            RunTransition::classify(&WorkflowStatus::InProgress, None),
            RunTransition::Started
        );
        assert_eq!(
            RunTransition::classify(
                &WorkflowStatus::InProgress,
                Some(&WorkflowConclusion::Failure)
            ),
            RunTransition::Started
        );
    }

    #[test]
    fn completed_maps_conclusion() {
        let completed = WorkflowStatus::Completed;
        assert_eq!(
            RunTransition::classify(&completed, Some(&WorkflowConclusion::Success)),
            RunTransition::Finished(RunOutcome::Succeeded)
        );
        assert_eq!(
            RunTransition::classify(&completed, Some(&WorkflowConclusion::Failure)),
            RunTransition::Finished(RunOutcome::Failed)
        );
        for other in [
            WorkflowConclusion::Cancelled,
            WorkflowConclusion::Skipped,
            WorkflowConclusion::TimedOut,
            WorkflowConclusion::Neutral,
            WorkflowConclusion::Other("mystery".into()),
        ] {
            assert_eq!(
                RunTransition::classify(&completed, Some(&other)),
                RunTransition::Finished(RunOutcome::Untracked)
            );
        }
        assert_eq!(
            RunTransition::classify(&completed, None),
            RunTransition::Finished(RunOutcome::Untracked)
        );
    }

    #[test]
    fn other_statuses_are_ignored() {
        for status in [
            WorkflowStatus::Queued,
            WorkflowStatus::Requested,
            WorkflowStatus::Waiting,
            WorkflowStatus::Pending,
            WorkflowStatus::Other("".into()),
        ] {
            assert_eq!(
                RunTransition::classify(&status, Some(&WorkflowConclusion::Success)),
                RunTransition::Ignored
            );
        }
    }
}
