//! workflow_run — GitHub Actions webhook payload for run state changes.

use serde::Deserialize;

/// Top-level `workflow_run` webhook body.
///
/// GitHub sends far more than this; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowEvent {
    #[serde(default)]
    pub action: String,
    pub workflow_run: WorkflowRun,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRun {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub status: WorkflowStatus,
    /// `null` until the run has completed.
    #[serde(default)]
    pub conclusion: Option<WorkflowConclusion>,
    #[serde(default)]
    pub run_number: i64,
}

/// Lifecycle status of a workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum WorkflowStatus {
    Requested,
    Queued,
    Waiting,
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Requested => "requested",
            Self::Queued => "queued",
            Self::Waiting => "waiting",
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for WorkflowStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "requested" => Self::Requested,
            "queued" => Self::Queued,
            "waiting" => Self::Waiting,
            "pending" => Self::Pending,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Other(s),
        }
    }
}

/// Terminal outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum WorkflowConclusion {
    Success,
    Failure,
    Cancelled,
    Skipped,
    TimedOut,
    Neutral,
    ActionRequired,
    Stale,
    StartupFailure,
    Other(String),
}

impl WorkflowConclusion {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Cancelled => "cancelled",
            Self::Skipped => "skipped",
            Self::TimedOut => "timed_out",
            Self::Neutral => "neutral",
            Self::ActionRequired => "action_required",
            Self::Stale => "stale",
            Self::StartupFailure => "startup_failure",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for WorkflowConclusion {
    fn from(s: String) -> Self {
        match s.as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            "cancelled" => Self::Cancelled,
            "skipped" => Self::Skipped,
            "timed_out" => Self::TimedOut,
            "neutral" => Self::Neutral,
            "action_required" => Self::ActionRequired,
            "stale" => Self::Stale,
            "startup_failure" => Self::StartupFailure,
            _ => Self::Other(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_completed_run() {
        let body = r#"{"action":"completed","workflow_run":{"id":1,"name":"build","status":"completed","conclusion":"success","run_number":5}}"#;
        let event: WorkflowEvent = serde_json::from_str(body).unwrap();

        assert_eq!(event.action, "completed");
        assert_eq!(event.workflow_run.id, 1);
        assert_eq!(event.workflow_run.name, "build");
        assert_eq!(event.workflow_run.status, WorkflowStatus::Completed);
        assert_eq!(
            event.workflow_run.conclusion,
            Some(WorkflowConclusion::Success)
        );
        assert_eq!(event.workflow_run.run_number, 5);
    }

    #[test]
    fn null_conclusion_while_running() {
        let body = r#"{"action":"in_progress","workflow_run":{"id":9,"name":"ci","status":"in_progress","conclusion":null,"run_number":2}}"#;
        let event: WorkflowEvent = serde_json::from_str(body).unwrap();

        assert_eq!(event.workflow_run.status, WorkflowStatus::InProgress);
        assert_eq!(event.workflow_run.conclusion, None);
    }

    #[test]
    fn unknown_values_are_kept() {
        let body = r#"{"workflow_run":{"name":"","status":"paused","conclusion":"exploded"}}"#;
        let event: WorkflowEvent = serde_json::from_str(body).unwrap();

        assert_eq!(event.action, "");
        assert_eq!(event.workflow_run.name, "");
        assert_eq!(
            event.workflow_run.status,
            WorkflowStatus::Other("paused".into())
        );
        assert_eq!(event.workflow_run.status.as_str(), "paused");
        assert_eq!(
            event.workflow_run.conclusion.as_ref().map(|c| c.as_str()),
            Some("exploded")
        );
    }

    #[test]
    fn extra_github_fields_are_ignored() {
        let body = r#"{
            "action": "requested",
            "repository": {"full_name": "acme/app"},
            "sender": {"login": "octocat"},
            "workflow_run": {
                "id": 30433642,
                "name": "Build",
                "head_branch": "main",
                "status": "queued",
                "conclusion": null,
                "run_number": 562,
                "event": "push"
            }
        }"#;
        let event: WorkflowEvent = serde_json::from_str(body).unwrap();

        assert_eq!(event.workflow_run.status, WorkflowStatus::Queued);
        assert_eq!(event.workflow_run.run_number, 562);
    }

    #[test]
    fn rejects_incomplete_payload() {
        assert!(serde_json::from_str::<WorkflowEvent>(r#"{"action":"completed"}"#).is_err());
        assert!(
            serde_json::from_str::<WorkflowEvent>(r#"{"workflow_run":{"name":"build"}}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<WorkflowEvent>(
            r#"{"workflow_run":{"name":"build","status":"completed","id":"one"}}"#
        )
        .is_err());
    }
}
