use serde::{Deserialize, Serialize};

/// Lifecycle state of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Incomplete,
    Expired,
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    /// Still worth polling: the assistant has not finished yet
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RunStatus::Queued | RunStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Queued => "queued",
            RunStatus::InProgress => "in_progress",
            RunStatus::RequiresAction => "requires_action",
            RunStatus::Cancelling => "cancelling",
            RunStatus::Cancelled => "cancelled",
            RunStatus::Failed => "failed",
            RunStatus::Completed => "completed",
            RunStatus::Incomplete => "incomplete",
            RunStatus::Expired => "expired",
            RunStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One execution of an assistant against a thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateRunRequest {
    pub assistant_id: String,
}

impl CreateRunRequest {
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_in_flight_statuses() {
        assert!(RunStatus::Queued.is_in_flight());
        assert!(RunStatus::InProgress.is_in_flight());
        assert!(!RunStatus::Completed.is_in_flight());
        assert!(!RunStatus::Failed.is_in_flight());
        assert!(!RunStatus::RequiresAction.is_in_flight());
        assert!(!RunStatus::Cancelling.is_in_flight());
    }

    #[test]
    fn test_status_wire_names() {
        let run: Run = serde_json::from_value(json!({
            "id": "run_1",
            "object": "thread.run",
            "status": "in_progress",
            "thread_id": "thread_1",
            "assistant_id": "asst_1"
        }))
        .unwrap();

        assert_eq!(run.status, RunStatus::InProgress);
        assert_eq!(run.status.to_string(), "in_progress");
        assert_eq!(run.thread_id.as_deref(), Some("thread_1"));
    }

    #[test]
    fn test_unrecognised_status_is_unknown() {
        let run: Run =
            serde_json::from_value(json!({"id": "run_1", "status": "paused_forever"})).unwrap();
        assert_eq!(run.status, RunStatus::Unknown);
        assert!(!run.status.is_in_flight());
    }
}
