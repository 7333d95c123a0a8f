use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Well-known status strings reported by the execution backend.
///
/// The registry stores whatever string the backend writes; these are only
/// the values this crate knows how to classify.
pub const TASK_STAGING: &str = "TASK_STAGING";
pub const TASK_RUNNING: &str = "TASK_RUNNING";
pub const TASK_FINISHED: &str = "TASK_FINISHED";
pub const TASK_FAILED: &str = "TASK_FAILED";
pub const TASK_KILLED: &str = "TASK_KILLED";
pub const TASK_LOST: &str = "TASK_LOST";

/// Returns true for statuses after which the backend will not write again.
pub fn is_terminal_status(status: &str) -> bool {
    matches!(
        status,
        TASK_FINISHED | TASK_FAILED | TASK_KILLED | TASK_LOST
    )
}

fn default_tasks_to_launch() -> u32 {
    1
}

/// An inbound task request.
///
/// `task_id` is empty until the service stamps it right before the
/// submission is handed to the queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    /// CPU share requested for the container.
    pub task_cpus: f64,
    /// Memory in MB.
    pub task_mem: f64,
    pub docker_image: String,
    pub command: String,
    #[serde(default = "default_tasks_to_launch")]
    pub tasks_to_launch: u32,
    #[serde(default)]
    pub task_id: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmissionError {
    #[error("task_cpus must be a positive number, got {0}")]
    InvalidCpus(f64),
    #[error("task_mem must be a positive number, got {0}")]
    InvalidMem(f64),
    #[error("docker_image must not be empty")]
    MissingImage,
    #[error("command must not be empty")]
    MissingCommand,
    #[error("tasks_to_launch must be at least 1")]
    NoLaunches,
}

impl Submission {
    pub fn new(task_cpus: f64, task_mem: f64, docker_image: &str, command: &str) -> Self {
        Self {
            task_cpus,
            task_mem,
            docker_image: docker_image.to_string(),
            command: command.to_string(),
            tasks_to_launch: default_tasks_to_launch(),
            task_id: String::new(),
        }
    }

    /// Structural checks the HTTP layer runs before calling `submit`.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if !self.task_cpus.is_finite() || self.task_cpus <= 0.0 {
            return Err(SubmissionError::InvalidCpus(self.task_cpus));
        }
        if !self.task_mem.is_finite() || self.task_mem <= 0.0 {
            return Err(SubmissionError::InvalidMem(self.task_mem));
        }
        if self.docker_image.trim().is_empty() {
            return Err(SubmissionError::MissingImage);
        }
        if self.command.trim().is_empty() {
            return Err(SubmissionError::MissingCommand);
        }
        if self.tasks_to_launch == 0 {
            return Err(SubmissionError::NoLaunches);
        }
        Ok(())
    }
}

/// The registry entry describing what a task is doing right now.
///
/// `command` and `container` are whatever the execution backend chose to
/// attach; they are served back untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRecord {
    pub id: String,
    pub task_cpus: f64,
    pub task_mem: f64,
    #[serde(default)]
    pub command: serde_json::Value,
    #[serde(default)]
    pub container: serde_json::Value,
    pub status: String,
    /// Unix epoch milliseconds. The record is visible strictly before this instant.
    #[serde(skip)]
    pub expires_at: u64,
}

impl TaskRecord {
    /// Seeds a record from a stamped submission, expiring `ttl` from now.
    pub fn from_submission(submission: &Submission, status: &str, ttl: Duration) -> Self {
        Self {
            id: submission.task_id.clone(),
            task_cpus: submission.task_cpus,
            task_mem: submission.task_mem,
            command: serde_json::json!({ "value": submission.command }),
            container: serde_json::json!({
                "type": "DOCKER",
                "docker": { "image": submission.docker_image }
            }),
            status: status.to_string(),
            expires_at: expires_in(ttl),
        }
    }

    pub fn is_terminal(&self) -> bool {
        is_terminal_status(&self.status)
    }

    /// Whether the record is still visible at `now` (epoch ms).
    pub fn is_live_at(&self, now: u64) -> bool {
        now < self.expires_at
    }
}

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Epoch-ms instant `ttl` from now, saturating instead of overflowing.
pub fn expires_in(ttl: Duration) -> u64 {
    now_ms().saturating_add(ttl.as_millis() as u64)
}
