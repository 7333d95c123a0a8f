//! HTTP API contracts for task submission and status queries.

use serde::{Deserialize, Serialize};

pub const ENDPOINT_SUBMIT_TASK: &str = "/task";
pub const ENDPOINT_TASK_STATUS: &str = "/task/:task_id";

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitTaskResponse {
    pub task_id: String,
}

/// Path clients poll for the status of `task_id`.
pub fn task_location(task_id: &str) -> String {
    format!("{}/{}", ENDPOINT_SUBMIT_TASK, task_id)
}
