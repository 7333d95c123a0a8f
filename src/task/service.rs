//! Status Façade
//!
//! The two calls the HTTP layer makes: accept a submission and look up a task.
//! Both are infallible. Enqueueing and the backend's later `put` are independent
//! events, so a freshly submitted task is not found until the backend writes it.

use super::id::{create_id, new_token};
use super::queue::SubmissionQueue;
use super::registry::TaskRegistry;
use super::types::{Submission, TaskRecord};

use std::sync::Arc;

pub struct TaskService {
    registry: Arc<TaskRegistry>,
    queue: SubmissionQueue,
}

impl TaskService {
    pub fn new(registry: Arc<TaskRegistry>, queue: SubmissionQueue) -> Arc<Self> {
        Arc::new(Self { registry, queue })
    }

    /// Assigns an identifier, stamps it on the submission, enqueues it and
    /// returns the identifier.
    pub fn submit(&self, mut submission: Submission) -> String {
        let task_id = create_id(&new_token());
        submission.task_id = task_id.clone();

        tracing::info!(
            "Submitting task {} (image: {}, cpus: {}, mem: {})",
            task_id,
            submission.docker_image,
            submission.task_cpus,
            submission.task_mem
        );

        if !self.queue.enqueue(submission) {
            tracing::warn!("Task {} accepted but no backend is consuming", task_id);
        }

        task_id
    }

    /// Current record for `task_id`, or `None` if unknown or expired.
    pub fn lookup(&self, task_id: &str) -> Option<TaskRecord> {
        self.registry.get(task_id)
    }

    pub fn registry(&self) -> &Arc<TaskRegistry> {
        &self.registry
    }
}
