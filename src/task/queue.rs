//! Submission Queue
//!
//! Unbounded FIFO hand-off between the request path and the execution backend.
//! Producers never wait on the consumer; admission control is the backend's
//! business, not the accept path's.

use super::types::Submission;

use tokio::sync::mpsc;

/// Producer side. Cheap to clone, one handle per request handler is fine.
#[derive(Clone)]
pub struct SubmissionQueue {
    sender: mpsc::UnboundedSender<Submission>,
}

/// Consumer side, owned by the execution backend.
pub struct SubmissionReceiver {
    receiver: mpsc::UnboundedReceiver<Submission>,
}

impl SubmissionQueue {
    /// Creates a connected producer/consumer pair.
    pub fn new() -> (SubmissionQueue, SubmissionReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (SubmissionQueue { sender }, SubmissionReceiver { receiver })
    }

    /// Pushes a submission without blocking.
    ///
    /// Returns `false` when the consumer has gone away and the submission was
    /// dropped.
    pub fn enqueue(&self, submission: Submission) -> bool {
        match self.sender.send(submission) {
            Ok(()) => true,
            Err(mpsc::error::SendError(dropped)) => {
                tracing::error!(
                    "Submission queue closed, dropping task {}",
                    dropped.task_id
                );
                false
            }
        }
    }

    /// True once the receiving side has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl SubmissionReceiver {
    /// Waits for the next submission. `None` once every producer is gone
    /// and the buffer is drained.
    pub async fn recv(&mut self) -> Option<Submission> {
        self.receiver.recv().await
    }

    /// Takes the next submission if one is already buffered.
    pub fn try_recv(&mut self) -> Option<Submission> {
        self.receiver.try_recv().ok()
    }

    /// Number of submissions buffered and not yet consumed.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}
