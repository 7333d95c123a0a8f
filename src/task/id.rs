//! Task identifier formatting.

/// Namespace every task identifier starts with.
pub const TASK_ID_PREFIX: &str = "eremetic-task.";

/// Builds the public identifier for a task from a caller-supplied token.
///
/// Uniqueness is the caller's job; this only formats, so the same token
/// always yields the same identifier.
pub fn create_id(token: &str) -> String {
    format!("{}{}", TASK_ID_PREFIX, token)
}

/// Generates a fresh UUID v4 token suitable for `create_id`.
pub fn new_token() -> String {
    uuid::Uuid::new_v4().to_string()
}
