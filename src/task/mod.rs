//! Task Submission & Status Module
//!
//! Accepts container task requests, hands them to an execution backend and
//! serves the status records that backend writes back.
//!
//! ## Architecture Overview
//! 1. **Submission**: `TaskService::submit` stamps a fresh `eremetic-task.<uuid>`
//!    identifier on the request and pushes it onto the `SubmissionQueue`.
//! 2. **Execution**: An external backend drains the queue and `put`s `TaskRecord`s
//!    into the `TaskRegistry` as the task moves through its states.
//! 3. **Polling**: `TaskService::lookup` reads the registry. Records vanish once
//!    their expiration instant passes.
//!
//! ## Submodules
//! - **`id`**: Identifier formatting.
//! - **`types`**: `Submission`, `TaskRecord` and status vocabulary.
//! - **`registry`**: Self-expiring concurrent record store.
//! - **`queue`**: Unbounded FIFO hand-off to the backend.
//! - **`service`**: The submit/lookup façade.
//! - **`handlers`** / **`protocol`**: axum routes and API contracts.

pub mod id;
pub mod types;
pub mod protocol;
pub mod registry;
pub mod queue;
pub mod service;
pub mod handlers;
