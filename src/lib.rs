//! Eremetic Task Core
//!
//! Library crate behind the `eremetic` binary (`main.rs`).
//!
//! ## Modules
//! - **`task`**: Submission, identifier assignment, the hand-off queue to the
//!   execution backend and the self-expiring status registry, plus the HTTP
//!   routes that expose them.
//! - **`config`**: Command line / environment configuration.

pub mod config;
pub mod task;
