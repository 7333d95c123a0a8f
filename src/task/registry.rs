//! Task Registry
//!
//! In-memory map from task identifier to the latest `TaskRecord` written by the
//! execution backend. Every record carries its own expiration instant; once the
//! clock reaches it the record behaves exactly like a key that was never written.
//!
//! Expiry is enforced lazily on read, without touching the map. `sweep` is the
//! only thing that removes expired entries and uses the same strict comparison,
//! so it can never hide a record early.

use super::types::{TaskRecord, now_ms};

use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;

/// Lower bound for the sweeper period; `tokio::time::interval` rejects zero.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Concurrency-safe, self-expiring store of task records.
#[derive(Default)]
pub struct TaskRegistry {
    /// `Task ID -> TaskRecord`. `DashMap` shards the lock so pollers on
    /// different tasks do not contend.
    records: DashMap<String, TaskRecord>,
}

impl TaskRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Inserts or replaces the record for `id`. Last writer wins.
    pub fn put(&self, id: &str, record: TaskRecord) {
        tracing::debug!(
            "Registry put {} (status: {}, expires_at: {})",
            id,
            record.status,
            record.expires_at
        );
        self.records.insert(id.to_string(), record);
    }

    /// Returns the record for `id` if it exists and has not expired.
    pub fn get(&self, id: &str) -> Option<TaskRecord> {
        self.get_at(id, now_ms())
    }

    /// Same as `get`, evaluated at an explicit instant (epoch ms).
    ///
    /// Reads never mutate the map, so readers disagreeing about `now` cannot
    /// hide a record from each other. Expired entries are left to `sweep`.
    /// The record is cloned while the shard lock is held, so the caller always
    /// sees a single writer's version of every field.
    pub fn get_at(&self, id: &str, now: u64) -> Option<TaskRecord> {
        let record = self.records.get(id)?.value().clone();

        if record.is_live_at(now) {
            Some(record)
        } else {
            tracing::trace!("Task {} expired at {}", id, record.expires_at);
            None
        }
    }

    /// Removes the record for `id` regardless of its expiration.
    pub fn delete(&self, id: &str) {
        if self.records.remove(id).is_some() {
            tracing::debug!("Registry delete {}", id);
        }
    }

    /// Drops every record that has expired by now. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        self.sweep_at(now_ms())
    }

    /// Drops every record with `expires_at <= now`.
    pub fn sweep_at(&self, now: u64) -> usize {
        let before = self.records.len();
        self.records.retain(|_, record| record.is_live_at(now));
        before.saturating_sub(self.records.len())
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Spawns a background task that sweeps expired records every `interval`.
    ///
    /// Intervals shorter than `MIN_SWEEP_INTERVAL` (including zero) are raised to it.
    pub fn spawn_sweeper(self: &Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        let registry = self.clone();
        let interval = interval.max(MIN_SWEEP_INTERVAL);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);

            loop {
                ticker.tick().await;
                let removed = registry.sweep();
                if removed > 0 {
                    tracing::debug!("Swept {} expired task records", removed);
                }
            }
        })
    }
}
