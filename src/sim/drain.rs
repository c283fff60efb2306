//! Drain operations: pull jobs off queues and execute them.
//!
//! Exactly one of the performed/failed histories receives each drained
//! job. A failing job never aborts the drain; its error is recorded and
//! the next job still executes.

use std::sync::atomic::Ordering;

use tracing::{debug, warn};

use super::manager::QueueSimulator;
use super::validation::{validate_queue_name, SimError};
use crate::protocol::{FailedJob, SerializedJob};

impl QueueSimulator {
    /// Pull jobs off queues and execute them. Returns the number of jobs
    /// executed (performed or failed).
    ///
    /// - `count` and `queue` given: remove up to `count` jobs from that
    ///   queue in FIFO order.
    /// - `queue` given alone: drain that queue entirely.
    /// - `count` given alone: execute up to `count` jobs total, the source
    ///   queue selected arbitrarily at each step, so jobs from different
    ///   queues may interleave.
    /// - Neither given: drain every queue until all are empty.
    ///
    /// Order is FIFO within a single queue; cross-queue order is arbitrary
    /// and unstable, and callers must not rely on it. Draining an empty or
    /// absent queue is a no-op.
    pub fn drain(&self, count: Option<usize>, queue: Option<&str>) -> Result<usize, SimError> {
        if let Some(name) = queue {
            validate_queue_name(name)?;
        }

        let mut executed = 0;
        loop {
            if count.is_some_and(|limit| executed >= limit) {
                break;
            }
            let Some(record) = self.next_record(queue) else {
                break;
            };
            self.perform_record(record);
            executed += 1;
        }

        debug!(executed, queue = queue.unwrap_or("<any>"), "drain complete");
        Ok(executed)
    }

    /// Remove the next job to execute, or None when the source is
    /// exhausted. The store lock is released before the caller executes.
    fn next_record(&self, queue: Option<&str>) -> Option<SerializedJob> {
        let mut store = self.store.write();
        match queue {
            Some(name) => store.pop_front(name),
            None => {
                let cursor = self.drain_cursor.fetch_add(1, Ordering::Relaxed);
                store.pop_any(cursor)
            }
        }
    }

    /// Execute one serialized record and record its outcome.
    pub(crate) fn perform_record(&self, record: SerializedJob) {
        match self.runner.execute(&record) {
            Ok(()) => {
                if let Some(window) = self.tracked_performed.lock().as_mut() {
                    window.push(record.clone());
                }
                self.performed.write().push(record);
            }
            Err(error) => {
                warn!(
                    queue = %record.queue,
                    class = %record.class_name,
                    error = %error,
                    "job execution failed"
                );
                self.failed.write().push(FailedJob { job: record, error });
            }
        }
    }
}
