//! Scoped capture windows and immediate-mode scoping.
//!
//! Windows follow a scoped-resource discipline: open, run the block, then
//! close and restore the previous window state on every exit path. A panic
//! inside the block restores state before propagating. Nested windows
//! save/restore the previous capture list; records are never merged
//! across levels.

use parking_lot::Mutex;

use super::manager::QueueSimulator;
use super::types::JobFilter;
use crate::protocol::{EnqueuedJob, SerializedJob};

/// Swaps a fresh capture list into a window slot, remembering whatever was
/// there; Drop puts the saved state back.
struct WindowGuard<'a, T> {
    slot: &'a Mutex<Option<Vec<T>>>,
    prev: Option<Vec<T>>,
}

impl<'a, T> WindowGuard<'a, T> {
    fn open(slot: &'a Mutex<Option<Vec<T>>>) -> Self {
        let prev = slot.lock().replace(Vec::new());
        Self { slot, prev }
    }

    /// Take the collected records on normal completion; the Drop impl then
    /// restores the saved state.
    fn close(self) -> Vec<T> {
        self.slot.lock().take().unwrap_or_default()
    }
}

impl<T> Drop for WindowGuard<'_, T> {
    fn drop(&mut self) {
        *self.slot.lock() = self.prev.take();
    }
}

/// Restores the immediate-mode flag and filter swapped by
/// `with_immediate_execution`.
struct ImmediateGuard<'a> {
    sim: &'a QueueSimulator,
    prev_immediate: bool,
    prev_filter: Option<JobFilter>,
}

impl Drop for ImmediateGuard<'_> {
    fn drop(&mut self) {
        self.sim.set_perform_immediately(self.prev_immediate);
        if let Some(filter) = self.prev_filter.take() {
            self.sim.set_filter(filter);
        }
    }
}

impl QueueSimulator {
    /// Run `block` with an enqueue-capture window open and return the
    /// records enqueued strictly during its extent.
    ///
    /// Filtered-out submissions are not captured. Delayed submissions
    /// appear as [`EnqueuedJob::Scheduled`] records carrying their
    /// timestamp.
    pub fn capture_enqueued(&self, block: impl FnOnce()) -> Vec<EnqueuedJob> {
        let window = WindowGuard::open(&self.tracked_enqueued);
        block();
        window.close()
    }

    /// Run `block` with a perform-capture window open and return the jobs
    /// performed successfully strictly during its extent. Failed jobs are
    /// not captured; they land in the failed history.
    pub fn capture_performed(&self, block: impl FnOnce()) -> Vec<SerializedJob> {
        let window = WindowGuard::open(&self.tracked_performed);
        block();
        window.close()
    }

    /// Run `block` with immediate mode enabled and, if given, `filter`
    /// installed in place of the active one. Both the previous
    /// immediate-mode flag and the previous filter are restored on every
    /// exit path, including a panic inside the block.
    pub fn with_immediate_execution<R>(
        &self,
        filter: Option<JobFilter>,
        block: impl FnOnce() -> R,
    ) -> R {
        let prev_filter = filter.map(|replacement| {
            let prev = self.filter();
            self.set_filter(replacement);
            prev
        });
        let guard = ImmediateGuard {
            sim: self,
            prev_immediate: self.perform_immediately(),
            prev_filter,
        };
        self.set_perform_immediately(true);
        let result = block();
        drop(guard);
        result
    }
}
