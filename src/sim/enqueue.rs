//! Submission operations: enqueue, schedule, and due-job promotion.

use tracing::debug;

use super::manager::QueueSimulator;
use super::types::now_ms;
use super::validation::{validate_queue_name, SimError};
use crate::protocol::{EnqueuedJob, Queueable, SerializedJob};

impl QueueSimulator {
    /// Submit a job for immediate availability.
    ///
    /// Rejected submissions are a no-op. Accepted jobs are appended to
    /// their queue in FIFO order, or, when immediate mode is on, performed
    /// synchronously instead of being queued; either way an open
    /// enqueue-capture window observes the record.
    pub fn enqueue(&self, job: &impl Queueable) -> Result<(), SimError> {
        let filter = self.filter();
        let record = job.serialize();
        if !filter.accepts(&record) {
            return Ok(());
        }
        self.enqueue_serialized(record)
    }

    /// Submit a job for execution at or after `run_at` (ms since epoch).
    ///
    /// In immediate mode the timestamp is ignored for execution, but an
    /// open enqueue-capture window still sees a scheduled-style record so
    /// the timestamp remains recoverable.
    pub fn schedule(&self, job: &impl Queueable, run_at: u64) -> Result<(), SimError> {
        let filter = self.filter();
        let record = job.serialize();
        if !filter.accepts(&record) {
            return Ok(());
        }
        validate_queue_name(&record.queue)?;

        self.track_enqueued(EnqueuedJob::Scheduled {
            job: record.clone(),
            run_at,
        });

        if self.perform_immediately() {
            self.perform_record(record);
            return Ok(());
        }

        debug!(queue = %record.queue, class = %record.class_name, run_at, "job scheduled");
        self.waiting.lock().insert(record, run_at);
        Ok(())
    }

    /// Promote the earliest-scheduled job whose timestamp is at or before
    /// the current wall clock. Returns whether a job was promoted.
    ///
    /// Promotion is explicit: nothing in the simulator polls the clock. The
    /// surrounding scheduler calls this (typically in a loop) when it wants
    /// due jobs to become available.
    pub fn check_due(&self) -> Result<bool, SimError> {
        self.check_due_at(now_ms())
    }

    /// Deterministic variant of [`check_due`](Self::check_due): promote
    /// against a caller-supplied notion of "now".
    ///
    /// The promoted job re-enters through the immediate-enqueue path, so
    /// the active filter applies again and immediate mode performs it on
    /// the spot.
    pub fn check_due_at(&self, now: u64) -> Result<bool, SimError> {
        let Some((record, run_at)) = self.waiting.lock().pop_due(now) else {
            return Ok(false);
        };
        debug!(queue = %record.queue, class = %record.class_name, run_at, "promoting due job");

        if !self.filter().accepts(&record) {
            return Ok(true);
        }
        self.enqueue_serialized(record)?;
        Ok(true)
    }

    /// Accepted-record enqueue path shared by `enqueue` and promotion.
    /// The filter has already been applied.
    pub(crate) fn enqueue_serialized(&self, record: SerializedJob) -> Result<(), SimError> {
        validate_queue_name(&record.queue)?;

        self.track_enqueued(EnqueuedJob::Ready(record.clone()));

        if self.perform_immediately() {
            self.perform_record(record);
            return Ok(());
        }

        debug!(queue = %record.queue, class = %record.class_name, "job enqueued");
        let queue = record.queue.clone();
        self.store.write().push(&queue, record);
        Ok(())
    }

    fn track_enqueued(&self, record: EnqueuedJob) {
        if let Some(window) = self.tracked_enqueued.lock().as_mut() {
            window.push(record);
        }
    }
}
