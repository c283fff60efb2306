//! Queue inspection: lengths, enqueued/performed/failed/scheduled lists.
//!
//! Absence and emptiness are equivalent: inspecting a queue that was never
//! created (or was drained empty) reports zero jobs, never an error.

use super::manager::QueueSimulator;
use super::validation::{validate_queue_name, SimError};
use crate::protocol::{EnqueuedJob, FailedJob, SerializedJob};

impl QueueSimulator {
    /// Number of jobs currently enqueued on the named queue.
    pub fn queue_length(&self, name: &str) -> Result<usize, SimError> {
        validate_queue_name(name)?;
        Ok(self.store.read().len(name))
    }

    /// Enqueued jobs, in submission order within each queue. With a queue
    /// name, just that queue; without, all queues (queue order arbitrary).
    pub fn find_enqueued(&self, queue: Option<&str>) -> Result<Vec<SerializedJob>, SimError> {
        match queue {
            Some(name) => {
                validate_queue_name(name)?;
                Ok(self.store.read().jobs(name))
            }
            None => Ok(self.store.read().all_jobs()),
        }
    }

    /// Enqueued jobs matching a predicate.
    pub fn find_enqueued_matching<F>(
        &self,
        queue: Option<&str>,
        predicate: F,
    ) -> Result<Vec<SerializedJob>, SimError>
    where
        F: Fn(&SerializedJob) -> bool,
    {
        let mut jobs = self.find_enqueued(queue)?;
        jobs.retain(|job| predicate(job));
        Ok(jobs)
    }

    /// Jobs performed so far, in execution order.
    pub fn find_performed(&self) -> Vec<SerializedJob> {
        self.performed.read().clone()
    }

    /// Performed jobs matching a predicate.
    pub fn find_performed_matching<F>(&self, predicate: F) -> Vec<SerializedJob>
    where
        F: Fn(&SerializedJob) -> bool,
    {
        self.performed
            .read()
            .iter()
            .filter(|job| predicate(job))
            .cloned()
            .collect()
    }

    /// Jobs that failed during a drain, each paired with its error.
    pub fn failed_jobs(&self) -> Vec<FailedJob> {
        self.failed.read().clone()
    }

    /// Scheduled jobs not yet promoted, earliest first.
    pub fn find_scheduled(&self) -> Vec<EnqueuedJob> {
        self.waiting
            .lock()
            .snapshot()
            .into_iter()
            .map(|(job, run_at)| EnqueuedJob::Scheduled { job, run_at })
            .collect()
    }

    /// Counts snapshot: (queued, scheduled, performed, failed).
    pub fn stats(&self) -> (usize, usize, usize, usize) {
        (
            self.store.read().total_len(),
            self.waiting.lock().len(),
            self.performed.read().len(),
            self.failed.read().len(),
        )
    }
}
