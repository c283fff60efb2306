//! Core QueueSimulator struct and constructors.
//!
//! All state is owned by one simulator instance; operations take `&self`
//! and guard their state with parking_lot locks. No operation blocks or
//! suspends, and no lock is held across runner execution, filter
//! predicates, or capture blocks.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use super::runner::{JobRunner, NoopRunner};
use super::types::{DelayBuffer, JobFilter, QueueStore};
use crate::protocol::{EnqueuedJob, FailedJob, SerializedJob};

pub struct QueueSimulator {
    pub(crate) runner: Arc<dyn JobRunner>,
    pub(crate) store: RwLock<QueueStore>,
    pub(crate) waiting: Mutex<DelayBuffer>,
    pub(crate) performed: RwLock<Vec<SerializedJob>>,
    pub(crate) failed: RwLock<Vec<FailedJob>>,
    pub(crate) filter: RwLock<JobFilter>,
    pub(crate) perform_immediately: AtomicBool,
    pub(crate) tracked_enqueued: Mutex<Option<Vec<EnqueuedJob>>>,
    pub(crate) tracked_performed: Mutex<Option<Vec<SerializedJob>>>,
    /// Round-robin cursor for arbitrary cross-queue drain selection.
    /// Persists across drain calls so the order stays non-obvious.
    pub(crate) drain_cursor: AtomicUsize,
}

impl QueueSimulator {
    /// Create a fresh simulator executing drained jobs via `runner`.
    ///
    /// A fresh instance accepts every submission (no filter), leaves
    /// immediate mode off, and has empty queues and histories. Histories
    /// are cleared only by constructing a new instance.
    pub fn new(runner: Arc<dyn JobRunner>) -> Self {
        debug!("queue simulator created");
        Self {
            runner,
            store: RwLock::new(QueueStore::new()),
            waiting: Mutex::new(DelayBuffer::new()),
            performed: RwLock::new(Vec::new()),
            failed: RwLock::new(Vec::new()),
            filter: RwLock::new(JobFilter::AcceptAll),
            perform_immediately: AtomicBool::new(false),
            tracked_enqueued: Mutex::new(None),
            tracked_performed: Mutex::new(None),
            drain_cursor: AtomicUsize::new(0),
        }
    }

    /// Create a simulator whose runner performs every job successfully.
    pub fn with_noop_runner() -> Self {
        Self::new(Arc::new(NoopRunner))
    }

    /// Active submission filter.
    pub fn filter(&self) -> JobFilter {
        self.filter.read().clone()
    }

    /// Replace the submission filter. Affects subsequent submissions only.
    pub fn set_filter(&self, filter: JobFilter) {
        *self.filter.write() = filter;
    }

    /// Whether submissions are performed synchronously instead of queued.
    #[inline]
    pub fn perform_immediately(&self) -> bool {
        self.perform_immediately.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_perform_immediately(&self, enabled: bool) {
        self.perform_immediately.store(enabled, Ordering::Relaxed);
    }
}
