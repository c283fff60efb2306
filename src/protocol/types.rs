//! Core protocol types for simq.
//!
//! Contains SerializedJob, the Queueable contract, and the records the
//! simulator hands back from capture windows and failure history.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The opaque, transportable form of a job.
///
/// Produced by [`Queueable::serialize`] at submission time and owned by
/// whichever container currently holds it (a queue, the delay buffer, or a
/// history list). Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedJob {
    pub class_name: String,
    pub queue: String,
    /// Argument payload. Wrapped in Arc for cheap cloning into history and
    /// capture lists.
    pub arguments: Arc<Value>,
}

/// Contract a job must satisfy to be submitted to the simulator.
///
/// The host job framework owns job definitions; the simulator only needs a
/// class identity, a target queue name, and an argument payload.
pub trait Queueable {
    fn class_name(&self) -> &str;

    fn queue_name(&self) -> &str;

    fn arguments(&self) -> Value;

    fn serialize(&self) -> SerializedJob {
        SerializedJob {
            class_name: self.class_name().to_string(),
            queue: self.queue_name().to_string(),
            arguments: Arc::new(self.arguments()),
        }
    }
}

/// Error signaled by the execution entry point when a job fails.
///
/// Captured into the failed history alongside the job; never propagated out
/// of a drain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ExecutionError(pub String);

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// A job that failed during a drain, paired with the error it raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedJob {
    pub job: SerializedJob,
    pub error: ExecutionError,
}

/// Record observed by an enqueue-capture window.
///
/// Delayed submissions are tagged with their scheduled timestamp so the
/// assertion layer can overlay it onto a reconstructed job; the serialized
/// payload alone does not carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnqueuedJob {
    Ready(SerializedJob),
    Scheduled { job: SerializedJob, run_at: u64 },
}

impl EnqueuedJob {
    pub fn job(&self) -> &SerializedJob {
        match self {
            EnqueuedJob::Ready(job) => job,
            EnqueuedJob::Scheduled { job, .. } => job,
        }
    }

    pub fn into_job(self) -> SerializedJob {
        match self {
            EnqueuedJob::Ready(job) => job,
            EnqueuedJob::Scheduled { job, .. } => job,
        }
    }

    /// Scheduled execution timestamp, if this record came from a delayed
    /// submission.
    pub fn scheduled_at(&self) -> Option<u64> {
        match self {
            EnqueuedJob::Ready(_) => None,
            EnqueuedJob::Scheduled { run_at, .. } => Some(*run_at),
        }
    }
}
