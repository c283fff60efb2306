//! Execution seam between the simulator and the host job framework.
//!
//! The simulator never interprets a serialized record itself; it hands each
//! drained record to the runner and records the outcome.

use crate::protocol::{ExecutionError, SerializedJob};

/// External execution entry point. Runs a serialized record, signaling
/// failure by returning an error; the drain records any non-success outcome
/// instead of propagating it.
pub trait JobRunner: Send + Sync {
    fn execute(&self, job: &SerializedJob) -> Result<(), ExecutionError>;
}

/// Runner that performs every job successfully without doing anything.
/// Useful for tests that only exercise queueing and inspection.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRunner;

impl JobRunner for NoopRunner {
    fn execute(&self, _job: &SerializedJob) -> Result<(), ExecutionError> {
        Ok(())
    }
}

/// Adapter turning a closure into a runner.
pub struct FnRunner<F>(F);

impl<F> FnRunner<F>
where
    F: Fn(&SerializedJob) -> Result<(), ExecutionError> + Send + Sync,
{
    pub fn new(execute: F) -> Self {
        Self(execute)
    }
}

impl<F> JobRunner for FnRunner<F>
where
    F: Fn(&SerializedJob) -> Result<(), ExecutionError> + Send + Sync,
{
    fn execute(&self, job: &SerializedJob) -> Result<(), ExecutionError> {
        (self.0)(job)
    }
}
