//! simq - in-memory job queue simulator for deterministic testing.
//!
//! Stands in for a real queue backend during tests: callers submit jobs
//! (immediate or time-delayed), the simulator stores them per queue, and a
//! controllable drain pulls jobs off and executes them synchronously,
//! recording performed and failed outcomes. Scoped capture windows record
//! exactly which jobs were enqueued or performed during a block of code.

pub mod protocol;
pub mod sim;

pub use protocol::{EnqueuedJob, ExecutionError, FailedJob, JobSpec, Queueable, SerializedJob};
pub use sim::{FnRunner, JobFilter, JobRunner, NoopRunner, QueueSimulator, SimError};
