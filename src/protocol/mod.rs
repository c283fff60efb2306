//! Core protocol types for simq.
//!
//! Contains SerializedJob, the Queueable contract, and capture records.

mod builder;
mod types;

pub use builder::JobSpec;
pub use types::{EnqueuedJob, ExecutionError, FailedJob, Queueable, SerializedJob};
