//! Simulator unit tests.
//!
//! - `enqueue.rs` - submission, filtering, normalization, validation
//! - `drain.rs` - drain matrix, failure isolation, cross-queue draining
//! - `delayed.rs` - scheduling, promotion order, filter re-application
//! - `capture.rs` - capture windows, nesting, immediate-mode scoping

mod enqueue;

use std::sync::{Arc, Once};

use parking_lot::Mutex;

use crate::protocol::{ExecutionError, JobSpec, SerializedJob};
use crate::sim::{JobRunner, QueueSimulator};

static LOG_INIT: Once = Once::new();

fn setup() -> QueueSimulator {
    // RUST_LOG=simq=debug surfaces simulator logs while debugging a test.
    LOG_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
    QueueSimulator::with_noop_runner()
}

fn job(class: &str, queue: &str) -> JobSpec {
    JobSpec::new(class).queue(queue)
}

/// Runner that records every record it executes, all successfully.
#[derive(Default)]
struct RecordingRunner {
    executed: Mutex<Vec<SerializedJob>>,
}

impl RecordingRunner {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn executed(&self) -> Vec<SerializedJob> {
        self.executed.lock().clone()
    }
}

impl JobRunner for RecordingRunner {
    fn execute(&self, job: &SerializedJob) -> Result<(), ExecutionError> {
        self.executed.lock().push(job.clone());
        Ok(())
    }
}

/// Runner that fails jobs of one class and performs the rest.
struct FailingRunner {
    fail_class: String,
}

impl FailingRunner {
    fn new(fail_class: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_class: fail_class.to_string(),
        })
    }
}

impl JobRunner for FailingRunner {
    fn execute(&self, job: &SerializedJob) -> Result<(), ExecutionError> {
        if job.class_name == self.fail_class {
            Err(ExecutionError::new(format!("{} exploded", job.class_name)))
        } else {
            Ok(())
        }
    }
}
