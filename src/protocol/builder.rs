//! Fluent job builder for simq.
//!
//! Provides an ergonomic way to construct jobs in tests:
//!   JobSpec::new("InvoiceMailer")
//!       .queue("mailers")
//!       .arg(json!(42))

use serde_json::Value;

use super::Queueable;

/// A concrete job description implementing [`Queueable`].
///
/// Hosts with their own job types implement [`Queueable`] directly; JobSpec
/// exists so tests can build submissions without one.
#[derive(Debug, Clone)]
pub struct JobSpec {
    class_name: String,
    queue: String,
    arguments: Vec<Value>,
}

impl JobSpec {
    /// Create a new JobSpec for the given job class, targeting the
    /// "default" queue with no arguments.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            queue: "default".to_string(),
            arguments: Vec::new(),
        }
    }

    /// Set the target queue name.
    #[inline]
    pub fn queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = queue.into();
        self
    }

    /// Append a single argument.
    #[inline]
    pub fn arg(mut self, value: Value) -> Self {
        self.arguments.push(value);
        self
    }

    /// Replace the full argument list.
    #[inline]
    pub fn args(mut self, values: Vec<Value>) -> Self {
        self.arguments = values;
        self
    }
}

impl Queueable for JobSpec {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn queue_name(&self) -> &str {
        &self.queue
    }

    fn arguments(&self) -> Value {
        Value::Array(self.arguments.clone())
    }
}
