//! Queue-name validation.
//!
//! Misuse is raised synchronously at the lookup/creation point; job
//! execution failures are never raised (they land in the failed history).

use thiserror::Error;

pub(crate) const MAX_QUEUE_NAME_LEN: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid queue name: {0}")]
    InvalidQueueName(String),
}

/// Validate a queue name before it touches the store. The canonical form
/// (surrounding whitespace stripped) must be non-empty and bounded.
pub(crate) fn validate_queue_name(name: &str) -> Result<(), SimError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SimError::InvalidQueueName(
            "queue name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_QUEUE_NAME_LEN {
        return Err(SimError::InvalidQueueName(format!(
            "queue name exceeds {} bytes",
            MAX_QUEUE_NAME_LEN
        )));
    }
    Ok(())
}
