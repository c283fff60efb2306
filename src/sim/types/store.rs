//! Per-queue FIFO storage.
//!
//! Maps canonical queue names to FIFO sequences of serialized jobs. Queues
//! are created on first insert via an explicit get-or-create accessor and
//! removed lazily once emptied; absence and an empty sequence are
//! indistinguishable to callers.

use std::collections::{HashMap, VecDeque};

use compact_str::CompactString;

use crate::protocol::SerializedJob;

/// Canonical form of a queue name: surrounding whitespace stripped.
/// `&str`, `String`, and `CompactString` spellings of the same name all
/// collide on the canonical key.
#[inline]
pub(crate) fn canonical(name: &str) -> CompactString {
    CompactString::from(name.trim())
}

#[derive(Default)]
pub struct QueueStore {
    queues: HashMap<CompactString, VecDeque<SerializedJob>>,
}

impl QueueStore {
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    /// Append a job to the tail of its queue, creating the queue if absent.
    /// The name must already be validated.
    pub fn push(&mut self, name: &str, job: SerializedJob) {
        self.queues.entry(canonical(name)).or_default().push_back(job);
    }

    /// Remove and return the head of the named queue. Removes the queue's
    /// entry once it empties.
    pub fn pop_front(&mut self, name: &str) -> Option<SerializedJob> {
        let key = canonical(name);
        let job = self.queues.get_mut(&key)?.pop_front();
        if self.queues.get(&key).is_some_and(VecDeque::is_empty) {
            self.queues.remove(&key);
        }
        job
    }

    /// Remove and return the head of an arbitrarily selected non-empty
    /// queue. Selection is round-robin over the sorted name set using the
    /// caller-held cursor; callers must not rely on the order.
    pub fn pop_any(&mut self, cursor: usize) -> Option<SerializedJob> {
        if self.queues.is_empty() {
            return None;
        }
        let mut names: Vec<CompactString> = self.queues.keys().cloned().collect();
        names.sort_unstable();
        let name = names[cursor % names.len()].clone();
        self.pop_front(&name)
    }

    pub fn len(&self, name: &str) -> usize {
        self.queues.get(&canonical(name)).map_or(0, VecDeque::len)
    }

    pub fn total_len(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    /// Jobs in the named queue, in submission order.
    pub fn jobs(&self, name: &str) -> Vec<SerializedJob> {
        self.queues
            .get(&canonical(name))
            .map(|q| q.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Jobs across all queues. Submission order within a queue; queue order
    /// itself is arbitrary.
    pub fn all_jobs(&self) -> Vec<SerializedJob> {
        let mut names: Vec<&CompactString> = self.queues.keys().collect();
        names.sort_unstable();
        names
            .into_iter()
            .flat_map(|name| self.queues[name].iter().cloned())
            .collect()
    }
}
