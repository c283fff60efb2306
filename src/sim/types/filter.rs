//! Submission gate deciding whether a job is accepted at all.
//!
//! Evaluated against the serialized record at enqueue/schedule time and
//! re-evaluated when a due delayed job is promoted. Reconfiguration never
//! affects jobs already stored.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use compact_str::CompactString;

use crate::protocol::SerializedJob;

pub type FilterFn = Arc<dyn Fn(&SerializedJob) -> bool + Send + Sync>;

/// Tagged filter variants. `accepts` returning true means the submission
/// proceeds.
#[derive(Clone, Default)]
pub enum JobFilter {
    /// No filter configured: every submission is accepted.
    #[default]
    AcceptAll,
    /// Accept only jobs of the given class.
    ByClass(CompactString),
    /// Accept only jobs whose class is in the set.
    ByClassSet(HashSet<CompactString>),
    /// Accept jobs the predicate returns true for.
    ByPredicate(FilterFn),
}

impl JobFilter {
    pub fn by_class(class_name: impl AsRef<str>) -> Self {
        JobFilter::ByClass(CompactString::from(class_name.as_ref()))
    }

    pub fn by_classes<I, S>(class_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        JobFilter::ByClassSet(
            class_names
                .into_iter()
                .map(|name| CompactString::from(name.as_ref()))
                .collect(),
        )
    }

    pub fn by_predicate<F>(predicate: F) -> Self
    where
        F: Fn(&SerializedJob) -> bool + Send + Sync + 'static,
    {
        JobFilter::ByPredicate(Arc::new(predicate))
    }

    /// Single dispatch point for all variants.
    pub fn accepts(&self, job: &SerializedJob) -> bool {
        match self {
            JobFilter::AcceptAll => true,
            JobFilter::ByClass(class) => job.class_name == class.as_str(),
            JobFilter::ByClassSet(classes) => classes.contains(job.class_name.as_str()),
            JobFilter::ByPredicate(predicate) => predicate(job),
        }
    }
}

impl fmt::Debug for JobFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobFilter::AcceptAll => write!(f, "AcceptAll"),
            JobFilter::ByClass(class) => f.debug_tuple("ByClass").field(class).finish(),
            JobFilter::ByClassSet(classes) => f.debug_tuple("ByClassSet").field(classes).finish(),
            JobFilter::ByPredicate(_) => write!(f, "ByPredicate(..)"),
        }
    }
}
