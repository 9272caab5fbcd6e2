//! Task identity
//!
//! A task attempt is one execution instance of a partition's
//! processing. The ordinal identifies the partition and is stable
//! across retries; only the attempt id changes when the host
//! scheduler re-runs a failed attempt.

use std::path::{Path, PathBuf};

/// Identity and workspace of one task attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskContext {
    ordinal: u32,
    attempt: u32,
    work_dir: PathBuf,
}

impl TaskContext {
    /// Create a task context. The work directory is supplied by the
    /// host commit protocol and must already exist.
    pub fn new(ordinal: u32, attempt: u32, work_dir: impl AsRef<Path>) -> Self {
        Self {
            ordinal,
            attempt,
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    /// Partition ordinal, stable across retries
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Attempt id, unique per execution of this partition
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Work directory for this attempt's output files
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}
