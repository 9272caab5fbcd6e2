//! Partition naming
//!
//! Derives the shared basename for a partition's two output files.
//!
//! # Overview
//!
//! Every partition of a job owns exactly one basename, derived from
//! the job configuration and the partition ordinal. The default form
//! is `part-<modifier><ordinal zero-padded to 5 digits>`, e.g.
//! `part-a-00007`. A configured naming override for an ordinal is
//! used verbatim instead. The result is deterministic, unique across
//! partitions of one job (for a fixed modifier), and stable across
//! retries of the same task.

use crate::config::JobConfig;

/// Compute the basename shared by a partition's main and summary files.
///
/// Pure and deterministic; defined for all ordinals. Ordinals wider
/// than five digits are not truncated.
pub fn partition_name(config: &JobConfig, ordinal: u32) -> String {
    if let Some(name) = config.name_override(ordinal) {
        return name.to_string();
    }
    format!("part-{}{:05}", config.part_modifier, ordinal)
}

#[cfg(test)]
mod tests;
