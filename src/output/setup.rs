//! Output-stream setup
//!
//! The core operation of this crate: once per task attempt, derive
//! the partition name, resolve the codec, compute the main/summary
//! file pair under the attempt's work directory, open both with
//! exclusive creation, and hand a fully-initialized block writer to
//! the caller.
//!
//! Setup is all-or-nothing. Either both files are created and a
//! writer is returned, or the call fails having created nothing; a
//! failure after the main file was created removes it again before
//! propagating. Exclusive creation is the sole concurrency-safety
//! mechanism: when two attempts for the same ordinal race, exactly
//! one wins the files and the loser fails cleanly with a collision
//! error. No failure is retried locally; attempt-level recovery
//! belongs to the host scheduler.

use super::writer::BlockWriter;
use crate::codec::resolve_codec;
use crate::config::JobConfig;
use crate::error::{Error, Result};
use crate::partition::partition_name;
use crate::task::TaskContext;
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix of the plain-text summary index file
pub const SUMMARY_SUFFIX: &str = "-idx";

/// Capability set the host scheduler drives an output stage through:
/// path computation and writer construction. Invoked once per attempt.
pub trait TaskOutput {
    /// Resolve a filename under the attempt's work directory
    fn work_path(&self, ctx: &TaskContext, filename: &str) -> PathBuf;

    /// Open the partition's output file pair and construct its writer
    fn create_writer(&self, ctx: &TaskContext) -> Result<BlockWriter>;
}

/// Output-stage configurator for zipnum clusters
#[derive(Debug, Clone)]
pub struct ZipnumOutput {
    config: JobConfig,
}

impl ZipnumOutput {
    /// Create a configurator over an attempt's job configuration
    pub fn new(config: JobConfig) -> Self {
        Self { config }
    }

    /// The configuration this attempt runs under
    pub fn config(&self) -> &JobConfig {
        &self.config
    }
}

impl TaskOutput for ZipnumOutput {
    fn work_path(&self, ctx: &TaskContext, filename: &str) -> PathBuf {
        ctx.work_dir().join(filename)
    }

    fn create_writer(&self, ctx: &TaskContext) -> Result<BlockWriter> {
        let partition = partition_name(&self.config, ctx.ordinal());
        let codec = resolve_codec(&self.config.codec)?;

        let main_path = self.work_path(ctx, &format!("{partition}{}", codec.extension()));
        let summary_path = self.work_path(ctx, &format!("{partition}{SUMMARY_SUFFIX}"));

        let main = create_exclusive(&main_path)?;
        let summary = match create_exclusive(&summary_path) {
            Ok(file) => file,
            Err(e) => {
                // Give back the main file we just created so a failed
                // setup never leaves half a pair behind.
                drop(main);
                let _ = fs::remove_file(&main_path);
                return Err(e);
            }
        };

        debug!(
            partition = %partition,
            main = %main_path.display(),
            summary = %summary_path.display(),
            codec = codec.name(),
            "created partition output pair"
        );

        Ok(BlockWriter::new(
            codec,
            main,
            summary,
            partition,
            self.config.block_line_count,
        ))
    }
}

/// Open a path for writing, failing if it already exists. An existing
/// file is a collision with another attempt, never overwritten.
fn create_exclusive(path: &Path) -> Result<File> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Error::collision(path)),
        Err(e) => Err(e.into()),
    }
}
