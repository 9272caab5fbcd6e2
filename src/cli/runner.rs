//! CLI command runner
//!
//! Drives one task attempt locally: loads the job configuration,
//! runs the output-stage setup, and feeds records through the block
//! writer. The distributed scheduler this crate normally serves does
//! the same steps through [`TaskOutput`].

use super::commands::{Cli, Commands};
use crate::codec::{known_codecs, resolve_codec};
use crate::config::JobConfig;
use crate::error::{Error, Result};
use crate::output::{BlockIndexEntry, TaskOutput, ZipnumOutput, SUMMARY_SUFFIX};
use crate::task::TaskContext;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;

/// Executes parsed CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub fn run(self) -> Result<()> {
        let config = match &self.cli.config {
            Some(path) => JobConfig::from_file(path)?,
            None => JobConfig::default(),
        };

        match self.cli.command {
            Commands::Write {
                work_dir,
                ordinal,
                attempt,
                input,
            } => run_write(&config, &work_dir, ordinal, attempt, input.as_deref()),
            Commands::Inspect { summary, verify } => run_inspect(&config, &summary, verify),
            Commands::Codecs => {
                for name in known_codecs() {
                    let codec = resolve_codec(name)?;
                    println!("{name}\t{}", codec.extension());
                }
                Ok(())
            }
        }
    }
}

fn run_write(
    config: &JobConfig,
    work_dir: &Path,
    ordinal: u32,
    attempt: u32,
    input: Option<&Path>,
) -> Result<()> {
    let ctx = TaskContext::new(ordinal, attempt, work_dir);
    let output = ZipnumOutput::new(config.clone());
    let mut writer = output.create_writer(&ctx)?;

    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let (key, value) = line.split_once('\t').unwrap_or((line.as_str(), ""));
        writer.write(key, value)?;
    }

    let stats = writer.close()?;
    info!(
        ordinal,
        attempt,
        blocks = stats.blocks,
        records = stats.records,
        "attempt complete"
    );
    Ok(())
}

fn run_inspect(config: &JobConfig, summary_path: &Path, verify: bool) -> Result<()> {
    let entries: Vec<BlockIndexEntry> = std::fs::read_to_string(summary_path)?
        .lines()
        .map(BlockIndexEntry::parse)
        .collect::<Result<_>>()?;

    for entry in &entries {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            entry.first_key, entry.partition, entry.offset, entry.length, entry.count
        );
    }

    if verify {
        let codec = resolve_codec(&config.codec)?;
        let main = std::fs::read(main_path_for(summary_path, codec.extension())?)?;
        for entry in &entries {
            let start = entry.offset as usize;
            let end = start + entry.length as usize;
            let slice = main.get(start..end).ok_or_else(|| {
                Error::output(format!(
                    "block at offset {} runs past end of main file",
                    entry.offset
                ))
            })?;
            let raw = codec.decompress(slice)?;
            let lines = raw.split(|b| *b == b'\n').filter(|l| !l.is_empty()).count();
            if lines as u64 != entry.count {
                return Err(Error::output(format!(
                    "block at offset {} holds {lines} records, index says {}",
                    entry.offset, entry.count
                )));
            }
        }
        info!(blocks = entries.len(), "all blocks verified");
    }
    Ok(())
}

/// Derive the sibling main-file path from a summary path by swapping
/// the `-idx` suffix for the codec extension.
fn main_path_for(summary_path: &Path, extension: &str) -> Result<PathBuf> {
    let name = summary_path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(SUMMARY_SUFFIX))
        .ok_or_else(|| {
            Error::output(format!(
                "not a summary index path: {}",
                summary_path.display()
            ))
        })?;
    Ok(summary_path.with_file_name(format!("{name}{extension}")))
}
