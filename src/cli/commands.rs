//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Zipnum cluster writer CLI
#[derive(Parser, Debug)]
#[command(name = "zipnum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Job configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write one partition from sorted key/value lines
    Write {
        /// Work directory for the output file pair
        #[arg(short, long)]
        work_dir: PathBuf,

        /// Partition ordinal
        #[arg(short, long, default_value = "0")]
        ordinal: u32,

        /// Attempt id
        #[arg(long, default_value = "0")]
        attempt: u32,

        /// Input file of tab-separated key/value lines (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the summary index of a partition
    Inspect {
        /// Summary index file (`<partition>-idx`)
        summary: PathBuf,

        /// Decompress every block from the sibling main file and
        /// check its record count against the index
        #[arg(long)]
        verify: bool,
    },

    /// List available codec identifiers
    Codecs,
}
