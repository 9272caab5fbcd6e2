//! CLI module
//!
//! Command-line interface for writing and inspecting cluster
//! partitions locally.
//!
//! # Commands
//!
//! - `write` - Run one task attempt over sorted key/value lines
//! - `inspect` - Print (and optionally verify) a partition's summary index
//! - `codecs` - List the codec identifiers the registry resolves

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
