//! Output module
//!
//! Sets up and writes one partition of a zipnum cluster.
//!
//! # Overview
//!
//! This module provides:
//! - The output-stage configurator, which names the partition,
//!   resolves the codec, and opens the main/summary file pair with
//!   exclusive creation
//! - The block writer, which segments incoming records into
//!   independently compressed blocks and emits the summary index
//! - The summary-line model shared by the writer and readers

mod setup;
mod summary;
mod writer;

pub use setup::{TaskOutput, ZipnumOutput, SUMMARY_SUFFIX};
pub use summary::BlockIndexEntry;
pub use writer::{BlockWriter, WriterStats};
