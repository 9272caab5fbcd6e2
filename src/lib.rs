//! # zipnum-cluster
//!
//! Writer for "zipnum"-format archive index clusters.
//!
//! A cluster partition is a pair of sibling files: a main file of
//! fixed-size, independently compressed blocks of sorted key/value
//! lines, and a plain-text summary index with one line per block
//! recording its first key, byte offset, compressed length, and
//! record count. A lookup service binary-searches the summary and
//! decompresses exactly one block to answer a query, never the whole
//! file.
//!
//! This crate owns the output stage of the batch job that produces
//! such clusters: partition naming, codec resolution, exclusive
//! creation of the file pair, and the block writer itself. The
//! distributed scheduling runtime, the work-directory commit
//! protocol, and the upstream key ordering are external collaborators.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zipnum_cluster::{JobConfig, TaskContext, TaskOutput, ZipnumOutput};
//!
//! fn main() -> zipnum_cluster::Result<()> {
//!     let config = JobConfig::default();
//!     let ctx = TaskContext::new(7, 0, "/job/work/attempt-0");
//!
//!     // Creates /job/work/attempt-0/part-a-00007.gz and ...-idx,
//!     // failing if either already exists.
//!     let mut writer = ZipnumOutput::new(config).create_writer(&ctx)?;
//!     writer.write("com,example)/", "20260830 https://example.com/")?;
//!     writer.close()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! host scheduler ── once per attempt ──> ZipnumOutput::create_writer
//!                                          │  partition_name(config, ordinal)
//!                                          │  resolve_codec(config.codec)
//!                                          │  create_new(main), create_new(summary)
//!                                          ▼
//!                  records ──────────> BlockWriter ──┬─> part-a-00007.gz
//!                                                    └─> part-a-00007-idx
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod output;
pub mod partition;
pub mod task;

pub use codec::{resolve_codec, Codec, GzipCodec, ZstdCodec};
pub use config::JobConfig;
pub use error::{Error, Result};
pub use output::{BlockIndexEntry, BlockWriter, TaskOutput, WriterStats, ZipnumOutput};
pub use partition::partition_name;
pub use task::TaskContext;
