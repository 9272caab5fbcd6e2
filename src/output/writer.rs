//! Zipnum block writer
//!
//! Consumes (key, value) records in upstream-delivered order,
//! serializes them as tab-separated lines, and every N records (or at
//! close) compresses the accumulated block independently, appends it
//! to the main file, and emits one summary line describing the block.
//!
//! The writer owns both streams and the codec for the lifetime of one
//! task attempt. It is opened by the configurator and closed here.

use super::summary::BlockIndexEntry;
use crate::codec::Codec;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;
use tracing::{debug, info};

/// Per-attempt totals reported when the writer closes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterStats {
    /// Compressed blocks appended to the main file
    pub blocks: u64,
    /// Records written across all blocks
    pub records: u64,
}

/// Writer for one partition of a zipnum cluster
pub struct BlockWriter {
    codec: Arc<dyn Codec>,
    main: File,
    summary: BufWriter<File>,
    partition: String,
    block_line_count: usize,
    buffer: Vec<u8>,
    pending: usize,
    first_key: Option<String>,
    offset: u64,
    stats: WriterStats,
}

impl std::fmt::Debug for BlockWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockWriter")
            .field("codec", &self.codec.name())
            .field("partition", &self.partition)
            .field("block_line_count", &self.block_line_count)
            .field("pending", &self.pending)
            .field("first_key", &self.first_key)
            .field("offset", &self.offset)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl BlockWriter {
    pub(crate) fn new(
        codec: Arc<dyn Codec>,
        main: File,
        summary: File,
        partition: String,
        block_line_count: usize,
    ) -> Self {
        Self {
            codec,
            main,
            summary: BufWriter::new(summary),
            partition,
            block_line_count,
            buffer: Vec::new(),
            pending: 0,
            first_key: None,
            offset: 0,
            stats: WriterStats::default(),
        }
    }

    /// Partition basename this writer produces
    pub fn partition(&self) -> &str {
        &self.partition
    }

    /// Records per compressed block
    pub fn block_line_count(&self) -> usize {
        self.block_line_count
    }

    /// Codec compressing this partition's blocks
    pub fn codec(&self) -> &Arc<dyn Codec> {
        &self.codec
    }

    /// Append one record. Records must arrive in upstream key order;
    /// the writer does not sort.
    pub fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.pending == 0 {
            self.first_key = Some(key.to_string());
        }
        self.buffer.extend_from_slice(key.as_bytes());
        self.buffer.push(b'\t');
        self.buffer.extend_from_slice(value.as_bytes());
        self.buffer.push(b'\n');
        self.pending += 1;
        self.stats.records += 1;

        if self.pending >= self.block_line_count {
            self.flush_block()?;
        }
        Ok(())
    }

    /// Compress the pending block, append it to the main file, and
    /// emit its summary line. No-op when nothing is pending.
    fn flush_block(&mut self) -> Result<()> {
        if self.pending == 0 {
            return Ok(());
        }

        let compressed = self.codec.compress(&self.buffer)?;
        self.main.write_all(&compressed)?;

        let entry = BlockIndexEntry {
            first_key: self.first_key.take().unwrap_or_default(),
            partition: self.partition.clone(),
            offset: self.offset,
            length: compressed.len() as u64,
            count: self.pending as u64,
        };
        self.summary.write_all(entry.to_line().as_bytes())?;

        debug!(
            partition = %self.partition,
            offset = entry.offset,
            length = entry.length,
            count = entry.count,
            "flushed block"
        );

        self.offset += compressed.len() as u64;
        self.buffer.clear();
        self.pending = 0;
        self.stats.blocks += 1;
        Ok(())
    }

    /// Flush any partial final block and both streams, consuming the
    /// writer. An attempt with no records leaves both files empty.
    pub fn close(mut self) -> Result<WriterStats> {
        self.flush_block()?;
        self.main.flush()?;
        self.summary.flush()?;

        info!(
            partition = %self.partition,
            blocks = self.stats.blocks,
            records = self.stats.records,
            "closed partition writer"
        );
        Ok(self.stats)
    }
}
