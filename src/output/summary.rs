//! Summary index entries
//!
//! One plain-text line per compressed block, recording everything a
//! lookup service needs to seek directly to the block containing a
//! target key.

use crate::error::{Error, Result};

/// Metadata for one compressed block of a partition's main file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockIndexEntry {
    /// First key of the block
    pub first_key: String,
    /// Partition basename the block belongs to
    pub partition: String,
    /// Byte offset of the block in the main file
    pub offset: u64,
    /// Compressed length of the block in bytes
    pub length: u64,
    /// Number of records in the block
    pub count: u64,
}

impl BlockIndexEntry {
    /// Render the entry as one summary line, newline-terminated
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\n",
            self.first_key, self.partition, self.offset, self.length, self.count
        )
    }

    /// Parse one summary line (with or without trailing newline)
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches('\n');
        let mut fields = line.split('\t');

        let first_key = fields.next();
        let partition = fields.next();
        let offset = fields.next();
        let length = fields.next();
        let count = fields.next();

        let (Some(first_key), Some(partition), Some(offset), Some(length), Some(count)) =
            (first_key, partition, offset, length, count)
        else {
            return Err(Error::summary_parse(line));
        };
        if fields.next().is_some() {
            return Err(Error::summary_parse(line));
        }

        let parse_u64 =
            |field: &str| field.parse::<u64>().map_err(|_| Error::summary_parse(line));

        Ok(Self {
            first_key: first_key.to_string(),
            partition: partition.to_string(),
            offset: parse_u64(offset)?,
            length: parse_u64(length)?,
            count: parse_u64(count)?,
        })
    }
}
