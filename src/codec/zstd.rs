//! Zstandard codec
//!
//! Each block is one complete zstd frame, independently
//! decompressible by offset and length.

use super::Codec;
use crate::error::Result;

/// Zstandard block codec
#[derive(Debug, Clone, Copy, Default)]
pub struct ZstdCodec;

impl Codec for ZstdCodec {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn extension(&self) -> &'static str {
        ".zst"
    }

    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        // level 0 selects the library default
        Ok(::zstd::stream::encode_all(raw, 0)?)
    }

    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>> {
        Ok(::zstd::stream::decode_all(compressed)?)
    }
}
