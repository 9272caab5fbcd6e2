//! Compression codecs
//!
//! Each block of the main output file is compressed independently,
//! with no state carried between blocks, so a reader can decompress
//! any single block given its offset and length from the summary
//! index. The codec also owns the canonical filename extension of the
//! main file.
//!
//! Codec identifiers are resolved through an explicit registry at
//! configuration-load time; an identifier that does not resolve is a
//! configuration error raised before any file is touched.

mod gzip;
mod zstd;

pub use gzip::GzipCodec;
pub use zstd::ZstdCodec;

use crate::error::{Error, Result};
use std::sync::Arc;

/// A block-compression codec
pub trait Codec: Send + Sync {
    /// Identifier this codec resolves from
    fn name(&self) -> &'static str;

    /// Canonical filename extension, including the leading dot
    fn extension(&self) -> &'static str;

    /// Compress one block. Calls are independent; no cross-block state.
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>>;

    /// Decompress one block produced by [`Codec::compress`]
    fn decompress(&self, compressed: &[u8]) -> Result<Vec<u8>>;
}

impl std::fmt::Debug for dyn Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codec").field("name", &self.name()).finish()
    }
}

/// Resolve a codec identifier to an implementation.
///
/// The codec is frozen for the lifetime of a task attempt once
/// resolved; callers hold the returned handle for the whole attempt.
pub fn resolve_codec(identifier: &str) -> Result<Arc<dyn Codec>> {
    match identifier {
        "gzip" | "gz" => Ok(Arc::new(GzipCodec)),
        "zstd" | "zst" => Ok(Arc::new(ZstdCodec)),
        other => Err(Error::unknown_codec(other)),
    }
}

/// List the identifiers the registry resolves
pub fn known_codecs() -> Vec<&'static str> {
    vec!["gzip", "zstd"]
}
