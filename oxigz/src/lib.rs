//! # OxiGz
//!
//! Bounded decompression of gzip, zlib, and raw deflate buffers.
//!
//! Calling an inflate library directly lets a few kilobytes of adversarial
//! input expand into gigabytes of output. OxiGz drives the inflate engine
//! under a hard memory ceiling: the output buffer grows in steps of twice the
//! input size and every step is checked against the ceiling before it is
//! allocated.
//!
//! ## Features
//!
//! - **Auto-detection**: gzip, zlib, and raw deflate framing
//! - **Memory ceiling**: 1 GB by default, configurable per [`Decompressor`]
//! - **All-or-nothing**: complete output or one typed [`OxiGzError`]
//! - **Pluggable engine**: `flate2` by default, any [`InflateEngine`] otherwise
//!
//! ## Example
//!
//! ```rust
//! use flate2::Compression;
//! use flate2::write::GzEncoder;
//! use std::io::Write;
//!
//! let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
//! encoder.write_all(b"hello world").unwrap();
//! let compressed = encoder.finish().unwrap();
//!
//! let output = oxigz::decompress(&compressed).unwrap();
//! assert_eq!(output, b"hello world");
//!
//! // The same data refused under a tiny ceiling
//! let err = oxigz::Decompressor::with_max_bytes(16)
//!     .decompress(&compressed)
//!     .unwrap_err();
//! assert!(err.is_too_large());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod decompressor;
pub mod engine;

pub use decompressor::Decompressor;
pub use engine::{Flate2Engine, Flate2Stream};
pub use oxigz_core::{
    DEFAULT_MAX_BYTES, FlushMode, InflateEngine, InflateStatus, InflateStream, Limits, OxiGzError,
    Result, StreamFormat,
};

/// Decompress a gzip, zlib, or raw deflate buffer with the default 1 GB
/// ceiling.
///
/// # Example
///
/// ```rust
/// let err = oxigz::decompress(b"not compressed").unwrap_err();
/// assert!(matches!(err, oxigz::OxiGzError::Engine { .. }));
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Decompressor::new().decompress(data)
}

/// Decompress with a custom ceiling (convenience function).
///
/// This is equivalent to `Decompressor::with_max_bytes(max_bytes).decompress(data)`.
pub fn decompress_with_limit(data: &[u8], max_bytes: usize) -> Result<Vec<u8>> {
    Decompressor::with_max_bytes(max_bytes).decompress(data)
}

/// Whether `data` starts with a gzip magic number or a valid zlib header.
///
/// Raw deflate has no signature, so this returns `false` for it even though
/// [`decompress`] accepts it.
pub fn is_compressed(data: &[u8]) -> bool {
    matches!(
        StreamFormat::detect(data),
        StreamFormat::Gzip | StreamFormat::Zlib
    )
}
