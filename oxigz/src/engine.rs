//! Default inflate engine backed by `flate2`.
//!
//! `flate2` is built with the pure Rust `zlib-rs` backend, which handles
//! gzip, zlib, and raw deflate framing including header parsing and checksum
//! validation. Auto-detection is resolved on the first feed by sniffing the
//! leading bytes of the input.

use flate2::{Decompress, FlushDecompress, Status};
use log::trace;
use oxigz_core::error::{OxiGzError, Result};
use oxigz_core::traits::{FlushMode, InflateEngine, InflateStatus, InflateStream, StreamFormat};

/// Base two logarithm of the history window (32 KiB).
pub const WINDOW_BITS: u8 = 15;

/// Stateless factory for [`Flate2Stream`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flate2Engine;

impl Flate2Engine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }
}

impl InflateEngine for Flate2Engine {
    type Stream = Flate2Stream;

    fn init(&self, format: StreamFormat) -> Result<Flate2Stream> {
        let inner = match format {
            StreamFormat::Auto => None,
            format => Some(new_decompress(format)),
        };
        Ok(Flate2Stream { format, inner })
    }
}

/// One `flate2` decompression stream.
///
/// The zlib-rs state is freed when the stream is dropped.
pub struct Flate2Stream {
    format: StreamFormat,
    inner: Option<Decompress>,
}

impl Flate2Stream {
    /// Framing in use; [`StreamFormat::Auto`] until the first feed.
    pub fn format(&self) -> StreamFormat {
        self.format
    }

    fn decompress_mut(&mut self, input: &[u8]) -> &mut Decompress {
        let format = self.format.resolve(input);
        if self.format != format {
            trace!("Detected {} stream", format);
            self.format = format;
        }
        self.inner.get_or_insert_with(|| new_decompress(format))
    }
}

impl std::fmt::Debug for Flate2Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flate2Stream")
            .field("format", &self.format)
            .field("started", &self.inner.is_some())
            .finish()
    }
}

impl InflateStream for Flate2Stream {
    fn feed(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: FlushMode,
    ) -> Result<(usize, usize, InflateStatus)> {
        let decompress = self.decompress_mut(input);
        let in_before = decompress.total_in();
        let out_before = decompress.total_out();

        let status = decompress
            .decompress(input, output, flush_decompress(flush))
            .map_err(|e| OxiGzError::engine(e.to_string()))?;

        let consumed = (decompress.total_in() - in_before) as usize;
        let produced = (decompress.total_out() - out_before) as usize;
        Ok((consumed, produced, translate_status(status)))
    }
}

fn new_decompress(format: StreamFormat) -> Decompress {
    match format {
        StreamFormat::Gzip => Decompress::new_gzip(WINDOW_BITS),
        StreamFormat::Zlib => Decompress::new(true),
        StreamFormat::Raw | StreamFormat::Auto => Decompress::new(false),
    }
}

fn flush_decompress(flush: FlushMode) -> FlushDecompress {
    match flush {
        FlushMode::None => FlushDecompress::None,
        FlushMode::Sync => FlushDecompress::Sync,
        FlushMode::Finish => FlushDecompress::Finish,
    }
}

/// Translation table from `flate2` status codes.
fn translate_status(status: Status) -> InflateStatus {
    match status {
        Status::Ok => InflateStatus::Ok,
        Status::BufError => InflateStatus::BufError,
        Status::StreamEnd => InflateStatus::StreamEnd,
    }
}
