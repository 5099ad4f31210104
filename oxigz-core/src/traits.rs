//! Inflate engine boundary.
//!
//! The decompression driver never decodes deflate data itself. It talks to an
//! engine through the two traits in this module: [`InflateEngine`] creates a
//! per-call [`InflateStream`], and the stream is fed input and output regions
//! until the driver decides it is done. Dropping the stream releases every
//! resource the engine holds for it.

use crate::error::Result;

/// gzip magic number (RFC 1952).
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Container framing of a compressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamFormat {
    /// Detect gzip, zlib, or raw deflate from the first bytes of input.
    #[default]
    Auto,
    /// gzip framing (RFC 1952).
    Gzip,
    /// zlib framing (RFC 1950).
    Zlib,
    /// Raw deflate without framing (RFC 1951).
    Raw,
}

impl StreamFormat {
    /// Resolve the framing of `input`.
    ///
    /// A gzip magic number selects [`StreamFormat::Gzip`], a valid zlib
    /// header selects [`StreamFormat::Zlib`], anything else is treated as raw
    /// deflate. Never returns [`StreamFormat::Auto`].
    pub fn detect(input: &[u8]) -> Self {
        if input.starts_with(&GZIP_MAGIC) {
            Self::Gzip
        } else if is_zlib_header(input) {
            Self::Zlib
        } else {
            Self::Raw
        }
    }

    /// Resolve [`StreamFormat::Auto`] against `input`; explicit formats are
    /// returned unchanged.
    pub fn resolve(self, input: &[u8]) -> Self {
        match self {
            Self::Auto => Self::detect(input),
            format => format,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Gzip => "gzip",
            Self::Zlib => "zlib",
            Self::Raw => "deflate",
        }
    }
}

impl std::fmt::Display for StreamFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Check for a zlib CMF/FLG header: deflate method, window of at most 32 KiB,
/// and a valid FCHECK.
fn is_zlib_header(input: &[u8]) -> bool {
    let [cmf, flg, ..] = *input else {
        return false;
    };
    let method = cmf & 0x0F;
    let window = cmf >> 4;
    method == 8 && window <= 7 && ((u16::from(cmf) << 8) | u16::from(flg)) % 31 == 0
}

/// Flush mode requested from the engine on each feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushMode {
    /// Let the engine buffer as it sees fit.
    #[default]
    None,
    /// Emit all output decodable so far.
    Sync,
    /// All input has been supplied; run the stream to completion.
    Finish,
}

/// Status reported by a successful feed.
///
/// Engine failures are not a status: they are the `Err` side of
/// [`InflateStream::feed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InflateStatus {
    /// Progress was made; more output space may be needed.
    Ok,
    /// No progress was possible with the buffers given. Not an error.
    BufError,
    /// The end of the compressed stream was reached.
    StreamEnd,
}

impl InflateStatus {
    /// Whether the engine reached the end of the stream.
    pub fn is_stream_end(&self) -> bool {
        matches!(self, Self::StreamEnd)
    }
}

/// Factory for per-call inflate streams.
pub trait InflateEngine {
    /// Per-call decoder state.
    type Stream: InflateStream;

    /// Create a fresh stream for `format`.
    ///
    /// Failure here is an environment problem, reported as
    /// [`OxiGzError::EngineInit`](crate::OxiGzError::EngineInit).
    fn init(&self, format: StreamFormat) -> Result<Self::Stream>;
}

impl<E: InflateEngine + ?Sized> InflateEngine for &E {
    type Stream = E::Stream;

    fn init(&self, format: StreamFormat) -> Result<Self::Stream> {
        (**self).init(format)
    }
}

/// Stateful decoder for one compressed stream.
///
/// Dropping the stream releases the engine state.
pub trait InflateStream {
    /// Decode from `input` into `output`.
    ///
    /// # Returns
    ///
    /// A tuple of (bytes consumed from input, bytes written to output, status)
    fn feed(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        flush: FlushMode,
    ) -> Result<(usize, usize, InflateStatus)>;
}
