//! Bounded decompression driver.
//!
//! The driver feeds the whole compressed input to an inflate stream and grows
//! the output buffer by twice the input size per step. Every growth is checked
//! against the memory ceiling before anything is allocated, so a
//! decompression bomb fails with [`OxiGzError::TooLarge`] instead of
//! exhausting memory.

use crate::engine::Flate2Engine;
use log::{debug, trace, warn};
use oxigz_core::error::{OxiGzError, Result};
use oxigz_core::limits::Limits;
use oxigz_core::traits::{FlushMode, InflateEngine, InflateStatus, InflateStream, StreamFormat};

/// Decompressor with a memory ceiling.
///
/// Holds no per-call state: every call creates its own inflate stream and
/// drops it before returning, so one instance can serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct Decompressor<E = Flate2Engine> {
    engine: E,
    limits: Limits,
}

impl Decompressor {
    /// Create a decompressor with the default ceiling of 1 GB.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decompressor refusing any call that needs more than
    /// `max_bytes` of memory.
    pub fn with_max_bytes(max_bytes: usize) -> Self {
        Self::with_limits(Limits::new(max_bytes))
    }

    /// Create a decompressor with the given limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self::with_engine(Flate2Engine::new(), limits)
    }
}

impl<E: InflateEngine> Decompressor<E> {
    /// Create a decompressor driving a custom inflate engine.
    pub fn with_engine(engine: E, limits: Limits) -> Self {
        Self { engine, limits }
    }

    /// The configured ceiling.
    pub fn max_bytes(&self) -> usize {
        self.limits.max_bytes
    }

    /// The configured limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// The inflate engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Decompress a gzip, zlib, or raw deflate buffer.
    ///
    /// The framing is detected from the input.
    ///
    /// # Errors
    ///
    /// - [`OxiGzError::TooLarge`] if the input or the output would exceed the
    ///   ceiling
    /// - [`OxiGzError::EngineInit`] if the engine could not be initialized
    /// - [`OxiGzError::Engine`] if the data is malformed, truncated, or empty
    pub fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decompress_format(input, StreamFormat::Auto)
    }

    /// Decompress with an explicit framing instead of auto-detection.
    pub fn decompress_format(&self, input: &[u8], format: StreamFormat) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.run(&mut output, input, format)?;
        Ok(output)
    }

    /// Decompress into a caller-provided buffer and return the number of
    /// decompressed bytes.
    ///
    /// `output` is cleared first. On success it holds exactly the
    /// decompressed bytes; on failure its contents are unspecified.
    pub fn decompress_into(&self, output: &mut Vec<u8>, input: &[u8]) -> Result<usize> {
        self.run(output, input, StreamFormat::Auto)
    }

    fn run(&self, output: &mut Vec<u8>, input: &[u8], format: StreamFormat) -> Result<usize> {
        output.clear();

        let step = self.limits.check_input(input.len()).inspect_err(|e| {
            warn!("Rejected {} byte input: {}", input.len(), e);
        })?;
        if input.is_empty() {
            return Err(OxiGzError::unexpected_eof());
        }

        debug!(
            "Decompressing {} bytes ({}), limit {} bytes",
            input.len(),
            format,
            self.limits.max_bytes
        );

        let mut stream = self.engine.init(format)?;
        let mut consumed = 0;
        let mut produced = 0;
        let mut stream_end = false;
        let mut iterations = 0usize;

        loop {
            let target = self.limits.next_capacity(produced, step).inspect_err(|e| {
                warn!("Output exceeds limit after {} bytes: {}", produced, e);
            })?;
            output.reserve_exact(target - output.len());
            output.resize(target, 0);

            let (read, written, status) =
                stream.feed(&input[consumed..], &mut output[produced..target], FlushMode::Finish)?;
            iterations += 1;

            let read = read.min(input.len() - consumed);
            let written = written.min(step);
            trace!(
                "Step {}: consumed {}, produced {}, {:?}",
                iterations, read, written, status
            );

            consumed += read;
            produced += written;
            match status {
                InflateStatus::StreamEnd => stream_end = true,
                InflateStatus::Ok | InflateStatus::BufError => {}
            }

            // Unused output space means the engine has nothing more to give
            if written < step {
                break;
            }
        }
        drop(stream);

        if !stream_end {
            output.clear();
            return Err(OxiGzError::unexpected_eof());
        }

        output.truncate(produced);
        debug!(
            "Decompressed {} -> {} bytes in {} steps",
            consumed, produced, iterations
        );
        Ok(produced)
    }
}
