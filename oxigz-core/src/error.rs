//! Error types for OxiGz operations.
//!
//! Every failure of a decompression call is reported through [`OxiGzError`].
//! There is no partial result: a call either returns the complete output or
//! exactly one of these errors.

use thiserror::Error;

/// The main error type for OxiGz operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OxiGzError {
    /// Input size or projected output capacity exceeds the configured ceiling.
    #[error("Refusing to decompress: {requested} bytes would exceed the limit of {max_bytes} bytes")]
    TooLarge {
        /// Number of bytes the operation would have needed.
        requested: usize,
        /// Configured memory ceiling.
        max_bytes: usize,
    },

    /// The inflate engine could not be initialized.
    #[error("Inflate engine initialization failed: {message}")]
    EngineInit {
        /// Diagnostic from the engine.
        message: String,
    },

    /// The inflate engine rejected the compressed data.
    #[error("{message}")]
    Engine {
        /// Diagnostic from the engine, passed through verbatim.
        message: String,
    },
}

/// Result type alias for OxiGz operations.
pub type Result<T> = std::result::Result<T, OxiGzError>;

impl OxiGzError {
    /// Create a ceiling violation error.
    pub fn too_large(requested: usize, max_bytes: usize) -> Self {
        Self::TooLarge {
            requested,
            max_bytes,
        }
    }

    /// Create an engine initialization error.
    pub fn engine_init(message: impl Into<String>) -> Self {
        Self::EngineInit {
            message: message.into(),
        }
    }

    /// Create an engine error.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }

    /// Error reported when the compressed stream ends before the engine
    /// signalled completion.
    pub fn unexpected_eof() -> Self {
        Self::engine("unexpected end of compressed stream")
    }

    /// Whether this error is a rejection by the memory ceiling.
    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::TooLarge { .. })
    }
}
