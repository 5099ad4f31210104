//! # OxiGz Core
//!
//! Core components for the OxiGz decompression library.
//!
//! - [`traits`]: The inflate engine boundary (streams, statuses, framing)
//! - [`limits`]: Memory ceiling configuration
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Driver (oxigz)                                          │
//! │     Decompressor: growth loop, ceiling, status mapping  │
//! ├─────────────────────────────────────────────────────────┤
//! │ Boundary (this crate)                                   │
//! │     InflateEngine / InflateStream, Limits, OxiGzError   │
//! ├─────────────────────────────────────────────────────────┤
//! │ Engine                                                  │
//! │     flate2 (zlib-rs backend), or any custom engine      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxigz_core::{Limits, StreamFormat};
//!
//! assert_eq!(StreamFormat::detect(&[0x1F, 0x8B, 0x08]), StreamFormat::Gzip);
//!
//! let limits = Limits::new(1024);
//! assert_eq!(limits.check_input(100).unwrap(), 200);
//! assert!(limits.check_input(600).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

pub mod error;
pub mod limits;
pub mod traits;

// Re-exports for convenience
pub use error::{OxiGzError, Result};
pub use limits::{DEFAULT_MAX_BYTES, Limits};
pub use traits::{FlushMode, InflateEngine, InflateStatus, InflateStream, StreamFormat};
