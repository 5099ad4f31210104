//! Memory ceiling configuration.

use crate::error::{OxiGzError, Result};

/// Default memory ceiling: refuse any call that would need more than 1 GB.
pub const DEFAULT_MAX_BYTES: usize = 1_000_000_000;

/// Memory limits for one decompressor.
///
/// The ceiling applies both to the compressed input and to every projected
/// output capacity, so a call can never allocate more than `max_bytes` for
/// its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Maximum number of bytes a call may allocate for output.
    pub max_bytes: usize,
}

impl Limits {
    /// No limit beyond what the address space allows.
    pub const UNLIMITED: Self = Self {
        max_bytes: usize::MAX,
    };

    /// Create limits with the given ceiling.
    pub const fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Validate the compressed input size and return the per-step growth of
    /// the output buffer (twice the input size).
    ///
    /// Both the input itself and one growth step must fit under the ceiling.
    pub fn check_input(&self, input_len: usize) -> Result<usize> {
        if input_len > self.max_bytes {
            return Err(OxiGzError::too_large(input_len, self.max_bytes));
        }
        let step = input_len
            .checked_mul(2)
            .ok_or_else(|| OxiGzError::too_large(usize::MAX, self.max_bytes))?;
        if step > self.max_bytes {
            return Err(OxiGzError::too_large(step, self.max_bytes));
        }
        Ok(step)
    }

    /// Compute the next output capacity, `produced + step`, failing if it
    /// would exceed the ceiling.
    pub fn next_capacity(&self, produced: usize, step: usize) -> Result<usize> {
        match produced.checked_add(step) {
            Some(target) if target <= self.max_bytes => Ok(target),
            Some(target) => Err(OxiGzError::too_large(target, self.max_bytes)),
            None => Err(OxiGzError::too_large(usize::MAX, self.max_bytes)),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BYTES)
    }
}

impl From<usize> for Limits {
    fn from(max_bytes: usize) -> Self {
        Self::new(max_bytes)
    }
}
