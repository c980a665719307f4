use std::str::Utf8Error;

use thiserror::Error;

/// Errors from strata-bytebuf.
#[derive(Debug, Error)]
pub enum BufError {
    /// If we tried to read a range that isn't fully inside the buffer.
    #[error("not enough data (need {len} at {offset}, have {buf_len})")]
    NotEnoughData {
        /// Start of the requested range.
        offset: usize,

        /// Width of the requested range.
        len: usize,

        /// Length of the buffer the read was attempted on.
        buf_len: usize,
    },

    /// If the addressed bytes were in bounds but were not valid UTF-8.
    #[error("failed to convert to string: {0}")]
    FailedToConvertToString(#[from] Utf8Error),
}

impl BufError {
    pub(crate) fn not_enough_data(offset: usize, len: usize, buf_len: usize) -> Self {
        Self::NotEnoughData {
            offset,
            len,
            buf_len,
        }
    }

    /// Returns if this is a bounds failure.
    pub fn is_not_enough_data(&self) -> bool {
        matches!(self, Self::NotEnoughData { .. })
    }

    /// Returns if this is a UTF-8 decoding failure.
    pub fn is_string_conversion(&self) -> bool {
        matches!(self, Self::FailedToConvertToString(_))
    }
}

/// Wrapper result type.
pub type BufResult<T> = Result<T, BufError>;
