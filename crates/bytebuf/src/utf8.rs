//! Strict UTF-8 decoding shared by every string accessor.

use tracing::trace;

use crate::errors::BufResult;

/// Validates the whole slice as UTF-8 and borrows it as a string.
///
/// There is no lossy fallback, any invalid or truncated sequence fails the
/// entire read.
pub(crate) fn decode(bytes: &[u8]) -> BufResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        trace!(len = bytes.len(), valid_up_to = e.valid_up_to(), "rejected utf-8");
        e.into()
    })
}
