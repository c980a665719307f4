//! Per-buffer decoding configuration.

use crate::order::ByteOrder;

/// What a null-terminated string read does when it reaches the end of the
/// buffer without finding a zero byte.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum MissingTerminator {
    /// The string runs to the end of the buffer.
    #[default]
    ReadToEnd,

    /// The read fails as if the terminator byte were past the end.
    Reject,
}

/// Config carried by a buffer and inherited by every buffer cut from it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct BufConfig {
    byte_order: ByteOrder,
    missing_terminator: MissingTerminator,
}

impl BufConfig {
    /// Constructs a new instance with the given default byte order.
    pub const fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            missing_terminator: MissingTerminator::ReadToEnd,
        }
    }

    /// Returns a copy with the missing terminator policy replaced.
    pub const fn with_missing_terminator(mut self, policy: MissingTerminator) -> Self {
        self.missing_terminator = policy;
        self
    }

    /// Byte order used when a read doesn't specify one.
    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Policy for null-terminated strings without a terminator.
    pub const fn missing_terminator(&self) -> MissingTerminator {
        self.missing_terminator
    }
}

impl From<ByteOrder> for BufConfig {
    fn from(byte_order: ByteOrder) -> Self {
        Self::new(byte_order)
    }
}
