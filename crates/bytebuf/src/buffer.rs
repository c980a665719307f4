//! Immutable, offset-addressed byte buffer.

use tracing::trace;

use crate::config::{BufConfig, MissingTerminator};
use crate::cursor::Cursor;
use crate::errors::{BufError, BufResult};
use crate::order::{ByteOrder, JoinBytes};
use crate::utf8;

/// Owned byte sequence with bounds-checked typed accessors at arbitrary
/// offsets.
///
/// The contents are copied in at construction and never change afterwards,
/// so a buffer can be read from any number of threads at once.  Every read
/// that would touch a byte outside `[0, len)` fails with
/// [`BufError::NotEnoughData`] instead of panicking.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ByteBuffer {
    data: Box<[u8]>,
    config: BufConfig,
}

/// Generates the default-order and explicit-order getters for an unsigned
/// width and its signed twin.
macro_rules! impl_int_getters {
    (
        $uty:ident $ity:ident $bytes:literal,
        $get_u:ident $get_u_with:ident $get_i:ident $get_i_with:ident
    ) => {
        #[doc = concat!("Reads a `", stringify!($uty), "` at `offset` in the buffer's default byte order.")]
        pub fn $get_u(&self, offset: usize) -> BufResult<$uty> {
            self.$get_u_with(offset, self.byte_order())
        }

        #[doc = concat!("Reads a `", stringify!($uty), "` at `offset` in the given byte order.")]
        pub fn $get_u_with(&self, offset: usize, order: ByteOrder) -> BufResult<$uty> {
            Ok(<$uty as JoinBytes<$bytes>>::join(self.get_array(offset)?, order))
        }

        #[doc = concat!("Reads an `", stringify!($ity), "` at `offset` in the buffer's default byte order.")]
        pub fn $get_i(&self, offset: usize) -> BufResult<$ity> {
            self.$get_i_with(offset, self.byte_order())
        }

        #[doc = concat!("Reads an `", stringify!($ity), "` at `offset` in the given byte order.")]
        pub fn $get_i_with(&self, offset: usize, order: ByteOrder) -> BufResult<$ity> {
            // Same-width `as` keeps the bit pattern, i.e. two's complement.
            Ok(self.$get_u_with(offset, order)? as $ity)
        }
    };
}

impl ByteBuffer {
    /// Constructs a big-endian buffer by copying `bytes`.
    pub fn new(bytes: &[u8]) -> Self {
        Self::with_config(bytes, BufConfig::default())
    }

    /// Constructs a buffer by copying `bytes`, with the given default order.
    pub fn with_order(bytes: &[u8], order: ByteOrder) -> Self {
        Self::with_config(bytes, BufConfig::new(order))
    }

    /// Constructs a buffer by copying `bytes`, with a full config.
    pub fn with_config(bytes: &[u8], config: BufConfig) -> Self {
        Self {
            data: bytes.into(),
            config,
        }
    }

    /// Constructs a buffer taking ownership of an existing vec.
    pub fn from_vec(bytes: Vec<u8>, config: BufConfig) -> Self {
        Self {
            data: bytes.into_boxed_slice(),
            config,
        }
    }

    /// Returns the number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copies the contents out into a new vec.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Returns the config this buffer was built with.
    pub fn config(&self) -> BufConfig {
        self.config
    }

    /// Returns the byte order used by reads that don't specify one.
    pub fn byte_order(&self) -> ByteOrder {
        self.config.byte_order()
    }

    /// Starts a cursor at the beginning of the buffer.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Starts a cursor at `position`.
    pub fn cursor_at(&self, position: usize) -> Cursor<'_> {
        Cursor::with_position(self, position)
    }

    /// Borrows `len` bytes starting at `offset`.
    ///
    /// A zero-length range at `offset == len()` is valid and empty.
    pub fn get_bytes(&self, offset: usize, len: usize) -> BufResult<&[u8]> {
        offset
            .checked_add(len)
            .and_then(|end| self.data.get(offset..end))
            .ok_or_else(|| self.out_of_bounds(offset, len))
    }

    /// Copies `N` bytes starting at `offset` into an array.
    pub fn get_array<const N: usize>(&self, offset: usize) -> BufResult<[u8; N]> {
        let src = self.get_bytes(offset, N)?;
        let mut buf = [0; N];
        buf.copy_from_slice(src);
        Ok(buf)
    }

    /// Reads the byte at `offset`.
    pub fn get_u8(&self, offset: usize) -> BufResult<u8> {
        self.data
            .get(offset)
            .copied()
            .ok_or_else(|| self.out_of_bounds(offset, 1))
    }

    /// Reads the byte at `offset` as a two's complement `i8`.
    pub fn get_i8(&self, offset: usize) -> BufResult<i8> {
        Ok(self.get_u8(offset)? as i8)
    }

    impl_int_getters!(u16 i16 2, get_u16 get_u16_with get_i16 get_i16_with);
    impl_int_getters!(u32 i32 4, get_u32 get_u32_with get_i32 get_i32_with);
    impl_int_getters!(u64 i64 8, get_u64 get_u64_with get_i64 get_i64_with);

    /// Reads an IEEE-754 single at `offset` in the buffer's default order.
    pub fn get_f32(&self, offset: usize) -> BufResult<f32> {
        Ok(f32::from_bits(self.get_u32(offset)?))
    }

    /// Reads an IEEE-754 double at `offset` in the buffer's default order.
    pub fn get_f64(&self, offset: usize) -> BufResult<f64> {
        Ok(f64::from_bits(self.get_u64(offset)?))
    }

    /// Decodes exactly `len` bytes at `offset` as UTF-8.
    pub fn get_utf8(&self, offset: usize, len: usize) -> BufResult<&str> {
        utf8::decode(self.get_bytes(offset, len)?)
    }

    /// Decodes UTF-8 from `offset` up to, but not including, the first zero
    /// byte.
    ///
    /// If there is no zero byte before the end of the buffer the outcome
    /// depends on the buffer's [`MissingTerminator`] policy.
    pub fn get_null_terminated_utf8(&self, offset: usize) -> BufResult<&str> {
        self.null_terminated_at(offset).map(|(s, _)| s)
    }

    /// Decodes a null-terminated string and also returns how many buffer
    /// bytes it spans, including the terminator if one was found.
    pub(crate) fn null_terminated_at(&self, offset: usize) -> BufResult<(&str, usize)> {
        let rest = self
            .data
            .get(offset..)
            .ok_or_else(|| self.out_of_bounds(offset, 0))?;

        let (text, consumed) = match rest.iter().position(|&b| b == 0) {
            Some(end) => (rest.split_at(end).0, end + 1),
            None => match self.config.missing_terminator() {
                MissingTerminator::ReadToEnd => (rest, rest.len()),
                MissingTerminator::Reject => {
                    return Err(self.out_of_bounds(offset, rest.len() + 1));
                }
            },
        };

        Ok((utf8::decode(text)?, consumed))
    }

    /// Copies `[offset, offset + len)` into a new buffer with the same config.
    pub fn sub_range(&self, offset: usize, len: usize) -> BufResult<Self> {
        Ok(Self::with_config(self.get_bytes(offset, len)?, self.config))
    }

    /// Copies everything from `offset` to the end into a new buffer.
    pub fn tail(&self, offset: usize) -> BufResult<Self> {
        let len = self
            .len()
            .checked_sub(offset)
            .ok_or_else(|| self.out_of_bounds(offset, 0))?;
        self.sub_range(offset, len)
    }

    fn out_of_bounds(&self, offset: usize, len: usize) -> BufError {
        trace!(offset, len, buf_len = self.len(), "read out of bounds");
        BufError::not_enough_data(offset, len, self.len())
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes, BufConfig::default())
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for ByteBuffer {
    fn from(bytes: [u8; N]) -> Self {
        Self::new(&bytes)
    }
}

impl FromIterator<u8> for ByteBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
