//! Sequential reader over a [`ByteBuffer`].

use tracing::trace;

use crate::buffer::ByteBuffer;
use crate::decode::Decode;
use crate::errors::{BufError, BufResult};
use crate::order::ByteOrder;

/// Read position over a borrowed buffer.
///
/// Each read decodes at the current position and, only if it succeeds, moves
/// the position forward by the width it consumed.  A failed read leaves the
/// position where it was.  The position is never clamped, so after setting
/// it past the end every read simply fails.
#[derive(Clone, Debug)]
pub struct Cursor<'b> {
    buf: &'b ByteBuffer,
    position: usize,
}

/// Generates the cursor counterparts of the buffer's integer getters.
macro_rules! impl_int_reads {
    (
        $uty:ident $ity:ident $bytes:literal,
        $read_u:ident $read_u_with:ident $read_i:ident $read_i_with:ident,
        $get_u_with:ident $get_i_with:ident
    ) => {
        #[doc = concat!("Reads a `", stringify!($uty), "` in the buffer's default byte order.")]
        pub fn $read_u(&mut self) -> BufResult<$uty> {
            self.$read_u_with(self.buf.byte_order())
        }

        #[doc = concat!("Reads a `", stringify!($uty), "` in the given byte order.")]
        pub fn $read_u_with(&mut self, order: ByteOrder) -> BufResult<$uty> {
            let v = self.buf.$get_u_with(self.position, order)?;
            self.position += $bytes;
            Ok(v)
        }

        #[doc = concat!("Reads an `", stringify!($ity), "` in the buffer's default byte order.")]
        pub fn $read_i(&mut self) -> BufResult<$ity> {
            self.$read_i_with(self.buf.byte_order())
        }

        #[doc = concat!("Reads an `", stringify!($ity), "` in the given byte order.")]
        pub fn $read_i_with(&mut self, order: ByteOrder) -> BufResult<$ity> {
            let v = self.buf.$get_i_with(self.position, order)?;
            self.position += $bytes;
            Ok(v)
        }
    };
}

impl<'b> Cursor<'b> {
    /// Constructs a new instance starting at the beginning of `buf`.
    pub fn new(buf: &'b ByteBuffer) -> Self {
        Self::with_position(buf, 0)
    }

    /// Constructs a new instance starting at `position`.
    pub fn with_position(buf: &'b ByteBuffer, position: usize) -> Self {
        Self { buf, position }
    }

    /// Returns the underlying buffer.
    pub fn buffer(&self) -> &'b ByteBuffer {
        self.buf
    }

    /// Returns the offset the next read starts at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the read position.  Not bounds checked.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Returns the number of bytes left to read, zero if the position is past
    /// the end.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.position)
    }

    /// Returns if there's nothing left to read.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads one byte.
    pub fn read_u8(&mut self) -> BufResult<u8> {
        let v = self.buf.get_u8(self.position)?;
        self.position += 1;
        Ok(v)
    }

    /// Reads one byte as a two's complement `i8`.
    pub fn read_i8(&mut self) -> BufResult<i8> {
        let v = self.buf.get_i8(self.position)?;
        self.position += 1;
        Ok(v)
    }

    impl_int_reads!(
        u16 i16 2,
        read_u16 read_u16_with read_i16 read_i16_with,
        get_u16_with get_i16_with
    );
    impl_int_reads!(
        u32 i32 4,
        read_u32 read_u32_with read_i32 read_i32_with,
        get_u32_with get_i32_with
    );
    impl_int_reads!(
        u64 i64 8,
        read_u64 read_u64_with read_i64 read_i64_with,
        get_u64_with get_i64_with
    );

    /// Reads an IEEE-754 single in the buffer's default order.
    pub fn read_f32(&mut self) -> BufResult<f32> {
        let v = self.buf.get_f32(self.position)?;
        self.position += 4;
        Ok(v)
    }

    /// Reads an IEEE-754 double in the buffer's default order.
    pub fn read_f64(&mut self) -> BufResult<f64> {
        let v = self.buf.get_f64(self.position)?;
        self.position += 8;
        Ok(v)
    }

    /// Reads a fixed size array.
    pub fn read_array<const N: usize>(&mut self) -> BufResult<[u8; N]> {
        let v = self.buf.get_array::<N>(self.position)?;
        self.position += N;
        Ok(v)
    }

    /// Borrows the next `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> BufResult<&'b [u8]> {
        let v = self.buf.get_bytes(self.position, len)?;
        self.position += len;
        Ok(v)
    }

    /// Reads exactly `len` bytes as UTF-8.
    pub fn read_utf8(&mut self, len: usize) -> BufResult<&'b str> {
        let v = self.buf.get_utf8(self.position, len)?;
        self.position += len;
        Ok(v)
    }

    /// Reads a null-terminated UTF-8 string.
    ///
    /// The position moves past the text and past its terminator, if there
    /// was one, so consecutive calls walk a packed string table.  Fails with
    /// [`BufError::NotEnoughData`] if there are no bytes left at all.
    pub fn read_null_terminated_utf8(&mut self) -> BufResult<&'b str> {
        if self.is_exhausted() {
            trace!(position = self.position, "no string left to read");
            return Err(BufError::not_enough_data(self.position, 1, self.buf.len()));
        }

        let (v, consumed) = self.buf.null_terminated_at(self.position)?;
        self.position += consumed;
        Ok(v)
    }

    /// Copies the next `len` bytes into a new buffer.
    pub fn read_sub_range(&mut self, len: usize) -> BufResult<ByteBuffer> {
        let v = self.buf.sub_range(self.position, len)?;
        self.position += len;
        Ok(v)
    }

    /// Copies everything left into a new buffer.
    pub fn read_tail(&mut self) -> BufResult<ByteBuffer> {
        let v = self.buf.tail(self.position)?;
        self.position += v.len();
        Ok(v)
    }

    /// Decodes a value, restoring the position if any part of it fails.
    pub fn read<T: Decode>(&mut self) -> BufResult<T> {
        let start = self.position;
        T::decode(self).inspect_err(|_| self.position = start)
    }
}
