use crate::buffer::ByteBuffer;
use crate::cursor::Cursor;
use crate::errors::BufResult;

/// Generic trait for "plain old data" types that can be read sequentially
/// out of a buffer.
///
/// Integers use the buffer's default byte order.  Impls should only read
/// through the cursor, [`Cursor::read`] takes care of rewinding on failure.
pub trait Decode: Sized {
    /// Decodes self from a cursor.
    fn decode(cur: &mut Cursor<'_>) -> BufResult<Self>;
}

/// Simple macro to wrap the fixed size number types, not much to see.
macro_rules! impl_num_decode {
    ( $ty:ident $read:ident ) => {
        impl Decode for $ty {
            fn decode(cur: &mut Cursor<'_>) -> BufResult<Self> {
                cur.$read()
            }
        }
    };
}

impl_num_decode!(u8 read_u8);
impl_num_decode!(i8 read_i8);
impl_num_decode!(u16 read_u16);
impl_num_decode!(i16 read_i16);
impl_num_decode!(u32 read_u32);
impl_num_decode!(i32 read_i32);
impl_num_decode!(u64 read_u64);
impl_num_decode!(i64 read_i64);
impl_num_decode!(f32 read_f32);
impl_num_decode!(f64 read_f64);

/// Impl for byte arrays.
impl<const N: usize> Decode for [u8; N] {
    fn decode(cur: &mut Cursor<'_>) -> BufResult<Self> {
        cur.read_array::<N>()
    }
}

/// Decodes a value starting at `offset` without needing a cursor.
pub fn decode_at<T: Decode>(buf: &ByteBuffer, offset: usize) -> BufResult<T> {
    buf.cursor_at(offset).read()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::ByteOrder;

    #[test]
    fn test_decode_primitives() {
        let buf = ByteBuffer::new(&[0xff, 0x11, 0x00, 0xef, 0x40, 0x20, 0x00, 0x00]);
        assert_eq!(decode_at::<u8>(&buf, 0).expect("test: u8"), 0xff);
        assert_eq!(decode_at::<i32>(&buf, 0).expect("test: i32"), -15_662_865);
        assert_eq!(decode_at::<f32>(&buf, 4).expect("test: f32"), 2.5);
        assert_eq!(decode_at::<[u8; 2]>(&buf, 2).expect("test: arr"), [0x00, 0xef]);
        assert!(decode_at::<u64>(&buf, 1).is_err());
    }

    #[test]
    fn test_decode_follows_buffer_order() {
        let buf = ByteBuffer::with_order(&[0x01, 0x00], ByteOrder::Little);
        assert_eq!(decode_at::<u16>(&buf, 0).expect("test: le"), 1);
    }

    #[test]
    fn test_tuple_like_decode_rewinds() {
        struct Pair(u16, u32);

        impl Decode for Pair {
            fn decode(cur: &mut Cursor<'_>) -> BufResult<Self> {
                Ok(Pair(u16::decode(cur)?, u32::decode(cur)?))
            }
        }

        let buf = ByteBuffer::new(&[0, 1, 0, 0, 0]);
        let mut cur = buf.cursor();
        assert!(cur.read::<Pair>().is_err());
        assert_eq!(cur.position(), 0);

        let buf = ByteBuffer::new(&[0, 1, 0, 0, 0, 2]);
        let Pair(a, b) = buf.cursor().read::<Pair>().expect("test: pair");
        assert_eq!((a, b), (1, 2));
    }
}
