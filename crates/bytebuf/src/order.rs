//! Byte order selection and joining fixed-width byte groups into integers.
//!
//! Joining `N` ordered bytes `b0..b(N-1)` big-endian treats `b0` as the most
//! significant byte, so the value is `sum(b[i] * 256^(N-1-i))`.  Little-endian
//! is the mirror image, `sum(b[i] * 256^i)`.  Only the unsigned widths are
//! joined here, signed and floating point values are reinterpretations of the
//! unsigned join of equal width.

/// Order in which the bytes of a multi-byte value are laid out.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ByteOrder {
    /// First byte is the most significant.
    #[default]
    Big,

    /// First byte is the least significant.
    Little,
}

impl ByteOrder {
    /// Converts from a "big endian" flag.
    pub const fn from_big_endian(big_endian: bool) -> Self {
        if big_endian { Self::Big } else { Self::Little }
    }

    /// Returns if this is big-endian.
    pub const fn is_big_endian(self) -> bool {
        matches!(self, Self::Big)
    }

    /// Returns the other byte order.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }
}

/// Unsigned integer types that can be built by joining `N` ordered bytes.
pub trait JoinBytes<const N: usize>: Sized {
    /// Joins the bytes into a value according to `order`.
    fn join(bytes: [u8; N], order: ByteOrder) -> Self;
}

/// Simple macro to wrap the fixed size unsigned types, not much to see.
macro_rules! impl_join_bytes {
    ( $uty:ident $bytes:literal ) => {
        impl JoinBytes<$bytes> for $uty {
            fn join(bytes: [u8; $bytes], order: ByteOrder) -> Self {
                match order {
                    ByteOrder::Big => <$uty>::from_be_bytes(bytes),
                    ByteOrder::Little => <$uty>::from_le_bytes(bytes),
                }
            }
        }
    };
}

impl_join_bytes!(u8 1);
impl_join_bytes!(u16 2);
impl_join_bytes!(u32 4);
impl_join_bytes!(u64 8);

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_default_is_big() {
        assert_eq!(ByteOrder::default(), ByteOrder::Big);
        assert!(ByteOrder::default().is_big_endian());
    }

    #[test]
    fn test_flag_conversion() {
        assert_eq!(ByteOrder::from_big_endian(true), ByteOrder::Big);
        assert_eq!(ByteOrder::from_big_endian(false), ByteOrder::Little);
        assert_eq!(ByteOrder::Big.reversed(), ByteOrder::Little);
        assert_eq!(ByteOrder::Little.reversed(), ByteOrder::Big);
    }

    #[test]
    fn test_join_known_values() {
        assert_eq!(u16::join([0xff, 0x11], ByteOrder::Big), 0xff11);
        assert_eq!(u16::join([0xff, 0x11], ByteOrder::Little), 0x11ff);
        assert_eq!(
            u32::join([0xff, 0x11, 0x00, 0xef], ByteOrder::Big),
            4_279_304_431
        );
        assert_eq!(u64::join([0, 0, 0, 0, 0, 0, 0, 1], ByteOrder::Big), 1);
        assert_eq!(
            u64::join([0, 0, 0, 0, 0, 0, 0, 1], ByteOrder::Little),
            1 << 56
        );
    }

    /// Reference join, straight from the positional-weight definition.
    fn weighted_sum(bytes: &[u8], order: ByteOrder) -> u64 {
        let n = bytes.len();
        bytes.iter().enumerate().fold(0u64, |acc, (i, &b)| {
            let shift = match order {
                ByteOrder::Big => 8 * (n - 1 - i),
                ByteOrder::Little => 8 * i,
            };
            acc | ((b as u64) << shift)
        })
    }

    proptest! {
        #[test]
        fn proptest_join_matches_weighted_sum(bytes in any::<[u8; 8]>(), big in any::<bool>()) {
            let order = ByteOrder::from_big_endian(big);
            prop_assert_eq!(u64::join(bytes, order), weighted_sum(&bytes, order));

            let half: [u8; 4] = [bytes[0], bytes[1], bytes[2], bytes[3]];
            prop_assert_eq!(u32::join(half, order) as u64, weighted_sum(&half, order));
        }

        #[test]
        fn proptest_join_orders_are_reversals(bytes in any::<[u8; 4]>()) {
            let mut rev = bytes;
            rev.reverse();
            prop_assert_eq!(u32::join(bytes, ByteOrder::Big), u32::join(rev, ByteOrder::Little));
            prop_assert_eq!(
                u32::join(bytes, ByteOrder::Big),
                u32::join(bytes, ByteOrder::Little).swap_bytes()
            );
        }
    }
}
