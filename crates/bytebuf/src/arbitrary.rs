use arbitrary::{Arbitrary, Unstructured};

use crate::{BufConfig, ByteBuffer, ByteOrder, MissingTerminator};

impl<'a> Arbitrary<'a> for ByteOrder {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(ByteOrder::from_big_endian(bool::arbitrary(u)?))
    }
}

impl<'a> Arbitrary<'a> for MissingTerminator {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(if bool::arbitrary(u)? {
            MissingTerminator::ReadToEnd
        } else {
            MissingTerminator::Reject
        })
    }
}

impl<'a> Arbitrary<'a> for BufConfig {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let order = ByteOrder::arbitrary(u)?;
        let policy = MissingTerminator::arbitrary(u)?;
        Ok(BufConfig::new(order).with_missing_terminator(policy))
    }
}

impl<'a> Arbitrary<'a> for ByteBuffer {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let config = BufConfig::arbitrary(u)?;
        let bytes = Vec::<u8>::arbitrary(u)?;
        Ok(ByteBuffer::from_vec(bytes, config))
    }
}
