//! Bounds-checked decoding of binary blobs.
//!
//! [`ByteBuffer`] owns an immutable byte sequence and reads fixed-width
//! integers, IEEE floats, UTF-8 strings and sub-ranges at arbitrary offsets.
//! [`Cursor`] walks a buffer sequentially, advancing after each successful
//! read.  Every read that would leave the buffer fails with
//! [`BufError::NotEnoughData`] rather than panicking.

#[cfg(feature = "arbitrary")]
mod arbitrary;

mod buffer;
pub use buffer::ByteBuffer;

mod config;
pub use config::{BufConfig, MissingTerminator};

mod cursor;
pub use cursor::Cursor;

mod decode;
pub use decode::{Decode, decode_at};

mod errors;
pub use errors::{BufError, BufResult};

mod macros;

mod order;
pub use order::{ByteOrder, JoinBytes};

mod utf8;
