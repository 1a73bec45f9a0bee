//! Statically dispatched codecs, one unit struct per kind and position.
//!
//! ## A Note on Endianness and Sort Order
//!
//! Index keys are compared with a plain byte-wise (lexicographic) sort, so
//! every ordered kind is laid out such that byte order equals value order:
//!
//! - Unsigned integers are **big-endian**. Little-endian would sort `256`
//!   before `1`.
//! - Signed integers are big-endian with the **sign bit flipped**, which
//!   moves negatives below zero without changing their relative order.
//! - Timestamps and durations are `(seconds, nanos)` pairs of the above.
//! - Strings sort by their UTF-8 bytes, which matches `str` ordering.
//!
//! ## Positional variants
//!
//! Fixed-width kinds are self-delimiting, so one codec serves both positions.
//! Variable-width kinds come in pairs:
//!
//! - `Bytes` / `NonTerminalBytes`: raw payload vs `[u8 len][payload]`.
//! - `Utf8` / `NonTerminalUtf8`: raw UTF-8 vs `[utf8][0x00]`.
//!
//! Both pairs cap payloads at [`MAX_FIELD_LEN`] bytes.

pub mod codec;
pub use codec::*;

pub mod reader;
pub use reader::*;

pub mod bool;
pub use bool::*;

pub mod be_u32;
pub use be_u32::*;

pub mod be_u64;
pub use be_u64::*;

pub mod be_i32;
pub use be_i32::*;

pub mod be_i64;
pub use be_i64::*;

pub mod enum_value;
pub use enum_value::*;

pub mod bytes;
pub use bytes::*;

pub mod utf8;
pub use utf8::*;

pub mod timestamp;
pub use timestamp::*;

pub mod duration;
pub use duration::*;

/// Longest byte or string payload any codec accepts: the largest length a
/// single prefix byte can carry.
pub const MAX_FIELD_LEN: usize = u8::MAX as usize;

#[inline]
pub(crate) fn check_field_len(len: usize) -> Result<()> {
    if len > MAX_FIELD_LEN {
        return Err(Error::FieldTooLong {
            len,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}
