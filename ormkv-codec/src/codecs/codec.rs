use std::cmp::Ordering;

pub use ormkv_result::{Error, Result};

use super::KeyReader;

/// Where a field sits inside a composite key.
///
/// Chosen once per key shape by whoever assembles the key, then applied to
/// every encode and decode through that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The last (or only) field. Variable-width payloads are written raw and
    /// decoding consumes whatever input remains.
    Terminal,
    /// Any field followed by another one. Encodings must self-delimit.
    NonTerminal,
}

impl Position {
    /// Selection rule: the last of `len` fields is terminal, every other one
    /// is not. `index` must be below `len`.
    #[inline]
    pub const fn for_field(index: usize, len: usize) -> Self {
        debug_assert!(index < len, "field index out of range for key length");
        if index + 1 >= len {
            Position::Terminal
        } else {
            Position::NonTerminal
        }
    }
}

/// A zero-overhead codec API for a single logical type.
///
/// Codecs are unit structs: no state, no `self`, safe to call from any number
/// of threads at once. The only mutable state touched by a call is the buffer
/// or cursor the caller passes in.
pub trait Codec {
    /// Short, stable name used in error messages.
    const NAME: &'static str;

    /// The value type as seen by callers. Variable-width kinds borrow from the
    /// caller (on encode) or from the decode input (zero-copy decode).
    type Borrowed<'a>: Copy;

    /// Exact encoded width when it is the same for every value, `None` when
    /// it depends on the value. Use [`Codec::size`] for the latter.
    #[inline]
    fn fixed_size() -> Option<usize> {
        None
    }

    /// Exact number of bytes [`Codec::encode_into`] will append for `v`.
    fn size(v: Self::Borrowed<'_>) -> Result<usize>;

    /// Whether byte-wise comparison of two encodings agrees with
    /// [`Codec::compare`] on the values.
    fn is_ordered() -> bool;

    /// Append the encoding of `v` to `dst`. Appends exactly `size(v)` bytes on
    /// success and nothing on failure.
    fn encode_into(dst: &mut Vec<u8>, v: Self::Borrowed<'_>) -> Result<()>;

    /// Read one value, advancing `src` past exactly the bytes it owns.
    ///
    /// On failure the cursor may have moved; the key it points into cannot be
    /// decoded further anyway.
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<Self::Borrowed<'a>>;

    /// Total order on values.
    fn compare(a: Self::Borrowed<'_>, b: Self::Borrowed<'_>) -> Ordering;

    /// Whether `v` is this kind's zero value. Trailing zero values may be left
    /// out of a key prefix.
    fn is_empty(v: Self::Borrowed<'_>) -> bool;

    /// Encode into a freshly allocated, exactly sized buffer.
    #[inline]
    fn encode_to_vec(v: Self::Borrowed<'_>) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(Self::size(v)?);
        Self::encode_into(&mut out, v)?;
        Ok(out)
    }

    /// Decode a buffer holding exactly one encoded value.
    #[inline]
    fn decode_exact(src: &[u8]) -> Result<Self::Borrowed<'_>> {
        let mut reader = KeyReader::new(src);
        let v = Self::decode(&mut reader)?;
        if !reader.is_empty() {
            return Err(Error::InvalidFormat(format!(
                "{} trailing bytes after {} value",
                reader.remaining(),
                Self::NAME
            )));
        }
        Ok(v)
    }
}

/// A marker trait for codecs whose encodings all have the same width.
///
/// Only fixed-width codecs implement this, so asking a variable-width codec
/// for its compile-time width does not type-check. Both positional variants of
/// a fixed-width kind are the same codec.
pub trait FixedSizeCodec: Codec {
    /// The exact number of bytes for one encoded item.
    const ENCODED_SIZE: usize;
}
