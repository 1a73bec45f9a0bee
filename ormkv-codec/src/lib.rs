//! Order-preserving value codecs for composite index keys.
//!
//! A sorted key-value table store builds index keys by concatenating one
//! encoded field per indexed column. This crate owns the byte-level contract
//! of each field:
//!
//! - [`codecs`]: one statically dispatched codec per scalar kind, implementing
//!   [`Codec`] (size, ordering flag, encode, decode, compare, emptiness). Kinds
//!   whose width varies come in a Terminal and a NonTerminal variant.
//! - [`FieldCodec`]: a `(Kind, Position)` pair that dispatches to the right
//!   codec at run time, for key shapes only known when an index is defined.
//! - [`KeyCodec`]: applies the positional rule over a whole key (NonTerminal
//!   for every field but the last, Terminal for the last) and encodes, decodes,
//!   and compares full keys and key prefixes.
//!
//! Codecs are stateless and `Send + Sync`. The only mutable state in any call
//! is the caller's output buffer or [`KeyReader`] cursor.

pub mod codecs;
pub use codecs::{Codec, FixedSizeCodec, KeyReader, MAX_FIELD_LEN, Position};

pub mod config;
pub use config::KeyCodecConfig;

pub mod field;
pub use field::FieldCodec;

pub mod key;
pub use key::KeyCodec;

pub mod temporal;
pub use temporal::{Duration, Timestamp};

pub use ormkv_result::{ContractViolation, Error, Result};

/// A tag naming the scalar kind stored in a key field.
///
/// This is a simple, C-like enum that is cheap to store and copy. Together
/// with a [`Position`] it selects exactly one codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Opaque byte sequence, at most 255 bytes.
    Bytes,
    /// UTF-8 string, at most 255 bytes.
    Utf8,
    Bool,
    I32,
    U32,
    I64,
    U64,
    /// Enumerated constant, keyed by its i32 discriminant.
    Enum,
    Timestamp,
    Duration,
}

impl Kind {
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bytes => "bytes",
            Kind::Utf8 => "utf8",
            Kind::Bool => "bool",
            Kind::I32 => "i32",
            Kind::U32 => "u32",
            Kind::I64 => "i64",
            Kind::U64 => "u64",
            Kind::Enum => "enum",
            Kind::Timestamp => "timestamp",
            Kind::Duration => "duration",
        }
    }

    /// Whether every value of this kind encodes to the same number of bytes.
    #[inline]
    pub const fn is_fixed_width(self) -> bool {
        !matches!(self, Kind::Bytes | Kind::Utf8)
    }
}

/// A typed scalar handed to, or returned from, a codec.
///
/// Byte and string values borrow: from the record being indexed when
/// encoding, from the key bytes when decoding. Codecs never retain values past
/// the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Bytes(&'a [u8]),
    Str(&'a str),
    Bool(bool),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    Enum(i32),
    Timestamp(Timestamp),
    Duration(Duration),
}

impl Value<'_> {
    #[inline]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bytes(_) => Kind::Bytes,
            Value::Str(_) => Kind::Utf8,
            Value::Bool(_) => Kind::Bool,
            Value::I32(_) => Kind::I32,
            Value::U32(_) => Kind::U32,
            Value::I64(_) => Kind::I64,
            Value::U64(_) => Kind::U64,
            Value::Enum(_) => Kind::Enum,
            Value::Timestamp(_) => Kind::Timestamp,
            Value::Duration(_) => Kind::Duration,
        }
    }

    /// Payload length for variable-width values, `None` for fixed-width ones.
    #[inline]
    pub fn payload_len(&self) -> Option<usize> {
        match self {
            Value::Bytes(b) => Some(b.len()),
            Value::Str(s) => Some(s.len()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_kinds_line_up() {
        let ts = Timestamp::new(1, 2);
        let values = [
            (Value::Bytes(b"ab"), Kind::Bytes),
            (Value::Str("ab"), Kind::Utf8),
            (Value::Bool(true), Kind::Bool),
            (Value::I32(-1), Kind::I32),
            (Value::U32(1), Kind::U32),
            (Value::I64(-1), Kind::I64),
            (Value::U64(1), Kind::U64),
            (Value::Enum(3), Kind::Enum),
            (Value::Timestamp(ts), Kind::Timestamp),
            (Value::Duration(Duration::ZERO), Kind::Duration),
        ];
        for (v, k) in values {
            assert_eq!(v.kind(), k);
            assert_eq!(v.payload_len().is_some(), !k.is_fixed_width());
        }
    }
}
