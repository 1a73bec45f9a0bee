//! Run-time codec selection.
//!
//! [`FieldCodec`] bridges the key-shape metadata (`Kind` + `Position`) to the
//! statically dispatched codecs in [`crate::codecs`]: it looks at the tag
//! once per call, then runs the specific codec for that kind.

use std::cmp::Ordering;

use crate::codecs::*;
use crate::{Duration, Kind, Timestamp, Value};

/// Ties a static codec to the [`Value`] variant it reads and writes.
trait ValueCodec: Codec {
    const KIND: Kind;

    fn from_value<'v>(v: &Value<'v>) -> Option<Self::Borrowed<'v>>;

    fn into_value<'v>(v: Self::Borrowed<'v>) -> Value<'v>;
}

macro_rules! impl_value_codec {
    ($codec:ty, $kind:ident, $variant:ident) => {
        impl ValueCodec for $codec {
            const KIND: Kind = Kind::$kind;

            #[inline]
            fn from_value<'v>(v: &Value<'v>) -> Option<Self::Borrowed<'v>> {
                match *v {
                    Value::$variant(x) => Some(x),
                    _ => None,
                }
            }

            #[inline]
            fn into_value<'v>(v: Self::Borrowed<'v>) -> Value<'v> {
                Value::$variant(v)
            }
        }
    };
}

impl_value_codec!(Bytes, Bytes, Bytes);
impl_value_codec!(NonTerminalBytes, Bytes, Bytes);
impl_value_codec!(Utf8, Utf8, Str);
impl_value_codec!(NonTerminalUtf8, Utf8, Str);
impl_value_codec!(Bool, Bool, Bool);
impl_value_codec!(BeI32, I32, I32);
impl_value_codec!(BeU32, U32, U32);
impl_value_codec!(BeI64, I64, I64);
impl_value_codec!(BeU64, U64, U64);
impl_value_codec!(EnumCodec, Enum, Enum);
impl_value_codec!(TimestampCodec, Timestamp, Timestamp);
impl_value_codec!(DurationCodec, Duration, Duration);

/// Expands `$f::<C>(args)` with `C` the codec selected by `$field`.
macro_rules! dispatch {
    ($field:expr, $f:ident($($arg:expr),*)) => {
        match ($field.kind, $field.position) {
            (Kind::Bytes, Position::Terminal) => $f::<Bytes>($($arg),*),
            (Kind::Bytes, Position::NonTerminal) => $f::<NonTerminalBytes>($($arg),*),
            (Kind::Utf8, Position::Terminal) => $f::<Utf8>($($arg),*),
            (Kind::Utf8, Position::NonTerminal) => $f::<NonTerminalUtf8>($($arg),*),
            (Kind::Bool, _) => $f::<Bool>($($arg),*),
            (Kind::I32, _) => $f::<BeI32>($($arg),*),
            (Kind::U32, _) => $f::<BeU32>($($arg),*),
            (Kind::I64, _) => $f::<BeI64>($($arg),*),
            (Kind::U64, _) => $f::<BeU64>($($arg),*),
            (Kind::Enum, _) => $f::<EnumCodec>($($arg),*),
            (Kind::Timestamp, _) => $f::<TimestampCodec>($($arg),*),
            (Kind::Duration, _) => $f::<DurationCodec>($($arg),*),
        }
    };
}

#[inline]
fn expect_kind<'v, C: ValueCodec>(v: &Value<'v>) -> Result<C::Borrowed<'v>> {
    C::from_value(v).ok_or(Error::TypeMismatch {
        expected: C::KIND.name(),
        got: v.kind().name(),
    })
}

#[inline]
fn fixed_size_of<C: ValueCodec>() -> Option<usize> {
    C::fixed_size()
}

#[inline]
fn is_ordered_of<C: ValueCodec>() -> bool {
    C::is_ordered()
}

#[inline]
fn size_of<C: ValueCodec>(v: &Value<'_>) -> Result<usize> {
    C::size(expect_kind::<C>(v)?)
}

#[inline]
fn encode_with<C: ValueCodec>(dst: &mut Vec<u8>, v: &Value<'_>) -> Result<()> {
    C::encode_into(dst, expect_kind::<C>(v)?)
}

#[inline]
fn decode_with<'a, C: ValueCodec>(src: &mut KeyReader<'a>) -> Result<Value<'a>> {
    C::decode(src).map(C::into_value)
}

#[inline]
fn compare_with<C: ValueCodec>(a: &Value<'_>, b: &Value<'_>) -> Result<Ordering> {
    Ok(C::compare(expect_kind::<C>(a)?, expect_kind::<C>(b)?))
}

#[inline]
fn is_empty_with<C: ValueCodec>(v: &Value<'_>) -> Result<bool> {
    Ok(C::is_empty(expect_kind::<C>(v)?))
}

/// The codec for one field of a key: a kind plus the position it is used in.
///
/// Fixed-width kinds ignore the position; byte and string kinds switch
/// framing on it. Every operation taking a [`Value`] fails with
/// [`Error::TypeMismatch`] when the value's kind differs from the codec's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldCodec {
    kind: Kind,
    position: Position,
}

impl FieldCodec {
    #[inline]
    pub const fn new(kind: Kind, position: Position) -> Self {
        Self { kind, position }
    }

    #[inline]
    pub const fn terminal(kind: Kind) -> Self {
        Self::new(kind, Position::Terminal)
    }

    #[inline]
    pub const fn non_terminal(kind: Kind) -> Self {
        Self::new(kind, Position::NonTerminal)
    }

    /// Codec for field `index` of a key with `len` fields.
    #[inline]
    pub const fn for_field(kind: Kind, index: usize, len: usize) -> Self {
        Self::new(kind, Position::for_field(index, len))
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// A Terminal codec for a variable-width kind. It consumes all remaining
    /// input on decode, so it is only valid as the last field of a key.
    #[inline]
    pub fn consumes_rest(&self) -> bool {
        self.position == Position::Terminal && !self.kind.is_fixed_width()
    }

    #[inline]
    pub fn fixed_size(&self) -> Option<usize> {
        dispatch!(self, fixed_size_of())
    }

    #[inline]
    pub fn is_ordered(&self) -> bool {
        dispatch!(self, is_ordered_of())
    }

    #[inline]
    pub fn size(&self, v: &Value<'_>) -> Result<usize> {
        dispatch!(self, size_of(v))
    }

    #[inline]
    pub fn encode_into(&self, dst: &mut Vec<u8>, v: &Value<'_>) -> Result<()> {
        dispatch!(self, encode_with(dst, v))
    }

    #[inline]
    pub fn decode<'a>(&self, src: &mut KeyReader<'a>) -> Result<Value<'a>> {
        dispatch!(self, decode_with(src))
    }

    #[inline]
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Result<Ordering> {
        dispatch!(self, compare_with(a, b))
    }

    #[inline]
    pub fn is_empty(&self, v: &Value<'_>) -> Result<bool> {
        dispatch!(self, is_empty_with(v))
    }

    /// The zero value of this field's kind.
    pub fn empty_value(&self) -> Value<'static> {
        match self.kind {
            Kind::Bytes => Value::Bytes(&[]),
            Kind::Utf8 => Value::Str(""),
            Kind::Bool => Value::Bool(false),
            Kind::I32 => Value::I32(0),
            Kind::U32 => Value::U32(0),
            Kind::I64 => Value::I64(0),
            Kind::U64 => Value::U64(0),
            Kind::Enum => Value::Enum(0),
            Kind::Timestamp => Value::Timestamp(Timestamp::UNIX_EPOCH),
            Kind::Duration => Value::Duration(Duration::ZERO),
        }
    }
}
