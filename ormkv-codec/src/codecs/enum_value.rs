use super::*;
use std::cmp::Ordering;

/// Codec for enumerated constants, keyed by their i32 discriminant.
///
/// Same layout as [`BeI32`], so keys order by discriminant. The zero
/// discriminant is the empty (default) value.
pub struct EnumCodec;

impl Codec for EnumCodec {
    const NAME: &'static str = "enum";
    type Borrowed<'a> = i32;

    #[inline]
    fn fixed_size() -> Option<usize> {
        Some(Self::ENCODED_SIZE)
    }

    #[inline]
    fn size(_v: i32) -> Result<usize> {
        Ok(Self::ENCODED_SIZE)
    }

    #[inline]
    fn is_ordered() -> bool {
        true
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: i32) -> Result<()> {
        BeI32::encode_into(dst, v)
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<i32> {
        BeI32::decode(src)
    }

    #[inline]
    fn compare(a: i32, b: i32) -> Ordering {
        a.cmp(&b)
    }

    #[inline]
    fn is_empty(v: i32) -> bool {
        v == 0
    }
}

impl FixedSizeCodec for EnumCodec {
    const ENCODED_SIZE: usize = BeI32::ENCODED_SIZE;
}
