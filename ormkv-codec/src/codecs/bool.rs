use super::*;
use std::cmp::Ordering;

/// Codec for bool. `false` -> `0u8`, `true` -> `1u8`.
pub struct Bool;

impl Codec for Bool {
    const NAME: &'static str = "bool";
    type Borrowed<'a> = bool;

    #[inline]
    fn fixed_size() -> Option<usize> {
        Some(Self::ENCODED_SIZE)
    }

    #[inline]
    fn size(_v: bool) -> Result<usize> {
        Ok(Self::ENCODED_SIZE)
    }

    #[inline]
    fn is_ordered() -> bool {
        true
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: bool) -> Result<()> {
        dst.push(u8::from(v));
        Ok(())
    }

    /// Strict: any byte other than 0 or 1 is corrupt, otherwise two
    /// encodings would decode to the same key.
    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<bool> {
        match src.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::InvalidFormat(format!("bool byte {other:#04x}"))),
        }
    }

    #[inline]
    fn compare(a: bool, b: bool) -> Ordering {
        a.cmp(&b)
    }

    #[inline]
    fn is_empty(v: bool) -> bool {
        !v
    }
}

impl FixedSizeCodec for Bool {
    const ENCODED_SIZE: usize = 1;
}
