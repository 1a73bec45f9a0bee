use super::*;
use std::cmp::Ordering;

/// Big-endian u32 codec. Lexicographic order == numeric order.
pub struct BeU32;

impl Codec for BeU32 {
    const NAME: &'static str = "u32";
    type Borrowed<'a> = u32;

    #[inline]
    fn fixed_size() -> Option<usize> {
        Some(Self::ENCODED_SIZE)
    }

    #[inline]
    fn size(_v: u32) -> Result<usize> {
        Ok(Self::ENCODED_SIZE)
    }

    #[inline]
    fn is_ordered() -> bool {
        true
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: u32) -> Result<()> {
        dst.extend_from_slice(&v.to_be_bytes());
        Ok(())
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<u32> {
        Ok(u32::from_be_bytes(src.read_array()?))
    }

    #[inline]
    fn compare(a: u32, b: u32) -> Ordering {
        a.cmp(&b)
    }

    #[inline]
    fn is_empty(v: u32) -> bool {
        v == 0
    }
}

impl FixedSizeCodec for BeU32 {
    const ENCODED_SIZE: usize = 4;
}
