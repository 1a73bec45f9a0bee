use super::*;
use std::cmp::Ordering;

/// Big-endian i32 codec with sign-bit flip so lexicographic order == numeric order.
pub struct BeI32;

impl BeI32 {
    #[inline]
    pub(crate) fn to_lex(v: i32) -> u32 {
        (v as u32) ^ 0x8000_0000
    }
    #[inline]
    pub(crate) fn from_lex(u: u32) -> i32 {
        (u ^ 0x8000_0000) as i32
    }
}

impl Codec for BeI32 {
    const NAME: &'static str = "i32";
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
        dst.extend_from_slice(&Self::to_lex(v).to_be_bytes());
        Ok(())
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<i32> {
        Ok(Self::from_lex(u32::from_be_bytes(src.read_array()?)))
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

impl FixedSizeCodec for BeI32 {
    const ENCODED_SIZE: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bei32_roundtrip_and_order() {
        let vals = [i32::MIN, -10, -1, 0, 1, 10, i32::MAX];

        let encoded: Vec<Vec<u8>> = vals
            .iter()
            .map(|v| BeI32::encode_to_vec(*v).unwrap())
            .collect();

        // Values are listed ascending, so the encodings must be too.
        assert!(encoded.windows(2).all(|w| w[0] < w[1]));

        for (bytes, v) in encoded.iter().zip(vals) {
            assert_eq!(BeI32::decode_exact(bytes).unwrap(), v);
        }
        assert_eq!(BeI32::encode_to_vec(0).unwrap(), [0x80, 0, 0, 0]);
    }
}
