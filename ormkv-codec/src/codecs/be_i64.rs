use super::*;
use std::cmp::Ordering;

/// Big-endian i64 codec with sign-bit flip so lexicographic order == numeric order.
pub struct BeI64;

impl BeI64 {
    #[inline]
    pub(crate) fn to_lex(v: i64) -> u64 {
        (v as u64) ^ 0x8000_0000_0000_0000
    }
    #[inline]
    pub(crate) fn from_lex(u: u64) -> i64 {
        (u ^ 0x8000_0000_0000_0000) as i64
    }
}

impl Codec for BeI64 {
    const NAME: &'static str = "i64";
    type Borrowed<'a> = i64;

    #[inline]
    fn fixed_size() -> Option<usize> {
        Some(Self::ENCODED_SIZE)
    }

    #[inline]
    fn size(_v: i64) -> Result<usize> {
        Ok(Self::ENCODED_SIZE)
    }

    #[inline]
    fn is_ordered() -> bool {
        true
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: i64) -> Result<()> {
        dst.extend_from_slice(&Self::to_lex(v).to_be_bytes());
        Ok(())
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<i64> {
        Ok(Self::from_lex(u64::from_be_bytes(src.read_array()?)))
    }

    #[inline]
    fn compare(a: i64, b: i64) -> Ordering {
        a.cmp(&b)
    }

    #[inline]
    fn is_empty(v: i64) -> bool {
        v == 0
    }
}

impl FixedSizeCodec for BeI64 {
    const ENCODED_SIZE: usize = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bei64_roundtrip_and_order() {
        // Include negatives, zero, positives, and extremes
        let vals = [i64::MIN, -10, -1, 0, 1, 10, i64::MAX];

        // Encode all
        let encoded: Vec<Vec<u8>> = vals
            .iter()
            .map(|v| BeI64::encode_to_vec(*v).unwrap())
            .collect();

        // Lex sort of bytes should match numeric sort of values
        let mut bytes_sorted = encoded.clone();
        bytes_sorted.sort(); // lexicographic (bytewise)

        let mut vals_sorted = vals.to_vec();
        vals_sorted.sort(); // numeric

        let decoded: Vec<i64> = bytes_sorted
            .iter()
            .map(|b| BeI64::decode_exact(b).unwrap())
            .collect();

        assert_eq!(decoded, vals_sorted, "lexicographic != numeric order");

        // Spot round-trips
        for (i, v) in vals.iter().enumerate() {
            assert_eq!(BeI64::decode_exact(&encoded[i]).unwrap(), *v);
        }
    }
}
