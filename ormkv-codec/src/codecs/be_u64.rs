use super::*;
use std::cmp::Ordering;

/// Big-endian u64 codec. Lexicographic order == numeric order.
pub struct BeU64;

impl Codec for BeU64 {
    const NAME: &'static str = "u64";
    type Borrowed<'a> = u64;

    #[inline]
    fn fixed_size() -> Option<usize> {
        Some(Self::ENCODED_SIZE)
    }

    #[inline]
    fn size(_v: u64) -> Result<usize> {
        Ok(Self::ENCODED_SIZE)
    }

    #[inline]
    fn is_ordered() -> bool {
        true
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: u64) -> Result<()> {
        dst.extend_from_slice(&v.to_be_bytes());
        Ok(())
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<u64> {
        Ok(u64::from_be_bytes(src.read_array()?))
    }

    #[inline]
    fn compare(a: u64, b: u64) -> Ordering {
        a.cmp(&b)
    }

    #[inline]
    fn is_empty(v: u64) -> bool {
        v == 0
    }
}

impl FixedSizeCodec for BeU64 {
    const ENCODED_SIZE: usize = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beu64_roundtrip_and_order() {
        let a = BeU64::encode_to_vec(1).unwrap();
        let b = BeU64::encode_to_vec(2).unwrap();
        let c = BeU64::encode_to_vec(10).unwrap();

        // Lex order == numeric
        assert!(a < b && b < c);

        // Round-trip
        assert_eq!(BeU64::decode_exact(&a).unwrap(), 1);
        assert_eq!(BeU64::decode_exact(&b).unwrap(), 2);
        assert_eq!(BeU64::decode_exact(&c).unwrap(), 10);
    }

    #[test]
    fn beu64_decode_advances_exactly_eight() {
        let mut buf = BeU64::encode_to_vec(u64::MAX - 1).unwrap();
        buf.push(0xEE);
        let mut r = KeyReader::new(&buf);
        assert_eq!(BeU64::decode(&mut r).unwrap(), u64::MAX - 1);
        assert_eq!(r.position(), 8);
        assert_eq!(r.as_slice(), &[0xEE]);
    }
}
