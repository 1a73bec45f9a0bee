use super::*;
use crate::temporal::Duration;
use std::cmp::Ordering;

/// Fixed-width duration codec:
///   [be64 seconds ^ sign bit][be32 nanos ^ sign bit]
///
/// Valid durations never mix signs between the two fields, so comparing the
/// pair lexicographically is the same as comparing the spans.
pub struct DurationCodec;

impl Codec for DurationCodec {
    const NAME: &'static str = "duration";
    type Borrowed<'a> = Duration;

    #[inline]
    fn fixed_size() -> Option<usize> {
        Some(Self::ENCODED_SIZE)
    }

    #[inline]
    fn size(_v: Duration) -> Result<usize> {
        Ok(Self::ENCODED_SIZE)
    }

    #[inline]
    fn is_ordered() -> bool {
        true
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: Duration) -> Result<()> {
        if !v.is_valid() {
            return Err(Error::InvalidValue(format!(
                "duration {}s {}ns out of range",
                v.seconds, v.nanos
            )));
        }
        dst.reserve(Self::ENCODED_SIZE);
        BeI64::encode_into(dst, v.seconds)?;
        BeI32::encode_into(dst, v.nanos)
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<Duration> {
        let d = Duration {
            seconds: BeI64::decode(src)?,
            nanos: BeI32::decode(src)?,
        };
        if !d.is_valid() {
            return Err(Error::InvalidFormat(format!(
                "duration {}s {}ns out of range",
                d.seconds, d.nanos
            )));
        }
        Ok(d)
    }

    #[inline]
    fn compare(a: Duration, b: Duration) -> Ordering {
        a.cmp(&b)
    }

    #[inline]
    fn is_empty(v: Duration) -> bool {
        v.is_zero()
    }
}

impl FixedSizeCodec for DurationCodec {
    const ENCODED_SIZE: usize = BeI64::ENCODED_SIZE + BeI32::ENCODED_SIZE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_roundtrip_and_order() {
        let vals = [
            Duration::new(-Duration::MAX_SECONDS, -Duration::MAX_NANOS),
            Duration::new(-2, 0),
            Duration::new(-1, -500_000_000),
            Duration::new(0, -1),
            Duration::ZERO,
            Duration::new(0, 1),
            Duration::new(1, 0),
            Duration::new(Duration::MAX_SECONDS, Duration::MAX_NANOS),
        ];

        let encoded: Vec<Vec<u8>> = vals
            .iter()
            .map(|v| DurationCodec::encode_to_vec(*v).unwrap())
            .collect();

        assert!(encoded.windows(2).all(|w| w[0] < w[1]));
        for (bytes, v) in encoded.iter().zip(vals) {
            assert_eq!(DurationCodec::decode_exact(bytes).unwrap(), v);
        }
        assert!(DurationCodec::is_empty(Duration::ZERO));
    }

    #[test]
    fn mixed_sign_rejected() {
        assert!(DurationCodec::encode_to_vec(Duration::new(1, -1)).is_err());
    }
}
