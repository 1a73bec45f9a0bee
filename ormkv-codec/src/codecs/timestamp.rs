use super::*;
use crate::temporal::Timestamp;
use std::cmp::Ordering;

/// Fixed-width timestamp codec:
///   [be64 seconds ^ sign bit][be32 nanos]
///
/// Nanos are never negative for a valid timestamp, so they need no flip.
/// Out-of-range timestamps are rejected on both sides: on encode as an
/// invalid value, on decode as corrupt input.
pub struct TimestampCodec;

impl Codec for TimestampCodec {
    const NAME: &'static str = "timestamp";
    type Borrowed<'a> = Timestamp;

    #[inline]
    fn fixed_size() -> Option<usize> {
        Some(Self::ENCODED_SIZE)
    }

    #[inline]
    fn size(_v: Timestamp) -> Result<usize> {
        Ok(Self::ENCODED_SIZE)
    }

    #[inline]
    fn is_ordered() -> bool {
        true
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: Timestamp) -> Result<()> {
        if !v.is_valid() {
            return Err(Error::InvalidValue(format!(
                "timestamp {}s {}ns out of range",
                v.seconds, v.nanos
            )));
        }
        dst.reserve(Self::ENCODED_SIZE);
        BeI64::encode_into(dst, v.seconds)?;
        BeU32::encode_into(dst, v.nanos as u32)
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<Timestamp> {
        let seconds = BeI64::decode(src)?;
        let nanos = BeU32::decode(src)?;
        let ts = Timestamp {
            seconds,
            nanos: i32::try_from(nanos).map_err(Error::invalid_format)?,
        };
        if !ts.is_valid() {
            return Err(Error::InvalidFormat(format!(
                "timestamp {}s {}ns out of range",
                ts.seconds, ts.nanos
            )));
        }
        Ok(ts)
    }

    #[inline]
    fn compare(a: Timestamp, b: Timestamp) -> Ordering {
        a.cmp(&b)
    }

    #[inline]
    fn is_empty(v: Timestamp) -> bool {
        v.is_zero()
    }
}

impl FixedSizeCodec for TimestampCodec {
    const ENCODED_SIZE: usize = BeI64::ENCODED_SIZE + BeU32::ENCODED_SIZE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_roundtrip_and_order() {
        let vals = [
            Timestamp::new(Timestamp::MIN_SECONDS, 0),
            Timestamp::new(-1, 999_999_999),
            Timestamp::new(0, 0),
            Timestamp::new(0, 1),
            Timestamp::new(1_700_000_000, 5),
            Timestamp::new(Timestamp::MAX_SECONDS, Timestamp::MAX_NANOS),
        ];

        let encoded: Vec<Vec<u8>> = vals
            .iter()
            .map(|v| TimestampCodec::encode_to_vec(*v).unwrap())
            .collect();

        assert!(encoded.iter().all(|b| b.len() == 12));
        assert!(encoded.windows(2).all(|w| w[0] < w[1]));
        for (bytes, v) in encoded.iter().zip(vals) {
            assert_eq!(TimestampCodec::decode_exact(bytes).unwrap(), v);
        }
    }

    #[test]
    fn timestamp_range_enforced() {
        let bad = Timestamp::new(0, -1);
        assert!(matches!(
            TimestampCodec::encode_to_vec(bad),
            Err(Error::InvalidValue(_))
        ));

        // Hand-built bytes with nanos == 1e9.
        let mut raw = BeI64::encode_to_vec(0).unwrap();
        raw.extend_from_slice(&1_000_000_000u32.to_be_bytes());
        assert!(matches!(
            TimestampCodec::decode_exact(&raw),
            Err(Error::InvalidFormat(_))
        ));
    }
}
