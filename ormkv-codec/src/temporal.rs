//! Timestamp and duration values as stored in index keys.
//!
//! Both are `(seconds, nanos)` pairs with the range rules of the protobuf
//! well-known types, and convert to and from the `time` crate's types.

use ormkv_result::Error;
use time::OffsetDateTime;

/// A point in time, counted from the Unix epoch.
///
/// Field order matters: the derived `Ord` compares seconds first, matching
/// the encoded byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    /// 0001-01-01T00:00:00Z
    pub const MIN_SECONDS: i64 = -62_135_596_800;
    /// 9999-12-31T23:59:59Z
    pub const MAX_SECONDS: i64 = 253_402_300_799;
    pub const MAX_NANOS: i32 = 999_999_999;

    pub const UNIX_EPOCH: Timestamp = Timestamp::new(0, 0);

    #[inline]
    pub const fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        (Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&self.seconds)
            && (0..=Self::MAX_NANOS).contains(&self.nanos)
    }

    /// The epoch is the zero value for key purposes.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(dt: OffsetDateTime) -> Self {
        Self {
            seconds: dt.unix_timestamp(),
            nanos: dt.nanosecond() as i32,
        }
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = Error;

    fn try_from(ts: Timestamp) -> Result<Self, Self::Error> {
        if !ts.is_valid() {
            return Err(Error::InvalidValue(format!(
                "timestamp {}s {}ns out of range",
                ts.seconds, ts.nanos
            )));
        }
        OffsetDateTime::from_unix_timestamp(ts.seconds)
            .and_then(|dt| dt.replace_nanosecond(ts.nanos as u32))
            .map_err(Error::invalid_value)
    }
}

/// A signed span of time.
///
/// When both fields are non-zero they carry the same sign, which is what
/// makes `(seconds, nanos)` ordering agree with numeric ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    pub seconds: i64,
    pub nanos: i32,
}

impl Duration {
    /// Roughly +/- 10,000 years.
    pub const MAX_SECONDS: i64 = 315_576_000_000;
    pub const MAX_NANOS: i32 = 999_999_999;

    pub const ZERO: Duration = Duration::new(0, 0);

    #[inline]
    pub const fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        let in_range = (-Self::MAX_SECONDS..=Self::MAX_SECONDS).contains(&self.seconds)
            && (-Self::MAX_NANOS..=Self::MAX_NANOS).contains(&self.nanos);
        let mixed_sign =
            (self.seconds > 0 && self.nanos < 0) || (self.seconds < 0 && self.nanos > 0);
        in_range && !mixed_sign
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }
}

impl From<time::Duration> for Duration {
    fn from(d: time::Duration) -> Self {
        Self {
            seconds: d.whole_seconds(),
            nanos: d.subsec_nanoseconds(),
        }
    }
}

impl TryFrom<Duration> for time::Duration {
    type Error = Error;

    fn try_from(d: Duration) -> Result<Self, Self::Error> {
        if !d.is_valid() {
            return Err(Error::InvalidValue(format!(
                "duration {}s {}ns out of range",
                d.seconds, d.nanos
            )));
        }
        Ok(time::Duration::new(d.seconds, d.nanos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn timestamp_converts_both_ways() {
        let dt = datetime!(2024-02-29 12:34:56.789 UTC);
        let ts = Timestamp::from(dt);
        assert_eq!(ts.nanos, 789_000_000);
        assert_eq!(OffsetDateTime::try_from(ts).unwrap(), dt);
    }

    #[test]
    fn timestamp_range_limits() {
        assert!(Timestamp::new(Timestamp::MIN_SECONDS, 0).is_valid());
        let max = Timestamp::new(Timestamp::MAX_SECONDS, Timestamp::MAX_NANOS);
        assert!(max.is_valid());
        assert!(!Timestamp::new(Timestamp::MAX_SECONDS + 1, 0).is_valid());
        assert!(!Timestamp::new(0, -1).is_valid());
        let too_many_nanos = Timestamp::new(0, 1_000_000_000);
        assert!(OffsetDateTime::try_from(too_many_nanos).is_err());

        let min = Timestamp::new(Timestamp::MIN_SECONDS, 0);
        let min = OffsetDateTime::try_from(min).unwrap();
        assert_eq!(min.year(), 1);
    }

    #[test]
    fn duration_sign_rules() {
        assert!(Duration::new(-1, -500).is_valid());
        assert!(Duration::new(0, -500).is_valid());
        assert!(!Duration::new(1, -500).is_valid());
        assert!(!Duration::new(-1, 500).is_valid());

        let d = time::Duration::new(-3, -250_000_000);
        let ours = Duration::from(d);
        assert_eq!(ours, Duration::new(-3, -250_000_000));
        assert_eq!(time::Duration::try_from(ours).unwrap(), d);
    }

    #[test]
    fn derived_order_is_numeric_for_valid_durations() {
        let mut ds = vec![
            Duration::new(1, 0),
            Duration::new(-1, -500_000_000),
            Duration::new(0, -500_000_000),
            Duration::new(-1, 0),
            Duration::new(0, 300_000_000),
        ];
        ds.sort();
        assert_eq!(
            ds,
            vec![
                Duration::new(-1, -500_000_000),
                Duration::new(-1, 0),
                Duration::new(0, -500_000_000),
                Duration::new(0, 300_000_000),
                Duration::new(1, 0),
            ]
        );
    }
}
