use super::*;
use std::cmp::Ordering;

#[inline]
fn parse_utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(Error::invalid_format)
}

/// UTF-8 string codec for the last field of a key:
///   [utf8]
///
/// Ordered: comparing UTF-8 bytes is the same as comparing `str`s.
pub struct Utf8;

impl Codec for Utf8 {
    const NAME: &'static str = "utf8";
    type Borrowed<'a> = &'a str;

    #[inline]
    fn size(v: &str) -> Result<usize> {
        check_field_len(v.len())?;
        Ok(v.len())
    }

    #[inline]
    fn is_ordered() -> bool {
        true
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &str) -> Result<()> {
        Self::size(v)?;
        dst.extend_from_slice(v.as_bytes());
        Ok(())
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<&'a str> {
        parse_utf8(src.read_rest())
    }

    #[inline]
    fn compare(a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_empty(v: &str) -> bool {
        v.is_empty()
    }
}

/// NUL-terminated UTF-8 codec for any field that is not last:
///   [utf8][0x00]
///
/// A terminator keeps the field ordered where a length prefix would not:
/// `"a"` encodes to `61 00` and `"ab"` to `61 62 00`, and `00 < 62`.
/// The price is that the string itself may not contain `\0`.
pub struct NonTerminalUtf8;

impl NonTerminalUtf8 {
    pub const TERMINATOR: u8 = 0x00;
}

impl Codec for NonTerminalUtf8 {
    const NAME: &'static str = "utf8";
    type Borrowed<'a> = &'a str;

    #[inline]
    fn size(v: &str) -> Result<usize> {
        check_field_len(v.len())?;
        if v.as_bytes().contains(&Self::TERMINATOR) {
            return Err(Error::InvalidValue(
                "non-terminal string field contains a NUL byte".to_string(),
            ));
        }
        Ok(v.len() + 1)
    }

    #[inline]
    fn is_ordered() -> bool {
        true
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &str) -> Result<()> {
        let n = Self::size(v)?;
        dst.reserve(n);
        dst.extend_from_slice(v.as_bytes());
        dst.push(Self::TERMINATOR);
        Ok(())
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<&'a str> {
        parse_utf8(src.read_until(Self::TERMINATOR)?)
    }

    #[inline]
    fn compare(a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_empty(v: &str) -> bool {
        v.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_terminal_roundtrip_and_layout() {
        let buf = NonTerminalUtf8::encode_to_vec("héllo").unwrap();
        assert_eq!(buf.last(), Some(&0));
        assert_eq!(buf.len(), "héllo".len() + 1);

        let mut tail = buf.clone();
        tail.push(0x42);
        let mut r = KeyReader::new(&tail);
        assert_eq!(NonTerminalUtf8::decode(&mut r).unwrap(), "héllo");
        assert_eq!(r.remaining(), 1);

        assert_eq!(NonTerminalUtf8::encode_to_vec("").unwrap(), [0]);
    }

    #[test]
    fn non_terminal_order_survives_following_bytes() {
        // Shorter string with a large following byte must still sort first.
        let mut a = NonTerminalUtf8::encode_to_vec("a").unwrap();
        a.push(0xFF);
        let mut b = NonTerminalUtf8::encode_to_vec("ab").unwrap();
        b.push(0x00);
        assert!(a < b);
    }

    #[test]
    fn non_terminal_rejects_nul_and_missing_terminator() {
        assert!(matches!(
            NonTerminalUtf8::encode_to_vec("a\0b"),
            Err(Error::InvalidValue(_))
        ));
        assert_eq!(
            NonTerminalUtf8::decode_exact(b"abc"),
            Err(Error::truncated(4, 3))
        );
    }

    #[test]
    fn invalid_utf8_rejected() {
        assert!(matches!(
            Utf8::decode_exact(&[0xC3, 0x28]),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            NonTerminalUtf8::decode_exact(&[0xFF, 0x00]),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn terminal_roundtrip_and_bound() {
        let s = "zeta";
        let buf = Utf8::encode_to_vec(s).unwrap();
        assert_eq!(buf, b"zeta");
        assert_eq!(Utf8::decode_exact(&buf).unwrap(), s);

        let long = "x".repeat(MAX_FIELD_LEN + 1);
        assert!(matches!(
            Utf8::size(&long),
            Err(Error::FieldTooLong { len: 256, max: 255 })
        ));
    }
}
