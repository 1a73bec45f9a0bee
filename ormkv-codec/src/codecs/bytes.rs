use super::*;
use std::cmp::Ordering;

/// Opaque bytes codec for the last field of a key:
///   [payload]
///
/// Notes:
/// - Decoding consumes the rest of the input; nothing may follow.
/// - Zero-copy: decoded slices borrow from the key.
/// - Unordered. Raw-byte fields support equality and prefix lookups only, not
///   ordered range scans.
pub struct Bytes;

impl Codec for Bytes {
    const NAME: &'static str = "bytes";
    type Borrowed<'a> = &'a [u8];

    #[inline]
    fn size(v: &[u8]) -> Result<usize> {
        check_field_len(v.len())?;
        Ok(v.len())
    }

    #[inline]
    fn is_ordered() -> bool {
        false
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &[u8]) -> Result<()> {
        Self::size(v)?;
        dst.extend_from_slice(v);
        Ok(())
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<&'a [u8]> {
        Ok(src.read_rest())
    }

    #[inline]
    fn compare(a: &[u8], b: &[u8]) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_empty(v: &[u8]) -> bool {
        v.is_empty()
    }
}

/// Length-prefixed bytes codec for any field that is not last:
///   [u8 len][payload]
///
/// Notes:
/// - The single length byte bounds payloads to 0..=255 bytes.
/// - A zero length byte decodes to the empty payload without reading further.
/// - Unordered for the same reason as [`Bytes`]; the length prefix would also
///   make shorter payloads sort first regardless of content.
pub struct NonTerminalBytes;

impl Codec for NonTerminalBytes {
    const NAME: &'static str = "bytes";
    type Borrowed<'a> = &'a [u8];

    #[inline]
    fn size(v: &[u8]) -> Result<usize> {
        check_field_len(v.len())?;
        Ok(v.len() + 1)
    }

    #[inline]
    fn is_ordered() -> bool {
        false
    }

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: &[u8]) -> Result<()> {
        let n = u8::try_from(v.len()).map_err(|_| Error::FieldTooLong {
            len: v.len(),
            max: MAX_FIELD_LEN,
        })?;
        dst.reserve(v.len() + 1);
        dst.push(n);
        dst.extend_from_slice(v);
        Ok(())
    }

    #[inline]
    fn decode<'a>(src: &mut KeyReader<'a>) -> Result<&'a [u8]> {
        let n = src.read_u8()?;
        if n == 0 {
            return Ok(&[]);
        }
        src.read_exact(n as usize)
    }

    #[inline]
    fn compare(a: &[u8], b: &[u8]) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_empty(v: &[u8]) -> bool {
        v.is_empty()
    }
}
