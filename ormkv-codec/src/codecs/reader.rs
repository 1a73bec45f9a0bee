use super::*;

/// Position-tracking cursor over one encoded key.
///
/// Successive field decodes share a single reader by `&mut`, so each decode
/// starts exactly where the previous one stopped. Short reads fail with
/// [`Error::TruncatedInput`] and leave the position unchanged. Returned slices
/// borrow from the underlying buffer.
#[derive(Debug)]
pub struct KeyReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> KeyReader<'a> {
    #[inline]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The unread tail, without consuming it.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let b = *self
            .as_slice()
            .first()
            .ok_or_else(|| Error::truncated(1, 0))?;
        self.pos += 1;
        Ok(b)
    }

    #[inline]
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
        let rest = self.as_slice();
        if rest.len() < n {
            return Err(Error::truncated(n, rest.len()));
        }
        self.pos += n;
        Ok(&rest[..n])
    }

    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_exact(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read up to the next `delim`, consuming the delimiter but not returning
    /// it. A missing delimiter is a truncated read.
    #[inline]
    pub fn read_until(&mut self, delim: u8) -> Result<&'a [u8]> {
        let rest = self.as_slice();
        match rest.iter().position(|&b| b == delim) {
            Some(i) => {
                self.pos += i + 1;
                Ok(&rest[..i])
            }
            None => Err(Error::truncated(rest.len() + 1, rest.len())),
        }
    }

    /// Consume everything that is left.
    #[inline]
    pub fn read_rest(&mut self) -> &'a [u8] {
        let rest = self.as_slice();
        self.pos = self.buf.len();
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_position() {
        let data = [1u8, 2, 3, 4, 5, 0, 6];
        let mut r = KeyReader::new(&data);

        assert_eq!(r.read_u8().unwrap(), 1);
        assert_eq!(r.read_exact(2).unwrap(), &[2, 3]);
        assert_eq!(r.read_array::<1>().unwrap(), [4]);
        assert_eq!(r.read_until(0).unwrap(), &[5]);
        assert_eq!(r.position(), 6);
        assert_eq!(r.read_rest(), &[6]);
        assert!(r.is_empty());
    }

    #[test]
    fn short_reads_do_not_move() {
        let data = [9u8, 9];
        let mut r = KeyReader::new(&data);

        assert_eq!(r.read_exact(3), Err(Error::truncated(3, 2)));
        assert_eq!(r.read_array::<4>(), Err(Error::truncated(4, 2)));
        assert_eq!(r.read_until(0), Err(Error::truncated(3, 2)));
        assert_eq!(r.position(), 0);

        r.read_rest();
        assert_eq!(r.read_u8(), Err(Error::truncated(1, 0)));
        assert_eq!(r.read_rest(), &[] as &[u8]);
    }
}
