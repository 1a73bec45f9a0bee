use crate::codecs::MAX_FIELD_LEN;

/// Run-time configuration for a [`KeyCodec`](crate::KeyCodec) (no hidden
/// constants).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCodecConfig {
    /// Longest byte or string payload accepted in any field of this key.
    /// Values above [`MAX_FIELD_LEN`] are clamped to it: the length-prefix
    /// byte cannot represent more.
    pub max_field_len: usize,
    /// Let `decode_key` ignore bytes left after the last field instead of
    /// failing. Useful when a store appends a suffix to the key slot.
    pub allow_trailing_bytes: bool,
}

impl Default for KeyCodecConfig {
    fn default() -> Self {
        Self {
            max_field_len: MAX_FIELD_LEN,
            allow_trailing_bytes: false,
        }
    }
}

impl KeyCodecConfig {
    pub fn with_max_field_len(mut self, max_field_len: usize) -> Self {
        self.max_field_len = max_field_len;
        self
    }

    pub fn with_trailing_bytes(mut self, allow: bool) -> Self {
        self.allow_trailing_bytes = allow;
        self
    }

    /// The limit actually enforced.
    #[inline]
    pub fn effective_max_field_len(&self) -> usize {
        self.max_field_len.min(MAX_FIELD_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_field_len_is_clamped() {
        let cfg = KeyCodecConfig::default().with_max_field_len(10_000);
        assert_eq!(cfg.effective_max_field_len(), MAX_FIELD_LEN);

        let cfg = KeyCodecConfig::default().with_max_field_len(32);
        assert_eq!(cfg.effective_max_field_len(), 32);
        assert!(!cfg.allow_trailing_bytes);
    }
}
