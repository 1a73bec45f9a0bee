use std::fmt;
use thiserror::Error;

/// Recoverable failures raised while sizing, encoding, or decoding key fields.
///
/// Every variant describes a condition tied to a specific value or a specific
/// byte sequence. Retrying the same call with the same input cannot succeed, so
/// callers decide whether an error becomes a rejected write, a rejected read,
/// or a corruption alarm.
///
/// Programmer errors (mis-assembled key shapes) are reported separately through
/// [`ContractViolation`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A byte or string payload is longer than its framing can represent.
    ///
    /// Length-prefixed fields use a single length byte, so the hard ceiling is
    /// 255 bytes. An index may configure a lower ceiling; `max` reports the
    /// limit that was actually applied.
    ///
    /// # Recovery
    ///
    /// None for this value. The caller must reject the record.
    #[error("field of {len} bytes exceeds the {max}-byte limit")]
    FieldTooLong { len: usize, max: usize },

    /// Fewer bytes remain in the input than the field's framing requires.
    ///
    /// Raised at decode time. This usually means the key bytes were truncated
    /// by the storage layer or that fields are being decoded with a key shape
    /// that differs from the one used to encode them.
    #[error("truncated input: needed {needed} bytes but only {remaining} remain")]
    TruncatedInput { needed: usize, remaining: usize },

    /// The bytes read for a field do not form a valid value of its kind.
    ///
    /// Examples: a boolean byte other than `0x00`/`0x01`, invalid UTF-8, a
    /// timestamp outside the representable calendar range, or trailing bytes
    /// after the last field of a key.
    #[error("invalid encoding: {0}")]
    InvalidFormat(String),

    /// The value cannot be represented by the selected codec.
    ///
    /// Examples: a string containing `0x00` in a non-terminal position, a
    /// timestamp with out-of-range nanoseconds, or a key built from the wrong
    /// number of values.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A dynamically dispatched codec received a value of a different kind.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

impl Error {
    /// Create an [`Error::InvalidFormat`] from any displayable error.
    #[inline]
    pub fn invalid_format<E: fmt::Display>(err: E) -> Self {
        Error::InvalidFormat(err.to_string())
    }

    /// Create an [`Error::InvalidValue`] from any displayable error.
    #[inline]
    pub fn invalid_value<E: fmt::Display>(err: E) -> Self {
        Error::InvalidValue(err.to_string())
    }

    /// Shorthand for a truncated read of `needed` bytes with `remaining` left.
    #[inline]
    pub fn truncated(needed: usize, remaining: usize) -> Self {
        Error::TruncatedInput { needed, remaining }
    }
}

/// Programmer errors in how codecs are assembled into a key.
///
/// These are not runtime conditions to recover from: they indicate the key
/// shape itself is wrong and every encode or decode through it would be
/// ambiguous.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A variable-width Terminal codec was placed before the last key field.
    ///
    /// Terminal codecs consume the rest of the input on decode, so nothing
    /// after them could ever be located.
    #[error("terminal {kind} codec at field {index} of a {len}-field key")]
    TerminalNotLast {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// A key was defined with no fields.
    #[error("a key must have at least one field")]
    EmptyKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = Error::FieldTooLong { len: 256, max: 255 };
        assert_eq!(
            err.to_string(),
            "field of 256 bytes exceeds the 255-byte limit"
        );

        let err = Error::truncated(4, 1);
        assert!(err.to_string().contains("needed 4 bytes"));

        let err = ContractViolation::TerminalNotLast {
            kind: "bytes",
            index: 0,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "terminal bytes codec at field 0 of a 2-field key"
        );
    }

    #[test]
    fn helpers_keep_message() {
        let err = Error::invalid_format("bad bool byte 0x07");
        assert!(matches!(
            err,
            Error::InvalidFormat(msg) if msg.contains("0x07")
        ));
    }
}
