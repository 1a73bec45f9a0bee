//! Composite index keys.
//!
//! A [`KeyCodec`] owns the field codecs of one key shape and applies them in
//! order against a single output buffer or a single [`KeyReader`]. Field
//! selection follows [`Position::for_field`](crate::Position::for_field):
//! every field but the last uses its NonTerminal variant, the last uses its
//! Terminal variant.
//!
//! Any leading run of fields encodes to a byte prefix of every full key that
//! starts with the same values, which is what range scans and pagination
//! cursors build on.

use std::cmp::Ordering;

use ormkv_result::{ContractViolation, Error, Result};

use crate::codecs::KeyReader;
use crate::{FieldCodec, KeyCodecConfig, Kind, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCodec {
    fields: Vec<FieldCodec>,
    config: KeyCodecConfig,
}

impl KeyCodec {
    /// Key shape over `kinds`, in key order, with default configuration.
    pub fn new(kinds: &[Kind]) -> std::result::Result<Self, ContractViolation> {
        Self::with_config(kinds, KeyCodecConfig::default())
    }

    pub fn with_config(
        kinds: &[Kind],
        config: KeyCodecConfig,
    ) -> std::result::Result<Self, ContractViolation> {
        let len = kinds.len();
        let fields = kinds
            .iter()
            .enumerate()
            .map(|(i, &kind)| FieldCodec::for_field(kind, i, len))
            .collect();
        Self::with_codecs(fields, config)
    }

    /// Key shape from explicitly chosen codecs.
    ///
    /// Rejects shapes where a codec that consumes the rest of the input sits
    /// before the last field. A NonTerminal codec in last position is allowed:
    /// it self-delimits, it just spends a framing byte it did not need.
    pub fn with_codecs(
        fields: Vec<FieldCodec>,
        config: KeyCodecConfig,
    ) -> std::result::Result<Self, ContractViolation> {
        if fields.is_empty() {
            return Err(ContractViolation::EmptyKey);
        }
        let len = fields.len();
        if let Some((index, codec)) = fields[..len - 1]
            .iter()
            .enumerate()
            .find(|(_, c)| c.consumes_rest())
        {
            return Err(ContractViolation::TerminalNotLast {
                kind: codec.kind().name(),
                index,
                len,
            });
        }
        Ok(Self { fields, config })
    }

    #[inline]
    pub fn fields(&self) -> &[FieldCodec] {
        &self.fields
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: a key shape has at least one field.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn config(&self) -> &KeyCodecConfig {
        &self.config
    }

    /// Whether byte order of encoded keys matches [`KeyCodec::compare_values`].
    /// False as soon as one field is unordered.
    pub fn is_ordered(&self) -> bool {
        self.fields.iter().all(FieldCodec::is_ordered)
    }

    /// Exact encoded size of the key (or key prefix) built from `values`.
    pub fn size(&self, values: &[Value<'_>]) -> Result<usize> {
        self.check_arity(values, values.len() <= self.len())?;
        let mut total = 0;
        for (i, (codec, v)) in self.fields.iter().zip(values).enumerate() {
            self.check_payload(i, v)?;
            total += codec.size(v)?;
        }
        Ok(total)
    }

    /// Encode a full key. `values` must hold one value per field.
    pub fn encode_key(&self, values: &[Value<'_>]) -> Result<Vec<u8>> {
        self.check_arity(values, values.len() == self.len())?;
        self.encode_prefix(values)
    }

    /// Encode the first `values.len()` fields.
    pub fn encode_prefix(&self, values: &[Value<'_>]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.size(values)?);
        self.encode_prefix_into(&mut out, values)?;
        Ok(out)
    }

    /// Append the first `values.len()` fields to `dst`. Appends nothing on
    /// failure.
    pub fn encode_prefix_into(&self, dst: &mut Vec<u8>, values: &[Value<'_>]) -> Result<()> {
        self.check_arity(values, values.len() <= self.len())?;
        let start = dst.len();
        for (i, (codec, v)) in self.fields.iter().zip(values).enumerate() {
            let res = self
                .check_payload(i, v)
                .and_then(|_| codec.encode_into(dst, v));
            if let Err(err) = res {
                tracing::debug!(
                    field = i,
                    kind = codec.kind().name(),
                    %err,
                    "rejecting key field"
                );
                dst.truncate(start);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Number of leading values left after dropping trailing empty ones.
    pub fn trimmed_len(&self, values: &[Value<'_>]) -> Result<usize> {
        self.check_arity(values, values.len() <= self.len())?;
        let mut n = values.len();
        while n > 0 && self.fields[n - 1].is_empty(&values[n - 1])? {
            n -= 1;
        }
        Ok(n)
    }

    /// Encode a prefix with trailing empty values left out, e.g. to start a
    /// range scan at "everything under these leading fields".
    pub fn encode_trimmed_prefix(&self, values: &[Value<'_>]) -> Result<Vec<u8>> {
        let n = self.trimmed_len(values)?;
        self.encode_prefix(&values[..n])
    }

    /// Decode a full key. Bytes left after the last field are an error unless
    /// the configuration allows them.
    pub fn decode_key<'a>(&self, bytes: &'a [u8]) -> Result<Vec<Value<'a>>> {
        let mut reader = KeyReader::new(bytes);
        let values = self.decode_key_from(&mut reader)?;
        if !reader.is_empty() && !self.config.allow_trailing_bytes {
            tracing::debug!(
                trailing = reader.remaining(),
                key_len = bytes.len(),
                "trailing bytes after last key field"
            );
            return Err(Error::InvalidFormat(format!(
                "{} trailing bytes after {}-field key",
                reader.remaining(),
                self.len()
            )));
        }
        Ok(values)
    }

    /// Decode one value per field from a shared cursor, leaving the cursor
    /// just past the last field.
    pub fn decode_key_from<'a>(&self, src: &mut KeyReader<'a>) -> Result<Vec<Value<'a>>> {
        let mut values = Vec::with_capacity(self.len());
        for (i, codec) in self.fields.iter().enumerate() {
            let v = self.decode_field(i, codec, src)?;
            values.push(v);
        }
        Ok(values)
    }

    /// Decode leading fields until the input runs out at a field boundary.
    ///
    /// Input that ends inside a field is truncated. Note that a full key whose
    /// Terminal field is empty ends at the same boundary as the prefix without
    /// it; such keys decode here to `len() - 1` values.
    pub fn decode_prefix<'a>(&self, bytes: &'a [u8]) -> Result<Vec<Value<'a>>> {
        let mut reader = KeyReader::new(bytes);
        let mut values = Vec::new();
        for (i, codec) in self.fields.iter().enumerate() {
            if reader.is_empty() {
                break;
            }
            values.push(self.decode_field(i, codec, &mut reader)?);
        }
        if !reader.is_empty() && !self.config.allow_trailing_bytes {
            return Err(Error::InvalidFormat(format!(
                "{} trailing bytes after {}-field key",
                reader.remaining(),
                self.len()
            )));
        }
        Ok(values)
    }

    /// Field-by-field comparison of two value tuples. When one tuple is a
    /// prefix of the other, the shorter one sorts first.
    pub fn compare_values(&self, a: &[Value<'_>], b: &[Value<'_>]) -> Result<Ordering> {
        self.check_arity(a, a.len() <= self.len())?;
        self.check_arity(b, b.len() <= self.len())?;
        for ((codec, x), y) in self.fields.iter().zip(a).zip(b) {
            match codec.compare(x, y)? {
                Ordering::Equal => continue,
                other => return Ok(other),
            }
        }
        Ok(a.len().cmp(&b.len()))
    }

    #[inline]
    fn decode_field<'a>(
        &self,
        index: usize,
        codec: &FieldCodec,
        src: &mut KeyReader<'a>,
    ) -> Result<Value<'a>> {
        let at = src.position();
        match codec.decode(src) {
            Ok(v) => {
                tracing::trace!(
                    field = index,
                    kind = codec.kind().name(),
                    offset = at,
                    len = src.position() - at,
                    "decoded key field"
                );
                Ok(v)
            }
            Err(err) => {
                tracing::debug!(
                    field = index,
                    kind = codec.kind().name(),
                    offset = at,
                    %err,
                    "key field decode failed"
                );
                Err(err)
            }
        }
    }

    #[inline]
    fn check_arity(&self, values: &[Value<'_>], ok: bool) -> Result<()> {
        if ok {
            return Ok(());
        }
        tracing::debug!(
            values = values.len(),
            fields = self.len(),
            "key arity mismatch"
        );
        Err(Error::InvalidValue(format!(
            "{} values for a {}-field key",
            values.len(),
            self.len()
        )))
    }

    /// Enforce the configured payload cap, which may be tighter than the
    /// codec's own.
    #[inline]
    fn check_payload(&self, index: usize, v: &Value<'_>) -> Result<()> {
        let max = self.config.effective_max_field_len();
        match v.payload_len() {
            Some(len) if len > max => {
                tracing::debug!(field = index, len, max, "key field too long");
                Err(Error::FieldTooLong { len, max })
            }
            _ => Ok(()),
        }
    }
}
