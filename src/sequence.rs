// SPDX-License-Identifier: Apache-2.0

//! An owned byte sequence and its textual round trips.

use crate::error::EncodingError;
use crate::render::{self, Hex, RenderMode};

use hex::FromHex;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter, LowerHex, UpperHex},
    ops::Deref,
};

/// An ordered, finite sequence of byte values.
///
/// The sequence is immutable through its public API and holds no state
/// between operations. Raw bytes convert infallibly; wider integers go
/// through [`ByteSequence::from_ints`], which enforces the byte range.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteSequence(#[serde(with = "serde_bytes")] Vec<u8>);

impl ByteSequence {
    /// Builds a sequence from untyped integers, validating each value into
    /// [0, 255].
    ///
    /// Fails with [`EncodingError::ValueOutOfRange`] naming the offending
    /// position and value; no partial sequence is produced.
    pub fn from_ints<I>(ints: I) -> Result<Self, EncodingError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut bytes = Vec::new();
        for (index, value) in ints.into_iter().enumerate() {
            if !(0..=255).contains(&value) {
                return Err(EncodingError::ValueOutOfRange(index, value));
            }
            bytes.push(value as u8);
        }
        Ok(Self(bytes))
    }

    /// Parses text produced by [`render::render`] back into the original
    /// bytes.
    ///
    /// The parse is the exact structural inverse of the rendering for the
    /// given mode: single-space separation in plain mode, a mandatory
    /// `b"..."` wrapper and whole `\xHH` escapes in escaped mode. Hex
    /// digits are accepted in either case.
    pub fn from_rendered(s: &str, mode: RenderMode) -> Result<Self, EncodingError> {
        match mode {
            RenderMode::Plain => Self::parse_plain(s),
            RenderMode::Escaped => Self::parse_escaped(s),
        }
    }

    fn parse_plain(s: &str) -> Result<Self, EncodingError> {
        if s.is_empty() {
            return Ok(Self::default());
        }

        let mut bytes = Vec::new();
        for pair in s.split(' ') {
            if pair.len() != 2 {
                return Err(EncodingError::UnexpectedFormat(format!(
                    "expected two hex digits, got {pair:?}"
                )));
            }
            bytes.extend(Vec::from_hex(pair)?);
        }
        Ok(Self(bytes))
    }

    fn parse_escaped(s: &str) -> Result<Self, EncodingError> {
        let inner = s
            .strip_prefix("b\"")
            .and_then(|rest| rest.strip_suffix('"'))
            .ok_or_else(|| {
                EncodingError::UnexpectedFormat("missing b\"...\" wrapper".to_string())
            })?;

        if inner.len() % 4 != 0 {
            return Err(EncodingError::UnexpectedFormat(format!(
                "truncated escape in {inner:?}"
            )));
        }

        let mut bytes = Vec::with_capacity(inner.len() / 4);
        for chunk in inner.as_bytes().chunks_exact(4) {
            if &chunk[..2] != b"\\x" {
                return Err(EncodingError::UnexpectedFormat(format!(
                    "expected \\x escape in {inner:?}"
                )));
            }
            bytes.extend(Vec::from_hex(&chunk[2..])?);
        }
        Ok(Self(bytes))
    }

    /// Renders the sequence in the requested mode.
    pub fn render(&self, mode: RenderMode) -> String {
        render::render(&self.0, mode)
    }

    /// The bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the sequence and returns the underlying bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Deref for ByteSequence {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for ByteSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&Hex(&self.0), f)
    }
}

impl LowerHex for ByteSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl UpperHex for ByteSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ints_accepts_byte_range() {
        let seq = ByteSequence::from_ints(vec![0, 255, 10]).unwrap();
        assert_eq!(seq.as_bytes(), &[0x00, 0xff, 0x0a]);
    }

    #[test]
    fn from_ints_rejects_out_of_range() {
        let err = ByteSequence::from_ints(vec![0, 256]).unwrap_err();
        assert!(matches!(err, EncodingError::ValueOutOfRange(1, 256)));

        let err = ByteSequence::from_ints(vec![-1]).unwrap_err();
        assert!(matches!(err, EncodingError::ValueOutOfRange(0, -1)));
    }

    #[test]
    fn from_ints_empty() {
        let seq = ByteSequence::from_ints(Vec::new()).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn parse_plain_round_trip() {
        let seq = ByteSequence::from(vec![0x0a, 0xff]);
        let text = seq.render(RenderMode::Plain);
        assert_eq!(text, "0a ff");
        assert_eq!(
            ByteSequence::from_rendered(&text, RenderMode::Plain).unwrap(),
            seq
        );
    }

    #[test]
    fn parse_plain_accepts_uppercase_digits() {
        let seq = ByteSequence::from_rendered("0A FF", RenderMode::Plain).unwrap();
        assert_eq!(seq.as_bytes(), &[0x0a, 0xff]);
    }

    #[test]
    fn parse_plain_empty() {
        let seq = ByteSequence::from_rendered("", RenderMode::Plain).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn parse_plain_rejects_bad_tokens() {
        // double separator produces an empty token
        let err = ByteSequence::from_rendered("0a  ff", RenderMode::Plain).unwrap_err();
        assert!(matches!(err, EncodingError::UnexpectedFormat(_)));

        // token too long
        let err = ByteSequence::from_rendered("0aff", RenderMode::Plain).unwrap_err();
        assert!(matches!(err, EncodingError::UnexpectedFormat(_)));

        // non-hex digits
        let err = ByteSequence::from_rendered("0a zz", RenderMode::Plain).unwrap_err();
        assert!(matches!(err, EncodingError::FromHex(_)));
    }

    #[test]
    fn parse_escaped_round_trip() {
        let seq = ByteSequence::from(vec![0x00, 0xff]);
        let text = seq.render(RenderMode::Escaped);
        assert_eq!(text, "b\"\\x00\\xff\"");
        assert_eq!(
            ByteSequence::from_rendered(&text, RenderMode::Escaped).unwrap(),
            seq
        );
    }

    #[test]
    fn parse_escaped_empty() {
        let seq = ByteSequence::from_rendered("b\"\"", RenderMode::Escaped).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn parse_escaped_rejects_bad_structure() {
        // no wrapper at all
        let err = ByteSequence::from_rendered("\\x0a", RenderMode::Escaped).unwrap_err();
        assert!(matches!(err, EncodingError::UnexpectedFormat(_)));

        // truncated escape
        let err = ByteSequence::from_rendered("b\"\\x0\"", RenderMode::Escaped).unwrap_err();
        assert!(matches!(err, EncodingError::UnexpectedFormat(_)));

        // separator where none belongs
        let err = ByteSequence::from_rendered("b\"\\x0a \\xff\"", RenderMode::Escaped).unwrap_err();
        assert!(matches!(err, EncodingError::UnexpectedFormat(_)));

        // non-hex digits inside an escape
        let err = ByteSequence::from_rendered("b\"\\xzz\"", RenderMode::Escaped).unwrap_err();
        assert!(matches!(err, EncodingError::FromHex(_)));
    }

    #[test]
    fn display_is_plain_rendering() {
        let seq = ByteSequence::from(vec![0x0a, 0xff]);
        assert_eq!(seq.to_string(), "0a ff");
    }

    #[test]
    fn hex_formatting_is_contiguous() {
        let seq = ByteSequence::from(vec![0x0a, 0xff]);
        assert_eq!(format!("{seq:x}"), "0aff");
        assert_eq!(format!("{seq:X}"), "0AFF");
    }

    #[test]
    fn conversions_round_trip() {
        let bytes = vec![1u8, 2, 3];
        let seq = ByteSequence::from(bytes.as_slice());
        assert_eq!(seq.as_ref(), bytes.as_slice());
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.into_vec(), bytes);
    }
}
