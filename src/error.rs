// SPDX-License-Identifier: Apache-2.0

use std::error;

/// Errors which may be encountered when building a byte sequence from
/// untyped input or parsing one back out of rendered text.
#[derive(Debug)]
pub enum EncodingError {
    /// An input integer fell outside the byte range.
    ValueOutOfRange(usize, i64),

    /// Vec from hex Error Handling
    FromHex(hex::FromHexError),

    /// The text did not have the structure of a rendering.
    UnexpectedFormat(String),
}

impl std::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EncodingError::ValueOutOfRange(index, value) => write!(
                f,
                "Value {value} at index {index} is outside the byte range 0-255"
            ),
            EncodingError::FromHex(e) => write!(f, "Converting hex to bytes error: {e}"),
            EncodingError::UnexpectedFormat(what) => {
                write!(f, "Unexpected rendering format: {what}")
            }
        }
    }
}

/// Use the default implementations for std::error::Error here.
impl error::Error for EncodingError {}

impl std::convert::From<hex::FromHexError> for EncodingError {
    fn from(value: hex::FromHexError) -> Self {
        Self::FromHex(value)
    }
}
