// SPDX-License-Identifier: Apache-2.0

//! Rendering byte sequences as hexadecimal diagnostic text.

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::io::Write;

/// Selects the textual shape produced by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Two lowercase hex digits per byte, bytes joined by single spaces.
    Plain,

    /// A byte-string literal: one `\xHH` escape per byte, no separator,
    /// the whole wrapped in `b"` and `"`.
    Escaped,
}

impl TryFrom<&str> for RenderMode {
    type Error = ();

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        match &val.to_lowercase()[..] {
            "plain" => Ok(Self::Plain),
            "escaped" => Ok(Self::Escaped),
            _ => Err(()),
        }
    }
}

/// Displays a byte slice as space-separated lowercase hex pairs.
pub struct Hex<'a>(pub &'a [u8]);

impl Display for Hex<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Displays a byte slice as a byte-string literal with `\xHH` escapes.
pub struct ByteLiteral<'a>(pub &'a [u8]);

impl Display for ByteLiteral<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "b\"")?;
        for byte in self.0.iter() {
            write!(f, "\\x{byte:02x}")?;
        }
        write!(f, "\"")
    }
}

/// Renders `data` in the requested mode.
///
/// The empty sequence renders as `""` in plain mode and `b""` in escaped
/// mode. The operation is pure; rendering the same input twice yields
/// identical output.
pub fn render(data: &[u8], mode: RenderMode) -> String {
    match mode {
        RenderMode::Plain => Hex(data).to_string(),
        RenderMode::Escaped => ByteLiteral(data).to_string(),
    }
}

/// Emits hexadecimal renderings to a byte sink.
pub trait WriteHex: Write {
    /// Renders `data` in `mode` and writes exactly that string to `self`.
    fn write_rendered(&mut self, data: &[u8], mode: RenderMode) -> std::io::Result<()> {
        self.write_all(render(data, mode).as_bytes())
    }
}

impl<W: Write> WriteHex for W {}
