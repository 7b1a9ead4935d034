// SPDX-License-Identifier: Apache-2.0

//! The `hexview` crate renders byte sequences as human-readable hexadecimal
//! text for diagnostic output, and parses those renderings back into bytes.
//!
//! ## Rendering modes
//!
//! Two output shapes are supported, selected with [`RenderMode`]:
//!
//! 1. [`Plain`](RenderMode::Plain): two lowercase hex digits per byte,
//!    bytes joined by single spaces (`"0a ff"`).
//! 2. [`Escaped`](RenderMode::Escaped): a byte-string literal with one
//!    `\xHH` escape per byte and no separator (`b"\x0a\xff"`).
//!
//! ```
//! use hexview::{render, RenderMode};
//!
//! assert_eq!(render(&[0x0a, 0xff], RenderMode::Plain), "0a ff");
//! assert_eq!(render(&[0x0a, 0xff], RenderMode::Escaped), r#"b"\x0a\xff""#);
//! ```
//!
//! ## Byte sequences
//!
//! [`ByteSequence`] is the owned container the renderings round-trip
//! through. Building one from untyped integers validates each value into
//! the byte range, and [`ByteSequence::from_rendered`] reconstructs the
//! original bytes from either rendering:
//!
//! ```
//! use hexview::{ByteSequence, RenderMode};
//!
//! let seq = ByteSequence::from_ints(vec![0x00, 0xff])?;
//! let text = seq.render(RenderMode::Plain);
//! assert_eq!(ByteSequence::from_rendered(&text, RenderMode::Plain)?, seq);
//! # Ok::<(), hexview::EncodingError>(())
//! ```
//!
//! ## Writing to a sink
//!
//! The [`WriteHex`] extension trait emits a rendering to any
//! [`std::io::Write`] sink, such as a log file or standard output. The
//! crate never chooses the sink itself and performs no other I/O.

#![deny(clippy::all)]
#![deny(missing_docs)]

/// Error module.
pub mod error;

pub mod render;
pub mod sequence;

pub use error::EncodingError;
pub use render::{render, ByteLiteral, Hex, RenderMode, WriteHex};
pub use sequence::ByteSequence;
