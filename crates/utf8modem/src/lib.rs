//! A validating UTF-8 codec for binary wire formats.
//!
//! The decoder is a single-pass DFA over the input bytes that rejects every
//! malformed sequence (overlong encodings, truncated sequences, encoded
//! surrogates, out-of-range code points). The encoder is its two-pass
//! counterpart: [`byte_length`] computes the exact output size so callers can
//! obtain a buffer up front, and [`encode`] fills it with no resizing and no
//! overallocation.
//!
//! Both sides work against caller-owned storage through two narrow
//! capability traits, [`ReadBytes`] and [`WriteBytes`], so the codec never
//! depends on a concrete buffer type and never allocates buffer storage
//! itself.
//!
//! # Examples
//!
//! ```rust
//! use utf8modem::{Text, byte_length, decode, encode};
//!
//! let text = decode([0xE2, 0x82, 0xAC].as_slice()).unwrap();
//! assert_eq!(text, Text::from("€"));
//!
//! let mut wire = vec![0u8; byte_length(&text)];
//! encode(&text, &mut wire);
//! assert_eq!(wire, [0xE2, 0x82, 0xAC]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod decode;
mod encode;
mod error;
mod text;

#[cfg(test)]
mod tests;

pub use buffer::{ReadBytes, WriteBytes};
pub use decode::decode;
pub use encode::{byte_length, encode};
pub use error::DecodeError;
pub use text::Text;
