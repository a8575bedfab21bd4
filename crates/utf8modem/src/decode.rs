//! DFA-driven UTF-8 validation and decoding.
//!
//! The byte-class and transition tables are Bjoern Hoehrmann's "Flexible and
//! Economical UTF-8 Decoder" (<http://bjoern.hoehrmann.de/utf-8/decoder/dfa/>),
//! MIT licensed, Copyright (c) 2008-2009 Bjoern Hoehrmann.
//!
//! Every byte maps to one of twelve equivalence classes; the transition table
//! maps `state + class` to the next state. State `ACCEPT` means a complete
//! code point was assembled, `REJECT` means no valid continuation exists.
//! All other states are multiples of 12 and mean "expect one more
//! continuation byte of a specific class". The irregular boundary cases of
//! the UTF-8 grammar live entirely in the tables: 0xE0 demands a second byte
//! in 0xA0..=0xBF (anything lower would be overlong), 0xED demands one in
//! 0x80..=0x9F (anything higher would encode a surrogate), 0xF0 demands
//! 0x90..=0xBF, and 0xF4 demands 0x80..=0x8F (anything higher would exceed
//! U+10FFFF).

use crate::{ReadBytes, Text, error::DecodeError};

const ACCEPT: u8 = 0;
const REJECT: u8 = 12;

#[rustfmt::skip]
static BYTE_CLASSES: [u8; 256] = [
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
     1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
     9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9,
     7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
     7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
     8, 8, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
     2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    10, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 3, 3,
    11, 6, 6, 6, 5, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8,
];

#[rustfmt::skip]
static TRANSITIONS: [u8; 108] = [
     0, 12, 24, 36, 60, 96, 84, 12, 12, 12, 48, 72,
    12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12,
    12,  0, 12, 12, 12, 12, 12,  0, 12,  0, 12, 12,
    12, 24, 12, 12, 12, 12, 12, 24, 12, 24, 12, 12,
    12, 12, 12, 12, 12, 12, 12, 24, 12, 12, 12, 12,
    12, 24, 12, 12, 12, 12, 12, 12, 12, 24, 12, 12,
    12, 12, 12, 12, 12, 12, 12, 36, 12, 36, 12, 12,
    12, 36, 12, 12, 12, 12, 12, 36, 12, 36, 12, 12,
    12, 36, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12,
];

/// Decodes a UTF-8 byte sequence into a [`Text`].
///
/// A single left-to-right pass with no backtracking. The whole call fails on
/// the first malformed sequence (including a sequence cut short by the end of
/// input) and no partial text is returned.
///
/// # Errors
///
/// Returns [`DecodeError`] if `bytes` is not well-formed UTF-8.
///
/// # Examples
///
/// ```rust
/// use utf8modem::{Text, decode};
///
/// assert_eq!(decode([0x41].as_slice()), Ok(Text::from("A")));
/// assert!(decode([0xC0, 0x80].as_slice()).is_err());
/// ```
pub fn decode<B: ReadBytes + ?Sized>(bytes: &B) -> Result<Text, DecodeError> {
    let mut text = Text::with_capacity(bytes.len());
    let mut i = 0;

    // A valid code point completes within four bytes, so until fewer than
    // four bytes remain no read needs a bounds check.
    let end = bytes.len().saturating_sub(4);
    while i < end {
        let mut byte = bytes.get(i);
        i += 1;
        let class = BYTE_CLASSES[byte as usize];
        let mut point = (0xFF >> u32::from(class)) & u32::from(byte);
        let mut state = TRANSITIONS[class as usize];
        while state != ACCEPT {
            if state == REJECT {
                return Err(DecodeError);
            }
            byte = bytes.get(i);
            i += 1;
            point = u32::from(byte & 0x3F) | (point << 6);
            state = TRANSITIONS[(state + BYTE_CLASSES[byte as usize]) as usize];
        }

        text.push_code_point(point);
    }

    // Same loop over the tail, except the cursor is checked against the end
    // of input before every continuation read. Running out of bytes
    // mid-sequence is a truncated sequence and fails like any other
    // malformation.
    while i < bytes.len() {
        let mut byte = bytes.get(i);
        i += 1;
        let class = BYTE_CLASSES[byte as usize];
        let mut point = (0xFF >> u32::from(class)) & u32::from(byte);
        let mut state = TRANSITIONS[class as usize];
        while state != ACCEPT {
            if state == REJECT || i == bytes.len() {
                return Err(DecodeError);
            }
            byte = bytes.get(i);
            i += 1;
            point = u32::from(byte & 0x3F) | (point << 6);
            state = TRANSITIONS[(state + BYTE_CLASSES[byte as usize]) as usize];
        }

        text.push_code_point(point);
    }

    Ok(text)
}
