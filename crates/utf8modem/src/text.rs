//! The decoded text representation.
//!
//! [`Text`] stores an ordered sequence of 16-bit code units in the UTF-16
//! convention: code points above U+FFFF are held as a high/low surrogate
//! pair. The representation is inherited from the host string type of the
//! serialization format this codec serves, and its code-unit indexing is part
//! of the interchange contract, so it is preserved rather than re-encoded.
//!
//! Unlike `String`, a `Text` may hold unpaired surrogates. The decoder never
//! produces one, but the encoder accepts them (see
//! [`encode`](crate::encode)), so the type cannot rule them out.

#![allow(clippy::cast_possible_truncation)]

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write as _};

/// A sequence of 16-bit code units, surrogate pairs included.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Text {
    units: Vec<u16>,
}

impl Text {
    /// Creates an empty `Text`.
    #[must_use]
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Creates an empty `Text` with room for `units` code units.
    #[must_use]
    pub fn with_capacity(units: usize) -> Self {
        Self {
            units: Vec::with_capacity(units),
        }
    }

    /// Wraps a raw code-unit sequence, unpaired surrogates and all.
    #[must_use]
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// The code units.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Consumes the `Text`, returning its code units.
    #[must_use]
    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Length in code units (not code points, not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if there are no code units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Appends one code point: a single unit up to U+FFFF, a surrogate pair
    /// above.
    ///
    /// `point` must not exceed U+10FFFF. Values inside the surrogate range
    /// are stored as-is, as a single (unpaired) unit.
    pub fn push_code_point(&mut self, point: u32) {
        debug_assert!(point <= 0x10_FFFF);
        if point <= 0xFFFF {
            self.units.push(point as u16);
        } else {
            let point = point - 0x1_0000;
            self.units.push((point >> 10) as u16 + 0xD800);
            self.units.push((point & 0x03FF) as u16 + 0xDC00);
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for Text {
    /// Renders lossily: an unpaired surrogate shows as U+FFFD.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.units.iter().copied()) {
            f.write_char(c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}
