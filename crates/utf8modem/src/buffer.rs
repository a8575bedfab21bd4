//! Capability traits for caller-owned byte storage.
//!
//! The codec only ever needs indexed byte access: the decoder reads bytes by
//! position from storage of known length, and the encoder writes bytes by
//! position into storage of known capacity. Keeping those two capabilities as
//! separate traits lets any concrete buffer type (slices, vectors, memory
//! segments of a wire-format message) plug into the codec without the codec
//! naming a storage implementation.

use alloc::vec::Vec;

/// Read-only indexed byte access with a known length.
///
/// The decoder borrows a `ReadBytes` for the duration of a call and never
/// mutates or retains it.
pub trait ReadBytes {
    /// Number of readable bytes.
    fn len(&self) -> usize;

    /// Returns `true` if there are no readable bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the byte at `index`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `index >= self.len()`.
    fn get(&self, index: usize) -> u8;
}

/// Write-once indexed byte access with a known capacity.
///
/// The encoder takes an exclusive borrow of a `WriteBytes` for the duration
/// of a call and writes every position in `0..byte_length` exactly once.
pub trait WriteBytes {
    /// Number of writable byte positions.
    fn capacity(&self) -> usize;

    /// Writes `byte` at `index`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `index >= self.capacity()`.
    fn set(&mut self, index: usize, byte: u8);
}

impl ReadBytes for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn get(&self, index: usize) -> u8 {
        self[index]
    }
}

impl ReadBytes for Vec<u8> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> u8 {
        self[index]
    }
}

impl<R: ReadBytes + ?Sized> ReadBytes for &R {
    fn len(&self) -> usize {
        R::len(self)
    }

    fn get(&self, index: usize) -> u8 {
        R::get(self, index)
    }
}

impl WriteBytes for [u8] {
    fn capacity(&self) -> usize {
        self.len()
    }

    fn set(&mut self, index: usize, byte: u8) {
        self[index] = byte;
    }
}

impl WriteBytes for Vec<u8> {
    fn capacity(&self) -> usize {
        self.len()
    }

    fn set(&mut self, index: usize, byte: u8) {
        self[index] = byte;
    }
}

impl<W: WriteBytes + ?Sized> WriteBytes for &mut W {
    fn capacity(&self) -> usize {
        W::capacity(self)
    }

    fn set(&mut self, index: usize, byte: u8) {
        W::set(self, index, byte);
    }
}
