//! Count-prefixed arrays of fixed-width elements

use crate::{buffer::Buffer, errors::Result, primitives::FixedWidth, varint::var_uint_len};

/// Encoded size of `values` as a typed array
pub fn encoded_array_len<T: FixedWidth>(values: &[T]) -> usize {
    var_uint_len(values.len() as u32) + values.len() * T::WIDTH
}

impl Buffer {
    /// Write a varint element count followed by the packed elements
    pub fn write_array<T: FixedWidth>(&mut self, values: &[T]) {
        self.write_len(values.len());
        for &value in values {
            value.put(self);
        }
    }

    /// Read an array written by [`Buffer::write_array`]
    ///
    /// The full byte span is checked against the buffer before anything is
    /// allocated, so a corrupt count cannot trigger a huge allocation.
    pub fn read_array<T: FixedWidth>(&mut self) -> Result<Vec<T>> {
        let count = self.read_len()?;
        let span = count
            .checked_mul(T::WIDTH)
            .ok_or_else(|| self.truncated(usize::MAX))?;
        let bytes = self.take(span)?;
        Ok(bytes.chunks_exact(T::WIDTH).map(T::from_le_slice).collect())
    }
}
