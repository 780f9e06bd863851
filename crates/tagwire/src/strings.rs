//! Byte arrays and the two string encodings
//!
//! * Alphanumeric: one byte per character, then `0x00`.
//! * String: varint byte length, UTF-8 bytes, then `0x00`. The decoder
//!   consumes the length but trusts the terminator; the first `0x00` after
//!   the prefix ends the string whatever the prefix said.

use crate::{buffer::Buffer, errors::Result};

const TERMINATOR: u8 = 0;

impl Buffer {
    /// Write a varint length followed by the raw bytes
    pub fn write_byte_array(&mut self, value: &[u8]) {
        self.write_len(value.len());
        self.append(value);
    }

    /// Borrow a length-prefixed byte array from the buffer
    pub fn read_byte_slice(&mut self) -> Result<&[u8]> {
        let len = self.read_len()?;
        self.take(len)
    }

    /// Read a length-prefixed byte array into a new vector
    pub fn read_byte_array(&mut self) -> Result<Vec<u8>> {
        self.read_byte_slice().map(<[u8]>::to_vec)
    }

    /// Write a NUL-terminated single-byte-per-character string
    ///
    /// Characters above U+00FF do not fit in a byte and are truncated to
    /// their low eight bits.
    pub fn write_alphanumeric(&mut self, value: &str) {
        for ch in value.chars() {
            self.write_byte(ch as u32 as u8);
        }
        self.write_byte(TERMINATOR);
    }

    /// Read a NUL-terminated single-byte-per-character string
    pub fn read_alphanumeric(&mut self) -> Result<String> {
        let len = self.scan_terminator()?;
        let bytes = self.take(len + 1)?;
        Ok(bytes[..len].iter().copied().map(char::from).collect())
    }

    /// Write a length-prefixed, NUL-terminated UTF-8 string
    pub fn write_string(&mut self, value: &str) {
        if value.as_bytes().contains(&TERMINATOR) {
            tracing::warn!(
                len = value.len(),
                "string contains NUL and will decode truncated"
            );
        }
        self.write_len(value.len());
        self.append(value.as_bytes());
        self.write_byte(TERMINATOR);
    }

    /// Borrow a string written by [`Buffer::write_string`]
    pub fn read_str(&mut self) -> Result<&str> {
        let declared = self.read_len()?;
        let len = self.scan_terminator()?;
        if len != declared {
            tracing::trace!(declared, len, "string prefix disagrees with terminator");
        }
        let bytes = self.take(len + 1)?;
        Ok(core::str::from_utf8(&bytes[..len])?)
    }

    /// Read a string written by [`Buffer::write_string`]
    pub fn read_string(&mut self) -> Result<String> {
        self.read_str().map(str::to_owned)
    }

    /// Write a count followed by each string
    pub fn write_strings<S: AsRef<str>>(&mut self, values: &[S]) {
        self.write_len(values.len());
        for value in values {
            self.write_string(value.as_ref());
        }
    }

    /// Read a sequence written by [`Buffer::write_strings`]
    pub fn read_strings(&mut self) -> Result<Vec<String>> {
        let count = self.read_len()?;
        // Each string takes at least two bytes, cap the preallocation by that
        let mut out = Vec::with_capacity(count.min(self.remaining() / 2));
        for _ in 0..count {
            out.push(self.read_string()?);
        }
        Ok(out)
    }

    /// Distance from the cursor to the next terminator
    fn scan_terminator(&self) -> Result<usize> {
        self.peek_remaining()
            .iter()
            .position(|&b| b == TERMINATOR)
            .ok_or_else(|| self.truncated(self.remaining() + 1))
    }
}
