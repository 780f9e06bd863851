//! Growable byte buffer with a single read/write cursor

use crate::errors::{Error, Result};

/// A byte buffer used both as an encode target and a decode source
///
/// When encoding, the cursor is the append position and tracks the end of
/// storage. When decoding, storage is fixed and the cursor is the next unread
/// byte. Every read is bounds-checked against the storage length, so the
/// cursor never passes the end of the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    bytes: Vec<u8>,
    offset: usize,
}

impl Buffer {
    /// Create an empty buffer for encoding
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            offset: 0,
        }
    }

    /// Wrap existing bytes for decoding, cursor at the start
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Copy `bytes` into a new buffer for decoding
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }

    /// Current cursor position
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Move the cursor to `position`, which may equal the storage length
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.bytes.len() {
            return Err(Error::InvalidPosition {
                position,
                len: self.bytes.len(),
            });
        }
        self.offset = position;
        Ok(())
    }

    /// Move the cursor back to the start without touching storage
    pub fn rewind(&mut self) {
        self.offset = 0;
    }

    /// Length of the backing storage
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the backing storage is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Allocated capacity of the backing storage
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Number of unread bytes after the cursor
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// Append `bytes` to storage and advance the cursor past them
    #[inline]
    pub fn append(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
        self.offset += bytes.len();
    }

    /// Append a single byte
    #[inline]
    pub fn write_byte(&mut self, value: u8) {
        self.bytes.push(value);
        self.offset += 1;
    }

    /// View of the bytes between the cursor and the end of storage
    #[inline]
    pub fn peek_remaining(&self) -> &[u8] {
        &self.bytes[self.offset..]
    }

    /// Move the cursor forward by `n` bytes, returning where it was
    pub fn advance(&mut self, n: usize) -> Result<usize> {
        let start = self.offset;
        match start.checked_add(n) {
            Some(end) if end <= self.bytes.len() => {
                self.offset = end;
                Ok(start)
            }
            _ => Err(self.truncated(n)),
        }
    }

    /// Consume the next `n` bytes and return them
    #[inline]
    pub fn take(&mut self, n: usize) -> Result<&[u8]> {
        let start = self.advance(n)?;
        Ok(&self.bytes[start..start + n])
    }

    /// Consume exactly `N` bytes into an array
    #[inline]
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Consume one byte
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8> {
        let start = self.advance(1)?;
        Ok(self.bytes[start])
    }

    /// Bytes written so far, `[0, cursor)`
    pub fn written(&self) -> &[u8] {
        &self.bytes[..self.offset]
    }

    /// The whole backing storage regardless of cursor
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the buffer and return its storage
    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }

    /// Zero length and cursor, keeping the allocation
    pub fn reset(&mut self) {
        self.bytes.clear();
        self.offset = 0;
    }

    pub(crate) fn truncated(&self, needed: usize) -> Error {
        tracing::debug!(
            offset = self.offset,
            needed,
            available = self.bytes.len(),
            "read past end of buffer"
        );
        Error::Truncation {
            offset: self.offset,
            needed,
            available: self.bytes.len(),
        }
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<Buffer> for Vec<u8> {
    fn from(buffer: Buffer) -> Self {
        buffer.into_inner()
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.written()
    }
}
