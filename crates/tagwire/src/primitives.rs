//! Fixed-width little-endian primitives

use crate::{buffer::Buffer, errors::Result};

/// A value with a fixed little-endian wire width
///
/// Implemented for the 1, 2 and 4 byte integers and `f32`. Conversion always
/// goes through `to_le_bytes`/`from_le_bytes`, so the wire layout is the same
/// on every host.
pub trait FixedWidth: Copy + Sized {
    /// Width in bytes on the wire
    const WIDTH: usize;

    /// Append the little-endian bytes of `self`
    fn put(self, buf: &mut Buffer);

    /// Decode from exactly [`Self::WIDTH`] bytes
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_fixed_width {
    ($ty:ty, $width:expr) => {
        impl FixedWidth for $ty {
            const WIDTH: usize = $width;

            #[inline]
            fn put(self, buf: &mut Buffer) {
                buf.append(&self.to_le_bytes());
            }

            #[inline]
            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut raw = [0u8; $width];
                raw.copy_from_slice(bytes);
                <$ty>::from_le_bytes(raw)
            }
        }
    };
}

impl_fixed_width!(u8, 1);
impl_fixed_width!(i8, 1);
impl_fixed_width!(u16, 2);
impl_fixed_width!(i16, 2);
impl_fixed_width!(u32, 4);
impl_fixed_width!(i32, 4);
impl_fixed_width!(f32, 4);

impl Buffer {
    /// Write any fixed-width value
    #[inline]
    pub fn write_fixed<T: FixedWidth>(&mut self, value: T) {
        value.put(self);
    }

    /// Read any fixed-width value
    #[inline]
    pub fn read_fixed<T: FixedWidth>(&mut self) -> Result<T> {
        self.take(T::WIDTH).map(T::from_le_slice)
    }

    /// Write a bool as a single 0/1 byte
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.write_byte(u8::from(value));
    }

    /// Read a bool; any non-zero byte is `true`
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_byte()? >= 1)
    }

    /// Write a u8 value
    pub fn write_u8(&mut self, value: u8) {
        self.write_fixed(value);
    }

    /// Read a u8 value
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_fixed()
    }

    /// Write an i8 value
    pub fn write_i8(&mut self, value: i8) {
        self.write_fixed(value);
    }

    /// Read an i8 value
    pub fn read_i8(&mut self) -> Result<i8> {
        self.read_fixed()
    }

    /// Write a u16 value
    pub fn write_u16(&mut self, value: u16) {
        self.write_fixed(value);
    }

    /// Read a u16 value
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_fixed()
    }

    /// Write an i16 value
    pub fn write_i16(&mut self, value: i16) {
        self.write_fixed(value);
    }

    /// Read an i16 value
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_fixed()
    }

    /// Write a u32 value
    pub fn write_u32(&mut self, value: u32) {
        self.write_fixed(value);
    }

    /// Read a u32 value
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_fixed()
    }

    /// Write an i32 value
    pub fn write_i32(&mut self, value: i32) {
        self.write_fixed(value);
    }

    /// Read an i32 value
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_fixed()
    }

    /// Write an f32 value
    pub fn write_f32(&mut self, value: f32) {
        self.write_fixed(value);
    }

    /// Read an f32 value
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_fixed()
    }
}
