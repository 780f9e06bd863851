//! Compact float encodings
//!
//! `VarFloat` rotates the IEEE-754 bits so the exponent lands in the first
//! byte. A zero exponent (zero and denormals) is sent as a single `0x00`;
//! anything else takes the full four bytes.
//!
//! The low-precision form keeps three decimal places and ships the scaled
//! value as a zigzag varint.

use crate::{buffer::Buffer, errors::Result};

/// Scale applied by the low-precision float encoding
pub const LOW_PRECISION_SCALE: f64 = 1000.0;

impl Buffer {
    /// Write an `f32` with the exponent byte first
    pub fn write_var_float(&mut self, value: f32) {
        let bits = value.to_bits().rotate_left(9);
        if bits & 0xFF == 0 {
            self.write_byte(0);
            return;
        }
        self.append(&bits.to_le_bytes());
    }

    /// Read a value written by [`Buffer::write_var_float`]
    pub fn read_var_float(&mut self) -> Result<f32> {
        match self.peek_remaining().first().copied() {
            None => Err(self.truncated(1)),
            Some(0) => {
                self.advance(1)?;
                Ok(0.0)
            }
            Some(_) => {
                let bits = u32::from_le_bytes(self.take_array()?);
                Ok(f32::from_bits(bits.rotate_right(9)))
            }
        }
    }

    /// Write a float rounded to three decimal places
    ///
    /// Values outside `i32::MAX / 1000` saturate.
    pub fn write_low_precision_float(&mut self, value: f32) {
        let scaled = (f64::from(value) * LOW_PRECISION_SCALE).round() as i32;
        self.write_var_int(scaled);
    }

    /// Read a value written by [`Buffer::write_low_precision_float`]
    pub fn read_low_precision_float(&mut self) -> Result<f32> {
        let scaled = self.read_var_int()?;
        Ok((f64::from(scaled) / LOW_PRECISION_SCALE) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_var_float_zero_is_one_byte() {
        let mut buf = Buffer::new();
        buf.write_var_float(0.0);
        buf.write_var_float(-0.0);
        assert_eq!(buf.written(), &[0, 0]);
    }

    #[test]
    fn test_var_float_exponent_first() {
        let mut buf = Buffer::new();
        buf.write_var_float(1.0);
        // 1.0 has exponent 127, which becomes the leading byte
        assert_eq!(buf.written(), &[127, 0, 0, 0]);
    }

    #[test]
    fn test_var_float_roundtrip() -> Result<()> {
        let values = [1.0f32, -1.5, 3.25e10, f32::MAX, f32::MIN_POSITIVE, -0.001];
        let mut buf = Buffer::new();
        for v in values {
            buf.write_var_float(v);
        }
        buf.rewind();
        for v in values {
            assert_eq!(buf.read_var_float()?, v);
        }
        Ok(())
    }

    #[test]
    fn test_var_float_truncated() {
        let mut buf = Buffer::from_slice(&[127, 0]);
        assert!(matches!(
            buf.read_var_float(),
            Err(Error::Truncation { needed: 4, .. })
        ));
        let mut buf = Buffer::new();
        assert!(matches!(
            buf.read_var_float(),
            Err(Error::Truncation { needed: 1, .. })
        ));
    }

    #[test]
    fn test_low_precision_float() -> Result<()> {
        let mut buf = Buffer::new();
        buf.write_low_precision_float(1.2345);
        buf.write_low_precision_float(-0.5);
        // 1235 zigzags to 2470
        assert_eq!(&buf.written()[..2], &[0xA6, 0x13]);
        buf.rewind();
        assert!((buf.read_low_precision_float()? - 1.235).abs() < 1e-6);
        assert_eq!(buf.read_low_precision_float()?, -0.5);
        Ok(())
    }
}
