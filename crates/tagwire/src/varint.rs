//! Variable-length integers
//!
//! Unsigned values are split into 7-bit groups, least significant group
//! first. Every byte but the last has its high bit set. A `u32` needs at most
//! five groups; a decoder that has consumed five continuation bytes gives up
//! with [`Error::MalformedVarint`] instead of reading on.
//!
//! Signed values are zigzag-mapped onto the unsigned form so that small
//! negative numbers stay as short as small positive ones:
//! `0 → 0, -1 → 1, 1 → 2, -2 → 3, ...`

use crate::{
    buffer::Buffer,
    errors::{Error, Result},
};

/// Maximum encoded size of a 32-bit varint
pub const MAX_VARINT_LEN: usize = 5;

const CONTINUATION: u8 = 0x80;
const GROUP_MASK: u8 = 0x7F;
const MAX_SHIFT: u32 = 7 * MAX_VARINT_LEN as u32;

/// Map a signed value onto the unsigned varint space
#[inline]
pub const fn zigzag_encode(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`zigzag_encode`]
#[inline]
pub const fn zigzag_decode(encoded: u32) -> i32 {
    let half = (encoded >> 1) as i32;
    if encoded & 1 != 0 {
        !half
    } else {
        half
    }
}

/// Number of bytes `value` occupies as a varint
pub const fn var_uint_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0x0FFF_FFFF => 4,
        _ => 5,
    }
}

impl Buffer {
    /// Write an unsigned varint
    pub fn write_var_uint(&mut self, mut value: u32) {
        loop {
            let group = (value as u8) & GROUP_MASK;
            value >>= 7;
            if value == 0 {
                self.write_byte(group);
                return;
            }
            self.write_byte(group | CONTINUATION);
        }
    }

    /// Read an unsigned varint
    pub fn read_var_uint(&mut self) -> Result<u32> {
        let start = self.position();
        let mut value = 0u32;
        let mut shift = 0u32;
        loop {
            let byte = self.read_byte()?;
            value |= u32::from(byte & GROUP_MASK) << shift;
            shift += 7;
            if byte & CONTINUATION == 0 {
                return Ok(value);
            }
            if shift >= MAX_SHIFT {
                tracing::debug!(offset = start, "unterminated varint");
                return Err(Error::MalformedVarint { offset: start });
            }
        }
    }

    /// Write a zigzag-encoded signed varint
    pub fn write_var_int(&mut self, value: i32) {
        self.write_var_uint(zigzag_encode(value));
    }

    /// Read a zigzag-encoded signed varint
    pub fn read_var_int(&mut self) -> Result<i32> {
        self.read_var_uint().map(zigzag_decode)
    }

    /// Write a length or count as a varint
    ///
    /// Lengths beyond `u32::MAX` cannot be represented on the wire; callers
    /// hold collections well below that.
    pub(crate) fn write_len(&mut self, len: usize) {
        debug_assert!(u32::try_from(len).is_ok(), "length {len} exceeds u32");
        self.write_var_uint(len as u32);
    }

    /// Read a varint length or count
    pub(crate) fn read_len(&mut self) -> Result<usize> {
        self.read_var_uint().map(|len| len as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_var_int(value: i32) -> Vec<u8> {
        let mut buf = Buffer::new();
        buf.write_var_int(value);
        buf.into_inner()
    }

    fn encode_var_uint(value: u32) -> Vec<u8> {
        let mut buf = Buffer::new();
        buf.write_var_uint(value);
        buf.into_inner()
    }

    #[test]
    fn test_zigzag_table() {
        let cases: &[(i32, &[u8])] = &[
            (0, &[0]),
            (-1, &[1]),
            (1, &[2]),
            (-2, &[3]),
            (2, &[4]),
            (-64, &[127]),
            (64, &[128, 1]),
            (128, &[128, 2]),
            (-129, &[129, 2]),
            (-65535, &[253, 255, 7]),
            (65535, &[254, 255, 7]),
            (-2147483647, &[253, 255, 255, 255, 15]),
            (2147483647, &[254, 255, 255, 255, 15]),
            (-2147483648, &[255, 255, 255, 255, 15]),
        ];
        for (value, expected) in cases {
            assert_eq!(encode_var_int(*value), *expected, "encoding {value}");
            let mut buf = Buffer::from_slice(expected);
            assert_eq!(buf.read_var_int().unwrap(), *value, "decoding {value}");
        }
    }

    #[test]
    fn test_unsigned_table() {
        let cases: &[(u32, &[u8])] = &[
            (0, &[0]),
            (1, &[1]),
            (127, &[127]),
            (128, &[128, 1]),
            (129, &[129, 1]),
            (256, &[128, 2]),
            (257, &[129, 2]),
            (131069, &[253, 255, 7]),
            (131070, &[254, 255, 7]),
            (4294967293, &[253, 255, 255, 255, 15]),
            (4294967294, &[254, 255, 255, 255, 15]),
            (4294967295, &[255, 255, 255, 255, 15]),
        ];
        for (value, expected) in cases {
            assert_eq!(encode_var_uint(*value), *expected, "encoding {value}");
            assert_eq!(var_uint_len(*value), expected.len());
            let mut buf = Buffer::from_slice(expected);
            assert_eq!(buf.read_var_uint().unwrap(), *value, "decoding {value}");
        }
    }

    #[test]
    fn test_non_canonical_decodes() -> Result<()> {
        let mut buf = Buffer::from_slice(&[128, 0]);
        assert_eq!(buf.read_var_uint()?, 0);
        let mut buf = Buffer::from_slice(&[129, 0]);
        assert_eq!(buf.read_var_int()?, -1);
        Ok(())
    }

    #[test]
    fn test_truncated_varint() {
        for n in 1..MAX_VARINT_LEN {
            let mut buf = Buffer::from_bytes(vec![0x80; n]);
            assert!(
                matches!(buf.read_var_uint(), Err(Error::Truncation { .. })),
                "{n} continuation bytes"
            );
        }
        let mut buf = Buffer::new();
        assert!(matches!(
            buf.read_var_uint(),
            Err(Error::Truncation { offset: 0, .. })
        ));
    }

    #[test]
    fn test_unterminated_varint_is_malformed() {
        let mut buf = Buffer::from_slice(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]);
        assert_eq!(
            buf.read_var_uint(),
            Err(Error::MalformedVarint { offset: 0 })
        );

        let mut buf = Buffer::from_slice(&[0x00, 0x80, 0x80, 0x80, 0x80, 0x80]);
        assert_eq!(buf.read_var_uint(), Ok(0));
        assert_eq!(
            buf.read_var_uint(),
            Err(Error::MalformedVarint { offset: 1 })
        );
    }

    #[test]
    fn test_sequential_reads() -> Result<()> {
        let mut buf = Buffer::new();
        buf.write_u16(510);
        buf.write_var_uint(1);
        buf.write_var_uint(129);
        buf.write_var_uint(512);
        buf.rewind();

        assert_eq!(buf.read_u16()?, 510);
        assert_eq!(buf.read_var_uint()?, 1);
        assert_eq!(buf.read_var_uint()?, 129);
        assert_eq!(buf.read_var_uint()?, 512);
        Ok(())
    }

    mod properties {
        use crate::buffer::Buffer;
        use crate::varint::{var_uint_len, zigzag_decode, zigzag_encode, MAX_VARINT_LEN};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn var_uint_roundtrip(value in any::<u32>()) {
                let mut buf = Buffer::new();
                buf.write_var_uint(value);
                prop_assert!(buf.len() <= MAX_VARINT_LEN);
                prop_assert_eq!(buf.len(), var_uint_len(value));
                buf.rewind();
                prop_assert_eq!(buf.read_var_uint().unwrap(), value);
                prop_assert_eq!(buf.remaining(), 0);
            }

            #[test]
            fn var_int_roundtrip(value in any::<i32>()) {
                prop_assert_eq!(zigzag_decode(zigzag_encode(value)), value);
                let mut buf = Buffer::new();
                buf.write_var_int(value);
                buf.rewind();
                prop_assert_eq!(buf.read_var_int().unwrap(), value);
            }
        }
    }
}
