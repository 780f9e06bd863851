//! Wire enums and their static name tables
//!
//! On the wire an enum is only its ordinal. Names exist for text
//! interchange and live in a `'static` table that is built at compile time
//! and never touched by the binary codecs.

use crate::{
    buffer::Buffer,
    errors::{Error, Result},
};

/// Immutable ordinal/name table for an enum
#[derive(Debug, Clone, Copy)]
pub struct EnumNames {
    entries: &'static [(u32, &'static str)],
}

impl EnumNames {
    /// Build a table from `(ordinal, name)` pairs
    pub const fn new(entries: &'static [(u32, &'static str)]) -> Self {
        Self { entries }
    }

    /// Name for `ordinal`, if declared
    pub fn name(&self, ordinal: u32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(value, _)| *value == ordinal)
            .map(|(_, name)| *name)
    }

    /// Ordinal for `name`, if declared
    pub fn ordinal(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(value, _)| *value)
    }

    /// All declared `(ordinal, name)` pairs
    pub fn entries(&self) -> &'static [(u32, &'static str)] {
        self.entries
    }
}

/// An enum carried on the wire by ordinal
pub trait WireEnum: Copy + Sized {
    /// Type name used in errors
    const NAME: &'static str;

    /// Name table for text interchange
    const NAMES: EnumNames;

    /// Wire ordinal of this variant
    fn ordinal(self) -> u32;

    /// Variant for `ordinal`, if declared
    fn from_ordinal(ordinal: u32) -> Option<Self>;

    /// Symbolic name of this variant
    fn name(self) -> Option<&'static str> {
        Self::NAMES.name(self.ordinal())
    }

    /// Variant for a symbolic name
    fn from_name(name: &str) -> Option<Self> {
        Self::NAMES.ordinal(name).and_then(Self::from_ordinal)
    }
}

impl Buffer {
    /// Write an enum ordinal as a varint
    pub fn write_enum<E: WireEnum>(&mut self, value: E) {
        self.write_var_uint(value.ordinal());
    }

    /// Read an enum ordinal written by [`Buffer::write_enum`]
    pub fn read_enum<E: WireEnum>(&mut self) -> Result<E> {
        let value = self.read_var_uint()?;
        E::from_ordinal(value).ok_or_else(|| {
            tracing::debug!(enum_name = E::NAME, value, "unknown enum value");
            Error::UnknownEnumValue {
                enum_name: E::NAME,
                value,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Color {
        Red = 1,
        Green = 2,
        Blue = 40,
    }

    impl WireEnum for Color {
        const NAME: &'static str = "Color";
        const NAMES: EnumNames =
            EnumNames::new(&[(1, "Red"), (2, "Green"), (40, "Blue")]);

        fn ordinal(self) -> u32 {
            self as u32
        }

        fn from_ordinal(ordinal: u32) -> Option<Self> {
            match ordinal {
                1 => Some(Color::Red),
                2 => Some(Color::Green),
                40 => Some(Color::Blue),
                _ => None,
            }
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Color::Blue.name(), Some("Blue"));
        assert_eq!(Color::from_name("Green"), Some(Color::Green));
        assert_eq!(Color::from_name("Purple"), None);
        assert_eq!(Color::NAMES.entries().len(), 3);
    }

    #[test]
    fn test_enum_roundtrip() -> Result<()> {
        let mut buf = Buffer::new();
        buf.write_enum(Color::Blue);
        buf.write_enum(Color::Red);
        assert_eq!(buf.written(), &[40, 1]);
        buf.rewind();
        assert_eq!(buf.read_enum::<Color>()?, Color::Blue);
        assert_eq!(buf.read_enum::<Color>()?, Color::Red);
        Ok(())
    }

    #[test]
    fn test_unknown_enum_value() {
        let mut buf = Buffer::from_slice(&[3]);
        assert_eq!(
            buf.read_enum::<Color>(),
            Err(Error::UnknownEnumValue {
                enum_name: "Color",
                value: 3
            })
        );
    }
}
