//! Message encode/decode contract and the tagged-field protocol
//!
//! Two message shapes exist and the schema decides which one a type uses:
//!
//! * **Records** encode every field in declaration order with no tags. They
//!   implement [`Encode`]/[`Decode`] by calling the codecs directly.
//! * **Tagged messages** carry optional fields. Each present field is written
//!   as `varint tag, payload`; absent fields are skipped; the message ends with
//!   tag `0`. Decoders accept fields in any order and reject tags they do not
//!   declare. Use [`TaggedWriter`] and [`TaggedReader`] to implement them.
//!
//! ```rust
//! use tagwire::{Buffer, Decode, Encode, Result, TaggedReader, TaggedWriter};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Ping {
//!     seq: Option<u32>,
//!     note: Option<String>,
//! }
//!
//! impl Encode for Ping {
//!     fn encode(&self, buf: &mut Buffer) -> Result<()> {
//!         let mut fields = TaggedWriter::new(buf);
//!         fields.field(1, self.seq.as_ref(), |b, v| b.write_var_uint(*v));
//!         fields.field(2, self.note.as_ref(), |b, v| b.write_string(v));
//!         fields.finish();
//!         Ok(())
//!     }
//! }
//!
//! impl Decode for Ping {
//!     fn decode(buf: &mut Buffer) -> Result<Self> {
//!         let mut result = Ping::default();
//!         let mut fields = TaggedReader::new(buf, "Ping");
//!         while let Some(tag) = fields.next_tag()? {
//!             match tag {
//!                 1 => result.seq = Some(fields.buffer().read_var_uint()?),
//!                 2 => result.note = Some(fields.buffer().read_string()?),
//!                 _ => return Err(fields.unknown_field(tag)),
//!             }
//!         }
//!         Ok(result)
//!     }
//! }
//!
//! let ping = Ping { seq: Some(7), note: None };
//! let bytes = tagwire::to_bytes(&ping)?;
//! assert_eq!(bytes, [1, 7, 0]);
//! assert_eq!(tagwire::from_bytes::<Ping>(&bytes)?, ping);
//! # Ok::<(), tagwire::Error>(())
//! ```

use crate::{
    buffer::Buffer,
    errors::{Error, Result},
};

/// Tag value that terminates a tagged message
pub const END_OF_MESSAGE: u32 = 0;

/// Types that can be written to a [`Buffer`]
pub trait Encode {
    /// Append the encoding of `self`
    fn encode(&self, buf: &mut Buffer) -> Result<()>;
}

/// Types that can be read back from a [`Buffer`]
pub trait Decode: Sized {
    /// Decode a value starting at the cursor
    fn decode(buf: &mut Buffer) -> Result<Self>;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        (**self).encode(buf)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode(&self, buf: &mut Buffer) -> Result<()> {
        (**self).encode(buf)
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode(buf: &mut Buffer) -> Result<Self> {
        T::decode(buf).map(Box::new)
    }
}

/// Encode `value` into a fresh byte vector
pub fn to_bytes<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Buffer::new();
    value.encode(&mut buf)?;
    Ok(buf.into_inner())
}

/// Decode a `T` from the start of `bytes`
pub fn from_bytes<T: Decode>(bytes: &[u8]) -> Result<T> {
    T::decode(&mut Buffer::from_slice(bytes))
}

impl Buffer {
    /// Write a nested message or record
    pub fn write_message<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.encode(self)
    }

    /// Read a nested message or record
    pub fn read_message<T: Decode>(&mut self) -> Result<T> {
        T::decode(self)
    }

    /// Write a count followed by each element's encoding
    pub fn write_messages<T: Encode>(&mut self, values: &[T]) -> Result<()> {
        self.write_len(values.len());
        for value in values {
            value.encode(self)?;
        }
        Ok(())
    }

    /// Read a sequence written by [`Buffer::write_messages`]
    pub fn read_messages<T: Decode>(&mut self) -> Result<Vec<T>> {
        let count = self.read_len()?;
        let mut out = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            out.push(T::decode(self)?);
        }
        Ok(out)
    }
}

/// Writes the optional fields of a tagged message
///
/// Call the field methods in declaration order, then [`TaggedWriter::finish`]
/// to emit the terminating tag. The terminator is written even when no field
/// is present.
#[must_use = "a tagged message is unterminated until `finish` is called"]
#[derive(Debug)]
pub struct TaggedWriter<'a> {
    buf: &'a mut Buffer,
}

impl<'a> TaggedWriter<'a> {
    /// Start a tagged message at the buffer's cursor
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    /// Write `tag` and the scalar payload if `value` is present
    pub fn field<T: ?Sized>(
        &mut self,
        tag: u32,
        value: Option<&T>,
        write: impl FnOnce(&mut Buffer, &T),
    ) -> &mut Self {
        if let Some(value) = value {
            self.tag(tag);
            write(self.buf, value);
        }
        self
    }

    /// Write `tag` and a payload whose encoding can fail
    pub fn try_field<T: ?Sized>(
        &mut self,
        tag: u32,
        value: Option<&T>,
        write: impl FnOnce(&mut Buffer, &T) -> Result<()>,
    ) -> Result<&mut Self> {
        if let Some(value) = value {
            self.tag(tag);
            write(self.buf, value)?;
        }
        Ok(self)
    }

    /// Write `tag` and a nested message if present
    pub fn message<T: Encode + ?Sized>(&mut self, tag: u32, value: Option<&T>) -> Result<&mut Self> {
        self.try_field(tag, value, |buf, v| v.encode(buf))
    }

    /// Write `tag` and a count-prefixed sequence of messages if present
    pub fn messages<T: Encode>(&mut self, tag: u32, values: Option<&[T]>) -> Result<&mut Self> {
        self.try_field(tag, values, |buf, v| buf.write_messages(v))
    }

    /// Emit the terminating tag
    pub fn finish(self) {
        self.buf.write_var_uint(END_OF_MESSAGE);
    }

    fn tag(&mut self, tag: u32) {
        debug_assert_ne!(tag, END_OF_MESSAGE, "field tags start at 1");
        self.buf.write_var_uint(tag);
    }
}

/// Walks the tags of a tagged message
///
/// [`TaggedReader::next_tag`] yields each field tag until the terminator. The
/// caller decodes the payload through [`TaggedReader::buffer`] and turns any
/// tag it does not declare into [`TaggedReader::unknown_field`].
#[derive(Debug)]
pub struct TaggedReader<'a> {
    buf: &'a mut Buffer,
    message: &'static str,
}

impl<'a> TaggedReader<'a> {
    /// Start reading a tagged message of type `message`
    pub fn new(buf: &'a mut Buffer, message: &'static str) -> Self {
        Self { buf, message }
    }

    /// Next field tag, or `None` once the terminator is consumed
    pub fn next_tag(&mut self) -> Result<Option<u32>> {
        match self.buf.read_var_uint()? {
            END_OF_MESSAGE => Ok(None),
            tag => Ok(Some(tag)),
        }
    }

    /// The underlying buffer, positioned at the current field's payload
    pub fn buffer(&mut self) -> &mut Buffer {
        self.buf
    }

    /// Name of the message type being read
    pub fn message_name(&self) -> &'static str {
        self.message
    }

    /// Error for a tag the message type does not declare
    pub fn unknown_field(&self, tag: u32) -> Error {
        tracing::debug!(
            message = self.message,
            tag,
            offset = self.buf.position(),
            "unknown field tag"
        );
        Error::UnknownField {
            message: self.message,
            tag,
        }
    }
}
