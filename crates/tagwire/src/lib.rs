//! Tagwire - compact binary serialization runtime
//!
//! This crate provides the runtime that schema-generated message types encode
//! into and decode from:
//! - A growable [`Buffer`] with a single read/write cursor
//! - Fixed-width little-endian integers, floats and booleans
//! - Variable-length integers with zigzag mapping for signed values
//! - Byte arrays, typed arrays and two string encodings
//! - The [`Encode`]/[`Decode`] contract and the tagged-field message protocol
//!
//! # Quick Start
//!
//! ```rust
//! use tagwire::Buffer;
//!
//! // Serialize
//! let mut buf = Buffer::new();
//! buf.write_var_int(-129);
//! buf.write_string("hello");
//! buf.write_array(&[1i32, -1, 1000]);
//!
//! // Deserialize
//! let mut buf = Buffer::from_bytes(buf.into_inner());
//! assert_eq!(buf.read_var_int()?, -129);
//! assert_eq!(buf.read_str()?, "hello");
//! assert_eq!(buf.read_array::<i32>()?, [1, -1, 1000]);
//! # Ok::<(), tagwire::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod array;
mod buffer;
mod enums;
mod errors;
mod float;
mod message;
mod pool;
mod primitives;
mod strings;
mod varint;

pub use array::encoded_array_len;
pub use buffer::Buffer;
pub use enums::{EnumNames, WireEnum};
pub use errors::{Error, Result};
pub use message::{from_bytes, to_bytes, Decode, Encode, TaggedReader, TaggedWriter};
pub use pool::{BufferPool, PoolConfig};
pub use primitives::FixedWidth;
pub use varint::{var_uint_len, zigzag_decode, zigzag_encode};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        buffer::Buffer,
        enums::{EnumNames, WireEnum},
        errors::{Error, Result},
        message::{Decode, Encode, TaggedReader, TaggedWriter},
        primitives::FixedWidth,
    };
}

/// Core constants for the Tagwire format
pub mod constants {
    /// Tag value that terminates a tagged message
    pub use crate::message::END_OF_MESSAGE;

    /// Maximum encoded size of a 32-bit varint
    pub use crate::varint::MAX_VARINT_LEN;

    /// Scale applied by the low-precision float encoding
    pub use crate::float::LOW_PRECISION_SCALE;
}
