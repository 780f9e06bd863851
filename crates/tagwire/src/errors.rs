//! Error types for Tagwire

/// Result type for Tagwire operations
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while encoding or decoding a buffer
///
/// Every decode error is fatal for the message being decoded: the partially
/// built value is dropped and the error is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A read would consume bytes past the end of the buffer
    #[error("read of {needed} bytes at offset {offset} exceeds buffer length {available}")]
    Truncation {
        /// Cursor position when the read was attempted
        offset: usize,
        /// Number of bytes the read required
        needed: usize,
        /// Total length of the buffer
        available: usize,
    },

    /// A varint kept its continuation bit set for more than five groups
    #[error("varint starting at offset {offset} is not terminated within 5 bytes")]
    MalformedVarint {
        /// Offset of the first byte of the varint
        offset: usize,
    },

    /// A tagged message carried a tag its type does not declare
    #[error("unknown field tag {tag} in message {message}")]
    UnknownField {
        /// Name of the message type being decoded
        message: &'static str,
        /// The offending tag
        tag: u32,
    },

    /// A wire enum carried an ordinal its type does not declare
    #[error("unknown value {value} for enum {enum_name}")]
    UnknownEnumValue {
        /// Name of the enum type being decoded
        enum_name: &'static str,
        /// The offending ordinal
        value: u32,
    },

    /// Invalid UTF-8 in a length-prefixed string
    #[error("invalid UTF-8 string")]
    InvalidUtf8,

    /// The cursor was moved outside the buffer
    #[error("position {position} is outside buffer of length {len}")]
    InvalidPosition {
        /// Requested cursor position
        position: usize,
        /// Length of the buffer
        len: usize,
    },

    /// Custom error raised by message encode/decode code
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Build an [`Error::Custom`] from anything printable
    pub fn custom(msg: impl core::fmt::Display) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(_: core::str::Utf8Error) -> Self {
        Error::InvalidUtf8
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Error::InvalidUtf8
    }
}
