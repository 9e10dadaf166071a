use thiserror::Error;

/// Errors that can occur while reading wire bytes back
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// The reader ran out of bytes in the middle of a value
    #[error("Unexpected end of buffer: needed {needed} more byte(s) at offset {offset}")]
    UnexpectedEnd { offset: usize, needed: usize },

    /// A VarInt kept its continuation bit set past the 5-byte limit
    #[error("VarInt is longer than {max_bytes} bytes")]
    VarIntTooLong { max_bytes: usize },

    /// A string length prefix was negative or longer than the protocol allows
    #[error("Invalid string length {length} (maximum {max})")]
    InvalidStringLength { length: i32, max: usize },

    /// String payload was not valid UTF-8
    #[error("String payload at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    /// An enum field held a value with no matching variant
    #[error("Invalid {name} ordinal {ordinal}")]
    InvalidOrdinal { name: &'static str, ordinal: i32 },
}
