use sidebar_serde::SerdeErr;
use thiserror::Error;

/// Fatal at startup: no capability table can be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("Protocol version {version} is not supported")]
    UnsupportedProtocolVersion { version: i32 },
}

/// A single packet could not be encoded. The packet is dropped and the next
/// refresh re-sends the current state.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A field is longer than this generation accepts
    #[error("Field `{field}` is {length} characters long, the maximum is {max}")]
    FieldTooLong {
        field: &'static str,
        length: usize,
        max: usize,
    },

    /// Scores address row tokens, of which there are only 15
    #[error("Score {score} has no row token")]
    RowOutOfRange { score: usize },

    #[error("Failed to serialize chat component: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encoded bytes could not be read back into a packet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Packet id {id:#04x} is not a scoreboard packet")]
    UnknownPacketId { id: i32 },

    #[error("{remaining} unread byte(s) after packet")]
    TrailingBytes { remaining: usize },

    #[error(transparent)]
    Serde(#[from] SerdeErr),
}
