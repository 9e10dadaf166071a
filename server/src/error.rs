use sidebar_shared::{
    AnimationError, CapabilityError, ContentError, ContractError, EncodeError,
};
use thiserror::Error;

/// A packet could not be handed to the viewer's connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Viewer {viewer} is not connected")]
    Disconnected { viewer: String },

    #[error("Failed to send to viewer {viewer}: {reason}")]
    SendFailed { viewer: String, reason: String },
}

/// Error type of every session and server operation
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Failed to resolve protocol capabilities: {0}")]
    Capability(#[from] CapabilityError),

    #[error(transparent)]
    Animation(#[from] AnimationError),

    #[error("Failed to encode packet: {0}")]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A thread panicked while holding this lock
    #[error("The {what} lock is poisoned")]
    LockPoisoned { what: &'static str },

    /// The scheduler outlived the server it drives
    #[error("The board server has been dropped")]
    ServerDropped,

    /// The tick scheduler was started outside a tokio runtime
    #[error("No tokio runtime is available to drive the tick scheduler")]
    NoRuntime,
}
