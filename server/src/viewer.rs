use std::fmt;

use sidebar_shared::EncodedPacket;

use crate::error::TransportError;

/// Identifies a viewer for the lifetime of their connection
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct ViewerId(u64);

impl ViewerId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The remote client a board is shown to.
///
/// Implemented by the host's connection layer. Delivery must be reliable
/// and ordered per viewer; `send` never waits for an acknowledgment.
pub trait Viewer: Send + Sync {
    fn id(&self) -> ViewerId;

    /// Display name used in logs and errors
    fn name(&self) -> &str;

    /// Sends to a viewer that is not connected are skipped
    fn is_connected(&self) -> bool;

    fn send(&self, packet: &EncodedPacket) -> Result<(), TransportError>;
}
