use std::fmt;

use super::error::CapabilityError;

/// First protocol number of each generation
const MODERN8_PROTOCOL: i32 = 47;
const MODERN13_PROTOCOL: i32 = 393;
const MODERN17_PROTOCOL: i32 = 755;

/// Wire protocol tiers, each with its own packet layouts and limits.
///
/// Ordered: a later generation supports everything an earlier one does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtocolGeneration {
    /// Before 1.8: ordinal score actions, no team visibility/collision
    Legacy,
    /// 1.8 to 1.12: symbolic score actions, plain text fields
    Modern8,
    /// 1.13 to 1.16: chat components, no prefix/suffix limit
    Modern13,
    /// 1.17 and later: team parameters as a nested object
    Modern17,
}

impl ProtocolGeneration {
    pub const ALL: [ProtocolGeneration; 4] = [
        ProtocolGeneration::Legacy,
        ProtocolGeneration::Modern8,
        ProtocolGeneration::Modern13,
        ProtocolGeneration::Modern17,
    ];

    pub fn supports(self, other: ProtocolGeneration) -> bool {
        self >= other
    }

    pub fn from_protocol_version(version: i32) -> Result<Self, CapabilityError> {
        match version {
            v if v < 0 => Err(CapabilityError::UnsupportedProtocolVersion { version }),
            v if v < MODERN8_PROTOCOL => Ok(ProtocolGeneration::Legacy),
            v if v < MODERN13_PROTOCOL => Ok(ProtocolGeneration::Modern8),
            v if v < MODERN17_PROTOCOL => Ok(ProtocolGeneration::Modern13),
            _ => Ok(ProtocolGeneration::Modern17),
        }
    }

    /// The lowest protocol number in this generation
    pub fn first_protocol_version(self) -> i32 {
        match self {
            ProtocolGeneration::Legacy => 0,
            ProtocolGeneration::Modern8 => MODERN8_PROTOCOL,
            ProtocolGeneration::Modern13 => MODERN13_PROTOCOL,
            ProtocolGeneration::Modern17 => MODERN17_PROTOCOL,
        }
    }
}

impl fmt::Display for ProtocolGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProtocolGeneration::Legacy => "legacy",
            ProtocolGeneration::Modern8 => "1.8",
            ProtocolGeneration::Modern13 => "1.13",
            ProtocolGeneration::Modern17 => "1.17",
        };
        f.write_str(name)
    }
}
