use sidebar_serde::{ByteReader, ByteWrite, Serde, SerdeErr, VarInt};

use crate::protocol::generation::ProtocolGeneration;

use super::{read_string, write_str, WireFields};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreAction {
    Change,
    Remove,
}

impl ScoreAction {
    pub fn ordinal(self) -> u8 {
        match self {
            ScoreAction::Change => 0,
            ScoreAction::Remove => 1,
        }
    }

    pub fn from_ordinal(ordinal: i32) -> Result<Self, SerdeErr> {
        match ordinal {
            0 => Ok(ScoreAction::Change),
            1 => Ok(ScoreAction::Remove),
            _ => Err(SerdeErr::InvalidOrdinal {
                name: "score action",
                ordinal,
            }),
        }
    }
}

/// Before 1.8: ordinal action, objective and value only on change
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyScore {
    pub token: String,
    pub action: ScoreAction,
    pub objective: String,
    pub value: i32,
}

impl WireFields for LegacyScore {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.token, writer);
        self.action.ordinal().ser(writer);
        if self.action == ScoreAction::Change {
            write_str(&self.objective, writer);
            self.value.ser(writer);
        }
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let token = read_string(reader)?;
        let action = ScoreAction::from_ordinal(i32::from(u8::de(reader)?))?;
        let (objective, value) = match action {
            ScoreAction::Change => (read_string(reader)?, i32::de(reader)?),
            ScoreAction::Remove => (String::new(), 0),
        };
        Ok(Self {
            token,
            action,
            objective,
            value,
        })
    }
}

/// 1.8 to 1.12: the objective is always named, the value is a VarInt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modern8Score {
    pub token: String,
    pub action: ScoreAction,
    pub objective: String,
    pub value: i32,
}

impl WireFields for Modern8Score {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.token, writer);
        self.action.ordinal().ser(writer);
        write_str(&self.objective, writer);
        if self.action == ScoreAction::Change {
            VarInt(self.value).ser(writer);
        }
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let token = read_string(reader)?;
        let action = ScoreAction::from_ordinal(i32::from(u8::de(reader)?))?;
        let objective = read_string(reader)?;
        let value = match action {
            ScoreAction::Change => VarInt::de(reader)?.get(),
            ScoreAction::Remove => 0,
        };
        Ok(Self {
            token,
            action,
            objective,
            value,
        })
    }
}

/// 1.13 onwards: the action is a VarInt enum
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modern13Score {
    pub token: String,
    pub action: ScoreAction,
    pub objective: String,
    pub value: i32,
}

impl WireFields for Modern13Score {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.token, writer);
        VarInt(i32::from(self.action.ordinal())).ser(writer);
        write_str(&self.objective, writer);
        if self.action == ScoreAction::Change {
            VarInt(self.value).ser(writer);
        }
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let token = read_string(reader)?;
        let action = ScoreAction::from_ordinal(VarInt::de(reader)?.get())?;
        let objective = read_string(reader)?;
        let value = match action {
            ScoreAction::Change => VarInt::de(reader)?.get(),
            ScoreAction::Remove => 0,
        };
        Ok(Self {
            token,
            action,
            objective,
            value,
        })
    }
}

/// Sets or clears the score of a row token
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScorePacket {
    Legacy(LegacyScore),
    Modern8(Modern8Score),
    Modern13(Modern13Score),
}

impl ScorePacket {
    pub fn token(&self) -> &str {
        match self {
            ScorePacket::Legacy(packet) => &packet.token,
            ScorePacket::Modern8(packet) => &packet.token,
            ScorePacket::Modern13(packet) => &packet.token,
        }
    }

    pub fn action(&self) -> ScoreAction {
        match self {
            ScorePacket::Legacy(packet) => packet.action,
            ScorePacket::Modern8(packet) => packet.action,
            ScorePacket::Modern13(packet) => packet.action,
        }
    }

    /// Empty for legacy removals, which do not name the objective
    pub fn objective(&self) -> &str {
        match self {
            ScorePacket::Legacy(packet) => &packet.objective,
            ScorePacket::Modern8(packet) => &packet.objective,
            ScorePacket::Modern13(packet) => &packet.objective,
        }
    }

    /// Score value, `None` for removals
    pub fn value(&self) -> Option<i32> {
        let value = match self {
            ScorePacket::Legacy(packet) => packet.value,
            ScorePacket::Modern8(packet) => packet.value,
            ScorePacket::Modern13(packet) => packet.value,
        };
        (self.action() == ScoreAction::Change).then_some(value)
    }

    pub fn write(&self, writer: &mut dyn ByteWrite) {
        match self {
            ScorePacket::Legacy(packet) => packet.write(writer),
            ScorePacket::Modern8(packet) => packet.write(writer),
            ScorePacket::Modern13(packet) => packet.write(writer),
        }
    }

    pub fn read(generation: ProtocolGeneration, reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(match generation {
            ProtocolGeneration::Legacy => ScorePacket::Legacy(LegacyScore::read(reader)?),
            ProtocolGeneration::Modern8 => ScorePacket::Modern8(Modern8Score::read(reader)?),
            ProtocolGeneration::Modern13 | ProtocolGeneration::Modern17 => {
                ScorePacket::Modern13(Modern13Score::read(reader)?)
            }
        })
    }
}
