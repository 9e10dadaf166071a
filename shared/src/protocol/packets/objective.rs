use sidebar_serde::{ByteReader, ByteWrite, Serde, SerdeErr, VarInt};

use crate::protocol::generation::ProtocolGeneration;

use super::{read_string, write_str, WireFields};

/// How score values are rendered next to the rows
pub const INTEGER_RENDER_TYPE: &str = "integer";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectiveMode {
    Create,
    Remove,
    Update,
}

impl ObjectiveMode {
    pub fn ordinal(self) -> u8 {
        match self {
            ObjectiveMode::Create => 0,
            ObjectiveMode::Remove => 1,
            ObjectiveMode::Update => 2,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Result<Self, SerdeErr> {
        match ordinal {
            0 => Ok(ObjectiveMode::Create),
            1 => Ok(ObjectiveMode::Remove),
            2 => Ok(ObjectiveMode::Update),
            _ => Err(SerdeErr::InvalidOrdinal {
                name: "objective mode",
                ordinal: i32::from(ordinal),
            }),
        }
    }

    /// Create and update carry the title, remove does not
    pub fn has_title(self) -> bool {
        self != ObjectiveMode::Remove
    }
}

/// Before 1.8: title precedes the mode and is always present
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyObjective {
    pub name: String,
    pub title: String,
    pub mode: ObjectiveMode,
}

impl WireFields for LegacyObjective {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.name, writer);
        write_str(&self.title, writer);
        self.mode.ordinal().ser(writer);
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let name = read_string(reader)?;
        let title = read_string(reader)?;
        let mode = ObjectiveMode::from_ordinal(u8::de(reader)?)?;
        Ok(Self { name, title, mode })
    }
}

/// 1.8 to 1.12: plain title and render type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modern8Objective {
    pub name: String,
    pub mode: ObjectiveMode,
    pub title: String,
}

impl WireFields for Modern8Objective {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.name, writer);
        self.mode.ordinal().ser(writer);
        if self.mode.has_title() {
            write_str(&self.title, writer);
            write_str(INTEGER_RENDER_TYPE, writer);
        }
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let name = read_string(reader)?;
        let mode = ObjectiveMode::from_ordinal(u8::de(reader)?)?;
        let mut title = String::new();
        if mode.has_title() {
            title = read_string(reader)?;
            read_string(reader)?;
        }
        Ok(Self { name, mode, title })
    }
}

/// 1.13 onwards: chat title and an enum render type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatObjective {
    pub name: String,
    pub mode: ObjectiveMode,
    /// Chat JSON
    pub title: String,
}

impl WireFields for ChatObjective {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.name, writer);
        self.mode.ordinal().ser(writer);
        if self.mode.has_title() {
            write_str(&self.title, writer);
            // integer
            VarInt(0).ser(writer);
        }
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let name = read_string(reader)?;
        let mode = ObjectiveMode::from_ordinal(u8::de(reader)?)?;
        let mut title = String::new();
        if mode.has_title() {
            title = read_string(reader)?;
            VarInt::de(reader)?;
        }
        Ok(Self { name, mode, title })
    }
}

/// Creates, retitles or removes the board's objective
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjectivePacket {
    Legacy(LegacyObjective),
    Modern8(Modern8Objective),
    Modern13(ChatObjective),
}

impl ObjectivePacket {
    pub fn name(&self) -> &str {
        match self {
            ObjectivePacket::Legacy(packet) => &packet.name,
            ObjectivePacket::Modern8(packet) => &packet.name,
            ObjectivePacket::Modern13(packet) => &packet.name,
        }
    }

    pub fn mode(&self) -> ObjectiveMode {
        match self {
            ObjectivePacket::Legacy(packet) => packet.mode,
            ObjectivePacket::Modern8(packet) => packet.mode,
            ObjectivePacket::Modern13(packet) => packet.mode,
        }
    }

    /// Section-coded title, or chat JSON from 1.13
    pub fn title(&self) -> &str {
        match self {
            ObjectivePacket::Legacy(packet) => &packet.title,
            ObjectivePacket::Modern8(packet) => &packet.title,
            ObjectivePacket::Modern13(packet) => &packet.title,
        }
    }

    pub fn write(&self, writer: &mut dyn ByteWrite) {
        match self {
            ObjectivePacket::Legacy(packet) => packet.write(writer),
            ObjectivePacket::Modern8(packet) => packet.write(writer),
            ObjectivePacket::Modern13(packet) => packet.write(writer),
        }
    }

    pub fn read(generation: ProtocolGeneration, reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(match generation {
            ProtocolGeneration::Legacy => ObjectivePacket::Legacy(LegacyObjective::read(reader)?),
            ProtocolGeneration::Modern8 => ObjectivePacket::Modern8(Modern8Objective::read(reader)?),
            ProtocolGeneration::Modern13 | ProtocolGeneration::Modern17 => {
                ObjectivePacket::Modern13(ChatObjective::read(reader)?)
            }
        })
    }
}
