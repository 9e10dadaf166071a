use sidebar_serde::{ByteReader, ByteWrite, Serde, SerdeErr, VarInt};

use crate::protocol::generation::ProtocolGeneration;

use super::{read_string, write_str, WireFields};

/// Name tag visibility and collision rule used by every row team
pub const ALWAYS: &str = "always";

/// Team color ordinal meaning "no color"
pub const RESET_COLOR: u8 = 21;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeamMode {
    Create,
    Remove,
    Update,
}

impl TeamMode {
    pub fn ordinal(self) -> u8 {
        match self {
            TeamMode::Create => 0,
            TeamMode::Remove => 1,
            TeamMode::Update => 2,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Result<Self, SerdeErr> {
        match ordinal {
            0 => Ok(TeamMode::Create),
            1 => Ok(TeamMode::Remove),
            2 => Ok(TeamMode::Update),
            _ => Err(SerdeErr::InvalidOrdinal {
                name: "team mode",
                ordinal: i32::from(ordinal),
            }),
        }
    }

    pub fn has_info(self) -> bool {
        self != TeamMode::Remove
    }

    /// Only creation adds the row token to the team
    pub fn has_members(self) -> bool {
        self == TeamMode::Create
    }
}

/// Before 1.8
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegacyTeam {
    pub name: String,
    pub mode: TeamMode,
    pub display: String,
    pub prefix: String,
    pub suffix: String,
    pub friendly_fire: u8,
    pub members: Vec<String>,
}

impl WireFields for LegacyTeam {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.name, writer);
        self.mode.ordinal().ser(writer);
        if self.mode.has_info() {
            write_str(&self.display, writer);
            write_str(&self.prefix, writer);
            write_str(&self.suffix, writer);
            self.friendly_fire.ser(writer);
        }
        if self.mode.has_members() {
            (self.members.len() as i16).ser(writer);
            for member in &self.members {
                write_str(member, writer);
            }
        }
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let name = read_string(reader)?;
        let mode = TeamMode::from_ordinal(u8::de(reader)?)?;
        let mut team = Self {
            name,
            mode,
            display: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            friendly_fire: 0,
            members: Vec::new(),
        };
        if mode.has_info() {
            team.display = read_string(reader)?;
            team.prefix = read_string(reader)?;
            team.suffix = read_string(reader)?;
            team.friendly_fire = u8::de(reader)?;
        }
        if mode.has_members() {
            let count = i16::de(reader)?;
            team.members = read_members(reader, i32::from(count))?;
        }
        Ok(team)
    }
}

/// 1.8 to 1.12: adds visibility, collision and color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modern8Team {
    pub name: String,
    pub mode: TeamMode,
    pub display: String,
    pub prefix: String,
    pub suffix: String,
    pub flags: u8,
    pub visibility: String,
    pub collision: String,
    pub color: u8,
    pub members: Vec<String>,
}

impl WireFields for Modern8Team {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.name, writer);
        self.mode.ordinal().ser(writer);
        if self.mode.has_info() {
            write_str(&self.display, writer);
            write_str(&self.prefix, writer);
            write_str(&self.suffix, writer);
            self.flags.ser(writer);
            write_str(&self.visibility, writer);
            write_str(&self.collision, writer);
            self.color.ser(writer);
        }
        if self.mode.has_members() {
            write_members(&self.members, writer);
        }
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let name = read_string(reader)?;
        let mode = TeamMode::from_ordinal(u8::de(reader)?)?;
        let mut team = Self {
            name,
            mode,
            display: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            flags: 0,
            visibility: String::new(),
            collision: String::new(),
            color: 0,
            members: Vec::new(),
        };
        if mode.has_info() {
            team.display = read_string(reader)?;
            team.prefix = read_string(reader)?;
            team.suffix = read_string(reader)?;
            team.flags = u8::de(reader)?;
            team.visibility = read_string(reader)?;
            team.collision = read_string(reader)?;
            team.color = u8::de(reader)?;
        }
        if mode.has_members() {
            let count = VarInt::de(reader)?.get();
            team.members = read_members(reader, count)?;
        }
        Ok(team)
    }
}

/// 1.13 to 1.16: chat display, prefix and suffix, written as flat fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modern13Team {
    pub name: String,
    pub mode: TeamMode,
    pub display: String,
    pub flags: u8,
    pub visibility: String,
    pub collision: String,
    pub color: i32,
    pub prefix: String,
    pub suffix: String,
    pub members: Vec<String>,
}

impl WireFields for Modern13Team {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.name, writer);
        self.mode.ordinal().ser(writer);
        if self.mode.has_info() {
            write_str(&self.display, writer);
            self.flags.ser(writer);
            write_str(&self.visibility, writer);
            write_str(&self.collision, writer);
            VarInt(self.color).ser(writer);
            write_str(&self.prefix, writer);
            write_str(&self.suffix, writer);
        }
        if self.mode.has_members() {
            write_members(&self.members, writer);
        }
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let name = read_string(reader)?;
        let mode = TeamMode::from_ordinal(u8::de(reader)?)?;
        let mut team = Self {
            name,
            mode,
            display: String::new(),
            flags: 0,
            visibility: String::new(),
            collision: String::new(),
            color: 0,
            prefix: String::new(),
            suffix: String::new(),
            members: Vec::new(),
        };
        if mode.has_info() {
            team.display = read_string(reader)?;
            team.flags = u8::de(reader)?;
            team.visibility = read_string(reader)?;
            team.collision = read_string(reader)?;
            team.color = VarInt::de(reader)?.get();
            team.prefix = read_string(reader)?;
            team.suffix = read_string(reader)?;
        }
        if mode.has_members() {
            let count = VarInt::de(reader)?.get();
            team.members = read_members(reader, count)?;
        }
        Ok(team)
    }
}

/// The team settings object carried by 1.17+ team packets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamParameters {
    pub display: String,
    pub flags: u8,
    pub visibility: String,
    pub collision: String,
    pub color: i32,
    pub prefix: String,
    pub suffix: String,
}

impl WireFields for TeamParameters {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.display, writer);
        self.flags.ser(writer);
        write_str(&self.visibility, writer);
        write_str(&self.collision, writer);
        VarInt(self.color).ser(writer);
        write_str(&self.prefix, writer);
        write_str(&self.suffix, writer);
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            display: read_string(reader)?,
            flags: u8::de(reader)?,
            visibility: read_string(reader)?,
            collision: read_string(reader)?,
            color: VarInt::de(reader)?.get(),
            prefix: read_string(reader)?,
            suffix: read_string(reader)?,
        })
    }
}

/// 1.17 onwards: settings travel as an optional [`TeamParameters`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modern17Team {
    pub name: String,
    pub mode: TeamMode,
    pub parameters: Option<TeamParameters>,
    pub members: Vec<String>,
}

impl WireFields for Modern17Team {
    fn write(&self, writer: &mut dyn ByteWrite) {
        write_str(&self.name, writer);
        self.mode.ordinal().ser(writer);
        if let Some(parameters) = &self.parameters {
            parameters.write(writer);
        }
        if self.mode.has_members() {
            write_members(&self.members, writer);
        }
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let name = read_string(reader)?;
        let mode = TeamMode::from_ordinal(u8::de(reader)?)?;
        let parameters = if mode.has_info() {
            Some(TeamParameters::read(reader)?)
        } else {
            None
        };
        let members = if mode.has_members() {
            let count = VarInt::de(reader)?.get();
            read_members(reader, count)?
        } else {
            Vec::new()
        };
        Ok(Self {
            name,
            mode,
            parameters,
            members,
        })
    }
}

/// Creates, updates or removes the team that renders one row
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamPacket {
    Legacy(LegacyTeam),
    Modern8(Modern8Team),
    Modern13(Modern13Team),
    Modern17(Modern17Team),
}

impl TeamPacket {
    pub fn name(&self) -> &str {
        match self {
            TeamPacket::Legacy(packet) => &packet.name,
            TeamPacket::Modern8(packet) => &packet.name,
            TeamPacket::Modern13(packet) => &packet.name,
            TeamPacket::Modern17(packet) => &packet.name,
        }
    }

    pub fn mode(&self) -> TeamMode {
        match self {
            TeamPacket::Legacy(packet) => packet.mode,
            TeamPacket::Modern8(packet) => packet.mode,
            TeamPacket::Modern13(packet) => packet.mode,
            TeamPacket::Modern17(packet) => packet.mode,
        }
    }

    /// Prefix and suffix, absent on removal. Chat JSON from 1.13.
    pub fn affixes(&self) -> Option<(&str, &str)> {
        if !self.mode().has_info() {
            return None;
        }
        match self {
            TeamPacket::Legacy(packet) => Some((&packet.prefix, &packet.suffix)),
            TeamPacket::Modern8(packet) => Some((&packet.prefix, &packet.suffix)),
            TeamPacket::Modern13(packet) => Some((&packet.prefix, &packet.suffix)),
            TeamPacket::Modern17(packet) => packet
                .parameters
                .as_ref()
                .map(|parameters| (parameters.prefix.as_str(), parameters.suffix.as_str())),
        }
    }

    pub fn members(&self) -> &[String] {
        match self {
            TeamPacket::Legacy(packet) => &packet.members,
            TeamPacket::Modern8(packet) => &packet.members,
            TeamPacket::Modern13(packet) => &packet.members,
            TeamPacket::Modern17(packet) => &packet.members,
        }
    }

    pub fn write(&self, writer: &mut dyn ByteWrite) {
        match self {
            TeamPacket::Legacy(packet) => packet.write(writer),
            TeamPacket::Modern8(packet) => packet.write(writer),
            TeamPacket::Modern13(packet) => packet.write(writer),
            TeamPacket::Modern17(packet) => packet.write(writer),
        }
    }

    pub fn read(generation: ProtocolGeneration, reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(match generation {
            ProtocolGeneration::Legacy => TeamPacket::Legacy(LegacyTeam::read(reader)?),
            ProtocolGeneration::Modern8 => TeamPacket::Modern8(Modern8Team::read(reader)?),
            ProtocolGeneration::Modern13 => TeamPacket::Modern13(Modern13Team::read(reader)?),
            ProtocolGeneration::Modern17 => TeamPacket::Modern17(Modern17Team::read(reader)?),
        })
    }
}

fn write_members(members: &[String], writer: &mut dyn ByteWrite) {
    VarInt(members.len() as i32).ser(writer);
    for member in members {
        write_str(member, writer);
    }
}

fn read_members(reader: &mut ByteReader, count: i32) -> Result<Vec<String>, SerdeErr> {
    if count < 0 {
        return Err(SerdeErr::InvalidOrdinal {
            name: "member count",
            ordinal: count,
        });
    }
    (0..count).map(|_| read_string(reader)).collect()
}
