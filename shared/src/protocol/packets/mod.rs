//! Typed scoreboard packets, one struct per field layout.
//!
//! Each generation's layout is its own type, and the `*Packet` enums pick
//! between them, so building or reading a packet never consults a layout
//! table at runtime.

use sidebar_serde::{ByteReader, ByteWrite, Serde, SerdeErr, VarInt};

use super::generation::ProtocolGeneration;

mod display_objective;
mod objective;
mod score;
mod team;

pub use display_objective::{DisplayObjectivePacket, SIDEBAR_POSITION};
pub use objective::{
    ChatObjective, LegacyObjective, Modern8Objective, ObjectiveMode, ObjectivePacket,
    INTEGER_RENDER_TYPE,
};
pub use score::{LegacyScore, Modern13Score, Modern8Score, ScoreAction, ScorePacket};
pub use team::{
    LegacyTeam, Modern13Team, Modern17Team, Modern8Team, TeamMode, TeamPacket, TeamParameters,
    ALWAYS, RESET_COLOR,
};

/// Reading & writing of a packet's fields, without the packet id
pub trait WireFields: Sized {
    fn write(&self, writer: &mut dyn ByteWrite);

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacketKind {
    Objective,
    DisplayObjective,
    Score,
    Team,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Packet {
    Objective(ObjectivePacket),
    DisplayObjective(DisplayObjectivePacket),
    Score(ScorePacket),
    Team(TeamPacket),
}

impl Packet {
    pub fn kind(&self) -> PacketKind {
        match self {
            Packet::Objective(_) => PacketKind::Objective,
            Packet::DisplayObjective(_) => PacketKind::DisplayObjective,
            Packet::Score(_) => PacketKind::Score,
            Packet::Team(_) => PacketKind::Team,
        }
    }

    pub fn write(&self, writer: &mut dyn ByteWrite) {
        match self {
            Packet::Objective(packet) => packet.write(writer),
            Packet::DisplayObjective(packet) => packet.write(writer),
            Packet::Score(packet) => packet.write(writer),
            Packet::Team(packet) => packet.write(writer),
        }
    }

    pub fn read(
        generation: ProtocolGeneration,
        kind: PacketKind,
        reader: &mut ByteReader,
    ) -> Result<Self, SerdeErr> {
        Ok(match kind {
            PacketKind::Objective => Packet::Objective(ObjectivePacket::read(generation, reader)?),
            PacketKind::DisplayObjective => {
                Packet::DisplayObjective(DisplayObjectivePacket::read(reader)?)
            }
            PacketKind::Score => Packet::Score(ScorePacket::read(generation, reader)?),
            PacketKind::Team => Packet::Team(TeamPacket::read(generation, reader)?),
        })
    }
}

pub(crate) fn write_str(text: &str, writer: &mut dyn ByteWrite) {
    VarInt(text.len() as i32).ser(writer);
    writer.write_bytes(text.as_bytes());
}

pub(crate) fn read_string(reader: &mut ByteReader) -> Result<String, SerdeErr> {
    String::de(reader)
}
