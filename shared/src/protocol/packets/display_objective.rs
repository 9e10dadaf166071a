use sidebar_serde::{ByteReader, ByteWrite, Serde, SerdeErr};

use super::{read_string, write_str, WireFields};

/// Display slot of the sidebar
pub const SIDEBAR_POSITION: u8 = 1;

/// Shows an objective in a display slot. Same layout in every generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayObjectivePacket {
    pub position: u8,
    pub name: String,
}

impl DisplayObjectivePacket {
    pub fn sidebar(name: impl Into<String>) -> Self {
        Self {
            position: SIDEBAR_POSITION,
            name: name.into(),
        }
    }
}

impl WireFields for DisplayObjectivePacket {
    fn write(&self, writer: &mut dyn ByteWrite) {
        self.position.ser(writer);
        write_str(&self.name, writer);
    }

    fn read(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let position = u8::de(reader)?;
        let name = read_string(reader)?;
        Ok(Self { position, name })
    }
}
