use crate::{byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr, serde::Serde};

pub const MAX_VAR_INT_BYTES: usize = 5;

const SEGMENT_BITS: u32 = 0x7F;
const CONTINUE_BIT: u8 = 0x80;

/// A 32-bit integer written in 7-bit groups, least significant group first.
/// Every group but the last carries a continuation bit, so small values
/// (packet ids, score values, enum ordinals) take a single byte.
/// Negative values always take the full 5 bytes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct VarInt(pub i32);

impl VarInt {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

impl From<i32> for VarInt {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<VarInt> for i32 {
    fn from(value: VarInt) -> Self {
        value.0
    }
}

impl Serde for VarInt {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        let mut value = self.0 as u32;
        loop {
            let proceed = value > SEGMENT_BITS;
            let mut byte = (value & SEGMENT_BITS) as u8;
            if proceed {
                byte |= CONTINUE_BIT;
            }
            writer.write_byte(byte);
            value >>= 7;
            if !proceed {
                return;
            }
        }
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let mut output: u32 = 0;
        for index in 0..MAX_VAR_INT_BYTES {
            let byte = reader.read_byte()?;
            output |= ((byte as u32) & SEGMENT_BITS) << (7 * index);
            if byte & CONTINUE_BIT == 0 {
                return Ok(Self(output as i32));
            }
        }
        Err(SerdeErr::VarIntTooLong {
            max_bytes: MAX_VAR_INT_BYTES,
        })
    }

    fn byte_length(&self) -> usize {
        let mut value = self.0 as u32;
        let mut output = 1;
        while value > SEGMENT_BITS {
            value >>= 7;
            output += 1;
        }
        output
    }
}
