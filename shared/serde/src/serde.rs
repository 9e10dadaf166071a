use crate::{byte_reader::ByteReader, byte_writer::ByteWrite, error::SerdeErr, var_int::VarInt};

/// Upper bound on the character count of any protocol string
pub const MAX_STRING_CHARS: usize = 32767;

/// A type that can be written to & read from the wire.
/// Multi-byte integers are big-endian.
pub trait Serde: Sized {
    fn ser(&self, writer: &mut dyn ByteWrite);

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr>;

    fn byte_length(&self) -> usize;
}

impl Serde for bool {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_byte(u8::from(*self));
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        Ok(reader.read_byte()? != 0)
    }

    fn byte_length(&self) -> usize {
        1
    }
}

impl Serde for u8 {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_byte(*self);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        reader.read_byte()
    }

    fn byte_length(&self) -> usize {
        1
    }
}

impl Serde for i16 {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_bytes(&self.to_be_bytes());
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let bytes = reader.read_bytes(2)?;
        Ok(i16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn byte_length(&self) -> usize {
        2
    }
}

impl Serde for i32 {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        writer.write_bytes(&self.to_be_bytes());
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let bytes = reader.read_bytes(4)?;
        Ok(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn byte_length(&self) -> usize {
        4
    }
}

// Strings are a VarInt byte length followed by UTF-8.
impl Serde for String {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        VarInt(self.len() as i32).ser(writer);
        writer.write_bytes(self.as_bytes());
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let length = VarInt::de(reader)?.get();
        // each char is at most 4 bytes of UTF-8
        let max_bytes = MAX_STRING_CHARS * 4;
        if length < 0 || length as usize > max_bytes {
            return Err(SerdeErr::InvalidStringLength {
                length,
                max: max_bytes,
            });
        }
        let offset = reader.offset();
        let bytes = reader.read_bytes(length as usize)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| SerdeErr::InvalidUtf8 { offset })
    }

    fn byte_length(&self) -> usize {
        VarInt(self.len() as i32).byte_length() + self.len()
    }
}
