use crate::error::SerdeErr;

pub struct ByteReader<'b> {
    buffer: &'b [u8],
    offset: usize,
}

impl<'b> ByteReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let Some(byte) = self.buffer.get(self.offset) else {
            return Err(SerdeErr::UnexpectedEnd {
                offset: self.offset,
                needed: 1,
            });
        };
        self.offset += 1;
        Ok(*byte)
    }

    pub fn read_bytes(&mut self, count: usize) -> Result<&'b [u8], SerdeErr> {
        let end = self.offset + count;
        if end > self.buffer.len() {
            return Err(SerdeErr::UnexpectedEnd {
                offset: self.offset,
                needed: end - self.buffer.len(),
            });
        }
        let slice = &self.buffer[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
