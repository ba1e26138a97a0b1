use crate::codec;

use super::error::InstrumentError;

pub struct InstrumentReader<'a> {
    data: &'a [u8],
}

impl<'a> InstrumentReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), InstrumentError> {
        if self.data.len() < needed {
            return Err(InstrumentError::TooShort {
                needed,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, InstrumentError> {
        self.data
            .get(offset)
            .copied()
            .ok_or(InstrumentError::TooShort {
                needed: offset + 1,
                actual: self.data.len(),
            })
    }

    pub fn read_i8(&self, offset: usize) -> Result<i8, InstrumentError> {
        Ok(codec::signed_byte(self.read_u8(offset)?))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], InstrumentError> {
        self.data
            .get(range.clone())
            .ok_or(InstrumentError::TooShort {
                needed: range.end,
                actual: self.data.len(),
            })
    }

    /// Reversed-byte length field (lenient codec contract).
    pub fn read_reversed_u32(
        &self,
        range: std::ops::Range<usize>,
    ) -> Result<u32, InstrumentError> {
        let bytes = self.read_slice(range)?;
        Ok(codec::reversed_unsigned(bytes, bytes.len()) as u32)
    }
}
