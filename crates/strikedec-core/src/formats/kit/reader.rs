use crate::codec;

use super::error::KitError;

pub struct KitReader<'a> {
    data: &'a [u8],
}

impl<'a> KitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), KitError> {
        if self.data.len() < needed {
            return Err(KitError::TooShort {
                needed,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, KitError> {
        self.data.get(offset).copied().ok_or(KitError::TooShort {
            needed: offset + 1,
            actual: self.data.len(),
        })
    }

    pub fn read_i8(&self, offset: usize) -> Result<i8, KitError> {
        Ok(codec::signed_byte(self.read_u8(offset)?))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], KitError> {
        self.data.get(range.clone()).ok_or(KitError::TooShort {
            needed: range.end,
            actual: self.data.len(),
        })
    }

    /// Standard little-endian u16. Used only for the fx delay pair; the
    /// length fields elsewhere use the reversed encoding instead.
    pub fn read_u16_le(&self, range: std::ops::Range<usize>) -> Result<u16, KitError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(KitError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Reversed-byte length field (lenient codec contract).
    pub fn read_reversed_u32(&self, range: std::ops::Range<usize>) -> Result<u32, KitError> {
        let bytes = self.read_slice(range)?;
        Ok(codec::reversed_unsigned(bytes, bytes.len()) as u32)
    }
}
