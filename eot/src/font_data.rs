//! raw font and EOT bytes

use std::ops::RangeBounds;

use eot_types::{Scalar, ScalarLE};

use crate::read::ReadError;

/// A reference to raw binary data.
///
/// This is a wrapper around a byte slice, that provides convenience methods
/// for parsing and validating that data.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontData<'a> {
    bytes: &'a [u8],
}

impl<'a> FontData<'a> {
    /// Create a new `FontData` with these bytes.
    pub const fn new(bytes: &'a [u8]) -> Self {
        FontData { bytes }
    }

    /// The length of the data, in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if the data has a length of zero bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Return the data from `pos` onwards, or `None` if `pos` is out of bounds.
    pub fn split_off(&self, pos: usize) -> Option<FontData<'a>> {
        self.bytes.get(pos..).map(FontData::new)
    }

    /// Return a sub-range of the data, or `None` if the range is out of bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Option<FontData<'a>> {
        let bounds = (range.start_bound().cloned(), range.end_bound().cloned());
        self.bytes.get(bounds).map(FontData::new)
    }

    /// Read a big-endian scalar at the provided offset.
    pub fn read_at<T: Scalar>(&self, offset: usize) -> Result<T, ReadError> {
        self.bytes
            .get(offset..offset + T::RAW_BYTE_LEN)
            .and_then(T::read)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Read a little-endian scalar at the provided offset.
    pub fn read_le_at<T: ScalarLE>(&self, offset: usize) -> Result<T, ReadError> {
        self.bytes
            .get(offset..offset + T::RAW_BYTE_LEN)
            .and_then(T::read_le)
            .ok_or(ReadError::OutOfBounds)
    }

    pub(crate) fn cursor(&self) -> Cursor<'a> {
        Cursor {
            pos: 0,
            data: *self,
        }
    }

    pub(crate) fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// A cursor for sequential, fail-fast parsing.
///
/// Every read advances the position; the first read past the end of the
/// data fails with [`ReadError::OutOfBounds`] and parsing stops there.
pub struct Cursor<'a> {
    pos: usize,
    data: FontData<'a>,
}

impl<'a> Cursor<'a> {
    /// The current position, in bytes from the start of the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Read a big-endian scalar and advance.
    pub fn read<T: Scalar>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_at(self.pos)?;
        self.pos += T::RAW_BYTE_LEN;
        Ok(temp)
    }

    /// Read a little-endian scalar and advance.
    pub fn read_le<T: ScalarLE>(&mut self) -> Result<T, ReadError> {
        let temp = self.data.read_le_at(self.pos)?;
        self.pos += T::RAW_BYTE_LEN;
        Ok(temp)
    }

    /// Read `n` raw bytes and advance.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], ReadError> {
        let bytes = self
            .data
            .as_bytes()
            .get(self.pos..self.pos + n)
            .ok_or(ReadError::OutOfBounds)?;
        self.pos += n;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_mixed_endian() {
        let data = FontData::new(&[0x00, 0x02, 0x00, 0x02, 0x4C, 0x50]);
        let mut cursor = data.cursor();
        assert_eq!(cursor.read::<u32>().unwrap(), 0x00020002);
        assert_eq!(cursor.read_le::<u16>().unwrap(), 0x504C);
        assert_eq!(cursor.position(), 6);
    }

    #[test]
    fn cursor_fails_fast() {
        let data = FontData::new(&[0xFF, 0xFF]);
        let mut cursor = data.cursor();
        assert!(matches!(cursor.read::<u32>(), Err(ReadError::OutOfBounds)));
        // a failed read does not advance
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read::<u16>().unwrap(), 0xFFFF);
    }

    #[test]
    fn slices() {
        let data = FontData::new(&[1, 2, 3, 4]);
        assert_eq!(data.split_off(2).unwrap().as_bytes(), &[3, 4]);
        assert!(data.split_off(5).is_none());
        assert_eq!(data.slice(1..3).unwrap().len(), 2);
        assert!(data.slice(1..9).is_none());
    }
}
