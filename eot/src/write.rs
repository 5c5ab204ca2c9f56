//! Serializing EOT headers

use eot_types::ScalarLE;
use thiserror::Error;

use crate::header::EotHeader;

/// A little-endian byte sink for EOT serialization.
///
/// The EOT header is a flat stream with no internal offsets, so the sink
/// is append-only; callers are responsible for emitting fields in
/// document order.
#[derive(Debug, Default)]
pub struct EotWriter {
    data: Vec<u8>,
}

impl EotWriter {
    pub fn new() -> Self {
        Default::default()
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a scalar as little-endian bytes.
    pub fn write<T: ScalarLE>(&mut self, scalar: T) {
        self.data.extend_from_slice(scalar.to_raw_le().as_ref());
    }

    /// Write raw bytes as they are.
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Consume the writer, returning the written bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// An error produced when serializing a header whose size fields are
/// inconsistent with its contents.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error("{field} is {len} bytes, which overflows its 16-bit size field")]
    FieldTooLong { field: &'static str, len: usize },

    #[error("EOTSize is {declared} but the header and font data total {actual} bytes")]
    SizeMismatch { declared: u32, actual: u64 },
}

/// Attempt to serialize a header.
///
/// Validates the header's size bookkeeping first: every length-prefixed
/// field must fit its 16-bit size, and `eot_size` must equal the
/// serialized header length plus `font_data_size`.
pub fn dump_header(header: &EotHeader) -> Result<Vec<u8>, WriteError> {
    header.validate()?;
    let mut writer = EotWriter::new();
    header.write_into(&mut writer);
    debug_assert_eq!(writer.len(), header.header_len());
    Ok(writer.into_data())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Tail;

    #[test]
    fn size_mismatch_rejected() {
        let header = EotHeader {
            eot_size: 121,
            ..Default::default()
        };
        assert_eq!(
            dump_header(&header),
            Err(WriteError::SizeMismatch {
                declared: 121,
                actual: 120,
            })
        );
    }

    #[test]
    fn oversized_field_rejected() {
        let mut header = EotHeader {
            family_name: vec![0; u16::MAX as usize + 1],
            ..Default::default()
        };
        header.eot_size += header.family_name.len() as u32;
        assert_eq!(
            dump_header(&header),
            Err(WriteError::FieldTooLong {
                field: "FamilyName",
                len: u16::MAX as usize + 1,
            })
        );
    }

    #[test]
    fn font_data_counts_toward_eot_size() {
        let header = EotHeader {
            eot_size: 120 + 10,
            font_data_size: 10,
            tail: Tail::Full(Default::default()),
            ..Default::default()
        };
        assert!(dump_header(&header).is_ok());
    }
}
