//! Traits for interpreting binary data

use eot_types::Tag;

use crate::font_data::FontData;

/// A type that can be read from raw binary data.
///
/// This trait is implemented for structures that are self-describing:
/// reading performs all validation required for the result to be
/// consistent, and fails at the first malformed or missing field.
pub trait FontRead<'a>: Sized {
    /// Read an instance of `Self` from the provided data, performing validation.
    fn read(data: FontData<'a>) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font or EOT data
#[derive(Debug, Clone)]
pub enum ReadError {
    /// A read ran past the end of the input.
    OutOfBounds,
    /// The sfnt format tag was not a recognized version.
    InvalidSfnt(u32),
    /// A table declared a format this implementation does not know.
    InvalidFormat(i64),
    /// The EOT magic number was not 0x504C.
    BadMagic(u16),
    /// The EOT version was not one of the three defined values.
    UnsupportedVersion(u32),
    /// A reserved or padding field held a non-zero value.
    NonZeroField(&'static str),
    /// A required sfnt table is absent.
    TableIsMissing(Tag),
    /// Catch-all for structurally invalid data.
    MalformedData(&'static str),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "A read was out of bounds"),
            ReadError::InvalidSfnt(ver) => write!(f, "Invalid sfnt version 0x{ver:08X}"),
            ReadError::InvalidFormat(x) => write!(f, "Invalid format '{x}'"),
            ReadError::BadMagic(magic) => write!(f, "Bad EOT magic number 0x{magic:04X}"),
            ReadError::UnsupportedVersion(ver) => {
                write!(f, "Unsupported EOT version 0x{ver:08X}")
            }
            ReadError::NonZeroField(field) => {
                write!(f, "The {field} field must be zero")
            }
            ReadError::TableIsMissing(tag) => write!(f, "the {tag} table is missing"),
            ReadError::MalformedData(msg) => write!(f, "Malformed data: '{msg}'"),
        }
    }
}

impl std::error::Error for ReadError {}
