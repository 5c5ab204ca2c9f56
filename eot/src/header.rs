//! The Embedded OpenType header

use crate::font_data::{Cursor, FontData};
use crate::read::{FontRead, ReadError};
use crate::write::{EotWriter, WriteError};

/// The EOT header magic number, stored after `fsType`.
pub const MAGIC: u16 = 0x504C;

/// EOT version 1.0: no tail fields.
pub const VERSION_1_0: u32 = 0x00010000;
/// EOT version 2.1: root string only.
pub const VERSION_2_1: u32 = 0x00020001;
/// EOT version 2.2: root string, checksum, signature and EUDC data.
pub const VERSION_2_2: u32 = 0x00020002;

/// The mask XORed into the root-string byte sum.
const ROOT_STRING_CHECKSUM_MASK: u32 = 0x50475342;

// Fixed fields through Reserved4; the name blocks and the tail each add
// their own padding+length prefixes on top of this.
const FIXED_FIELDS_LEN: usize = 80;

/// Embedding-permission bits of the `fsType` field.
pub mod fs_type {
    pub const RESTRICTED: u16 = 0x0002;
    pub const PREVIEW: u16 = 0x0004;
    pub const EDITABLE: u16 = 0x0008;
    pub const NO_SUBSETTING: u16 = 0x0100;
    pub const BITMAP: u16 = 0x0200;
}

/// Processing flags stored in the `Flags` field.
///
/// All of these describe transformations this implementation never
/// applies; they are decoded for reporting only.
pub mod flags {
    pub const SUBSET: u32 = 0x00000001;
    pub const TT_COMPRESSED: u32 = 0x00000004;
    pub const FAIL_IF_VARIATION_SIMULATED: u32 = 0x00000010;
    pub const EMBED_EUDC: u32 = 0x00000020;
    pub const VALIDATION_TESTS: u32 = 0x00000040;
    pub const WEB_OBJECT: u32 = 0x00000080;
    pub const XOR_ENCRYPT_DATA: u32 = 0x10000000;
}

/// An EOT header.
///
/// All variable-length fields are owned, so a partially parsed header
/// releases everything it allocated when it is dropped. The embedded font
/// payload is not part of the header; it follows it in the stream,
/// `font_data_size` bytes long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EotHeader {
    pub eot_size: u32,
    pub font_data_size: u32,
    pub flags: u32,
    pub panose: [u8; 10],
    pub charset: u8,
    pub italic: u8,
    pub weight: u32,
    pub fs_type: u16,
    pub unicode_range: [u32; 4],
    pub code_page_range: [u32; 2],
    pub checksum_adjustment: u32,
    /// Family name, UTF-16LE.
    pub family_name: Vec<u8>,
    /// Style name, UTF-16LE.
    pub style_name: Vec<u8>,
    /// Version string, UTF-16LE.
    pub version_name: Vec<u8>,
    /// Full name, UTF-16LE.
    pub full_name: Vec<u8>,
    /// The version-dependent tail; also determines the `Version` field.
    pub tail: Tail,
}

/// The version-dependent tail of an EOT header.
///
/// The header's `Version` field is derived from the variant rather than
/// stored separately, so a header can never claim a version whose fields
/// it does not carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tail {
    /// Version 0x00010000: no tail fields.
    None,
    /// Version 0x00020001: a root string only.
    RootString(Vec<u8>),
    /// Version 0x00020002: the full tail.
    Full(FullTail),
}

/// The tail fields of a version 0x00020002 header.
///
/// Signature and EUDC data are passthrough: this implementation never
/// produces them, but preserves them when reading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FullTail {
    /// URL prefixes the embedded font is authorized for, UTF-16LE,
    /// one zero code unit terminating each URL.
    pub root_string: Vec<u8>,
    pub root_string_checksum: u32,
    pub eudc_code_page: u32,
    pub signature: Vec<u8>,
    pub eudc_flags: u32,
    pub eudc_font_data: Vec<u8>,
}

impl Tail {
    /// The value of the header's `Version` field for this tail.
    pub fn version(&self) -> u32 {
        match self {
            Tail::None => VERSION_1_0,
            Tail::RootString(_) => VERSION_2_1,
            Tail::Full(_) => VERSION_2_2,
        }
    }

    /// The root string carried by this tail; empty for version 1.0.
    pub fn root_string(&self) -> &[u8] {
        match self {
            Tail::None => &[],
            Tail::RootString(root_string) => root_string,
            Tail::Full(tail) => &tail.root_string,
        }
    }
}

impl Default for EotHeader {
    /// A version 0x00020002 header with every field at its neutral value,
    /// sized for empty name fields and no font data.
    fn default() -> Self {
        EotHeader {
            eot_size: 120,
            font_data_size: 0,
            flags: 0,
            panose: [0; 10],
            charset: 0,
            italic: 0,
            weight: 400,
            fs_type: 0,
            unicode_range: [0; 4],
            code_page_range: [0; 2],
            checksum_adjustment: 0,
            family_name: Vec::new(),
            style_name: Vec::new(),
            version_name: Vec::new(),
            full_name: Vec::new(),
            tail: Tail::Full(FullTail::default()),
        }
    }
}

impl EotHeader {
    /// The byte length of the serialized header, excluding font data.
    pub fn header_len(&self) -> usize {
        let names = 4 * 4
            + self.family_name.len()
            + self.style_name.len()
            + self.version_name.len()
            + self.full_name.len();
        let tail = match &self.tail {
            Tail::None => 0,
            Tail::RootString(root_string) => 4 + root_string.len(),
            Tail::Full(tail) => {
                4 + tail.root_string.len()
                    + 4 // root string checksum
                    + 4 // EUDC code page
                    + 4 + tail.signature.len()
                    + 4 // EUDC flags
                    + 4 // EUDC font size
                    + tail.eudc_font_data.len()
            }
        };
        FIXED_FIELDS_LEN + names + tail
    }

    /// Append a URL prefix to the root string.
    ///
    /// The URL is assumed ASCII and stored as UTF-16LE with one zero code
    /// unit as terminator, growing the buffer by `2 * url.len() + 2`
    /// bytes. `eot_size` grows by the same amount, and on a version
    /// 0x00020002 header the root-string checksum is recomputed over the
    /// whole accumulated buffer. Has no effect on a version 1.0 header,
    /// which carries no root string.
    pub fn add_root_string(&mut self, url: &str) {
        let root_string = match &mut self.tail {
            Tail::None => return,
            Tail::RootString(root_string) => root_string,
            Tail::Full(tail) => &mut tail.root_string,
        };
        let before = root_string.len();
        for byte in url.bytes() {
            // Simplistic conversion to UTF-16LE
            root_string.extend_from_slice(&[byte, 0]);
        }
        root_string.extend_from_slice(&[0, 0]);
        let added = (root_string.len() - before) as u32;
        if let Tail::Full(tail) = &mut self.tail {
            tail.root_string_checksum = byte_checksum(&tail.root_string);
        }
        self.eot_size += added;
    }

    /// Check that every size field accounts for exactly the bytes that
    /// serialization will produce.
    pub fn validate(&self) -> Result<(), WriteError> {
        let sized_fields: &[(&str, usize)] = &[
            ("FamilyName", self.family_name.len()),
            ("StyleName", self.style_name.len()),
            ("VersionName", self.version_name.len()),
            ("FullName", self.full_name.len()),
            ("RootString", self.tail.root_string().len()),
            (
                "Signature",
                match &self.tail {
                    Tail::Full(tail) => tail.signature.len(),
                    _ => 0,
                },
            ),
        ];
        for &(field, len) in sized_fields {
            if len > u16::MAX as usize {
                return Err(WriteError::FieldTooLong { field, len });
            }
        }
        let actual = self.header_len() as u64 + self.font_data_size as u64;
        if self.eot_size as u64 != actual {
            return Err(WriteError::SizeMismatch {
                declared: self.eot_size,
                actual,
            });
        }
        Ok(())
    }

    /// Serialize this header in document order.
    ///
    /// Prefer [`dump_header`](crate::dump_header), which validates size
    /// bookkeeping first.
    pub fn write_into(&self, writer: &mut EotWriter) {
        writer.write(self.eot_size);
        writer.write(self.font_data_size);
        writer.write(self.tail.version());
        writer.write(self.flags);
        writer.write_slice(&self.panose);
        writer.write(self.charset);
        writer.write(self.italic);
        writer.write(self.weight);
        writer.write(self.fs_type);
        writer.write(MAGIC);
        for word in self.unicode_range {
            writer.write(word);
        }
        for word in self.code_page_range {
            writer.write(word);
        }
        writer.write(self.checksum_adjustment);
        for _ in 0..4 {
            writer.write(0u32); // Reserved1..4
        }
        for name in [
            &self.family_name,
            &self.style_name,
            &self.version_name,
            &self.full_name,
        ] {
            write_padded_field(writer, name);
        }
        match &self.tail {
            Tail::None => {}
            Tail::RootString(root_string) => write_padded_field(writer, root_string),
            Tail::Full(tail) => {
                write_padded_field(writer, &tail.root_string);
                writer.write(tail.root_string_checksum);
                writer.write(tail.eudc_code_page);
                write_padded_field(writer, &tail.signature);
                writer.write(tail.eudc_flags);
                writer.write(tail.eudc_font_data.len() as u32);
                writer.write_slice(&tail.eudc_font_data);
            }
        }
    }
}

/// Write a variable-length field: zero padding, u16 byte length, bytes.
fn write_padded_field(writer: &mut EotWriter, bytes: &[u8]) {
    writer.write(0u16);
    writer.write(bytes.len() as u16);
    writer.write_slice(bytes);
}

/// Read a variable-length field, validating its zero padding.
fn read_padded_field(cursor: &mut Cursor, padding: &'static str) -> Result<Vec<u8>, ReadError> {
    let pad: u16 = cursor.read_le()?;
    if pad != 0 {
        return Err(ReadError::NonZeroField(padding));
    }
    let size: u16 = cursor.read_le()?;
    Ok(cursor.read_bytes(size as usize)?.to_vec())
}

/// Checksum over the root-string bytes: the wrapping byte sum, XORed
/// with a fixed mask.
pub fn byte_checksum(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0u32, |sum, &byte| sum.wrapping_add(byte as u32))
        ^ ROOT_STRING_CHECKSUM_MASK
}

impl<'a> FontRead<'a> for EotHeader {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let eot_size = cursor.read_le()?;
        let font_data_size = cursor.read_le()?;
        let version: u32 = cursor.read_le()?;
        let flags = cursor.read_le()?;
        let panose = cursor.read_bytes(10)?.try_into().unwrap();
        let charset = cursor.read_le()?;
        let italic = cursor.read_le()?;
        let weight = cursor.read_le()?;
        let fs_type = cursor.read_le()?;
        let magic: u16 = cursor.read_le()?;
        if magic != MAGIC {
            return Err(ReadError::BadMagic(magic));
        }
        let mut unicode_range = [0u32; 4];
        for word in unicode_range.iter_mut() {
            *word = cursor.read_le()?;
        }
        let mut code_page_range = [0u32; 2];
        for word in code_page_range.iter_mut() {
            *word = cursor.read_le()?;
        }
        let checksum_adjustment = cursor.read_le()?;
        for field in ["Reserved1", "Reserved2", "Reserved3", "Reserved4"] {
            if cursor.read_le::<u32>()? != 0 {
                return Err(ReadError::NonZeroField(field));
            }
        }
        let family_name = read_padded_field(&mut cursor, "Padding1")?;
        let style_name = read_padded_field(&mut cursor, "Padding2")?;
        let version_name = read_padded_field(&mut cursor, "Padding3")?;
        let full_name = read_padded_field(&mut cursor, "Padding4")?;
        let tail = match version {
            VERSION_1_0 => Tail::None,
            VERSION_2_1 => Tail::RootString(read_padded_field(&mut cursor, "Padding5")?),
            VERSION_2_2 => {
                let root_string = read_padded_field(&mut cursor, "Padding5")?;
                let root_string_checksum = cursor.read_le()?;
                let eudc_code_page = cursor.read_le()?;
                let signature = read_padded_field(&mut cursor, "Padding6")?;
                let eudc_flags = cursor.read_le()?;
                let eudc_font_size: u32 = cursor.read_le()?;
                let eudc_font_data = cursor.read_bytes(eudc_font_size as usize)?.to_vec();
                Tail::Full(FullTail {
                    root_string,
                    root_string_checksum,
                    eudc_code_page,
                    signature,
                    eudc_flags,
                    eudc_font_data,
                })
            }
            _ => return Err(ReadError::UnsupportedVersion(version)),
        };
        Ok(EotHeader {
            eot_size,
            font_data_size,
            flags,
            panose,
            charset,
            italic,
            weight,
            fs_type,
            unicode_range,
            code_page_range,
            checksum_adjustment,
            family_name,
            style_name,
            version_name,
            full_name,
            tail,
        })
    }
}
