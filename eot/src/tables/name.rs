//! The [name (Naming)](https://docs.microsoft.com/en-us/typography/opentype/spec/name) table

use eot_types::Tag;

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// Name id for the family name.
pub const FAMILY_NAME: u16 = 1;
/// Name id for the subfamily (style) name.
pub const SUBFAMILY_NAME: u16 = 2;
/// Name id for the full name of the font.
pub const FULL_NAME: u16 = 4;
/// Name id for the version string.
pub const VERSION_STRING: u16 = 5;

/// The `name` table, formats 0 and 1.
#[derive(Clone, Debug)]
pub struct Name<'a> {
    format: u16,
    storage_offset: u16,
    name_records: Vec<NameRecord>,
    lang_tag_records: Vec<LangTagRecord>,
    // String data is located relative to the position immediately after
    // the records, not the table's own storage_offset field.
    storage: FontData<'a>,
}

/// A single name record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameRecord {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub length: u16,
    pub offset: u16,
}

/// A language-tag record (format 1 only; parsed but otherwise unused).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LangTagRecord {
    pub length: u16,
    pub offset: u16,
}

/// The encoding of an English name record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Encoding {
    /// Macintosh Roman; widened byte-by-byte to UTF-16LE.
    MacRoman,
    /// UTF-16BE, as stored for the Windows platform.
    Utf16Be,
}

impl Name<'_> {
    /// The table tag.
    pub const TAG: Tag = Tag::new(b"name");

    /// The table format (0 or 1).
    pub fn format(&self) -> u16 {
        self.format
    }

    /// The table's declared offset to string storage.
    ///
    /// Preserved for inspection; string data is read relative to the end
    /// of the records instead.
    pub fn storage_offset(&self) -> u16 {
        self.storage_offset
    }

    /// The name records.
    pub fn name_records(&self) -> &[NameRecord] {
        &self.name_records
    }

    /// The language-tag records, when the table is format 1.
    pub fn lang_tag_records(&self) -> &[LangTagRecord] {
        &self.lang_tag_records
    }

    /// The raw string bytes for a record, in the record's own encoding.
    pub fn string_bytes(&self, record: &NameRecord) -> Result<&[u8], ReadError> {
        let start = record.offset as usize;
        let end = start + record.length as usize;
        self.storage
            .as_bytes()
            .get(start..end)
            .ok_or(ReadError::OutOfBounds)
    }

    /// Find the first English name with the given id, as UTF-16LE bytes.
    ///
    /// English means Macintosh platform/encoding/language 1/0/0 or Windows
    /// 3/1/0x0409. Records on the Unicode, ISO, and custom platforms are
    /// skipped. Returns an empty buffer, not an error, when no record
    /// matches; EOT name fields of zero length are valid.
    pub fn english_name(&self, name_id: u16) -> Result<Vec<u8>, ReadError> {
        for record in self.name_records.iter().filter(|r| r.name_id == name_id) {
            let Some(encoding) = record.english_encoding()? else {
                continue;
            };
            let bytes = self.string_bytes(record)?;
            return Ok(match encoding {
                // Simplistic Roman -> UTF-16LE
                Encoding::MacRoman => bytes.iter().flat_map(|&b| [b, 0]).collect(),
                Encoding::Utf16Be => bytes
                    .chunks_exact(2)
                    .flat_map(|unit| [unit[1], unit[0]])
                    .collect(),
            });
        }
        Ok(Vec::new())
    }
}

impl NameRecord {
    /// Classify this record for English-name selection.
    ///
    /// `Ok(None)` means the record is well formed but not English (or on a
    /// platform this implementation skips); errors mean the record cannot
    /// be interpreted at all.
    fn english_encoding(&self) -> Result<Option<Encoding>, ReadError> {
        match self.platform_id {
            // Unicode, ISO (deprecated), Custom
            0 | 2 | 4 => Ok(None),
            1 => {
                if self.language_id >= 0x8000 {
                    return Err(ReadError::MalformedData("Unsupported Name Table format"));
                }
                if self.encoding_id != 0 {
                    return Err(ReadError::MalformedData("Unsupported encoding in Name Table"));
                }
                Ok((self.language_id == 0).then_some(Encoding::MacRoman))
            }
            3 => {
                if self.language_id >= 0x8000 {
                    return Err(ReadError::MalformedData("Unsupported Name Table format"));
                }
                if self.encoding_id != 1 {
                    return Err(ReadError::MalformedData("Unsupported encoding in Name Table"));
                }
                Ok((self.language_id == 0x0409).then_some(Encoding::Utf16Be))
            }
            _ => Err(ReadError::MalformedData("Invalid PlatformID in Name Table")),
        }
    }
}

impl<'a> FontRead<'a> for Name<'a> {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format: u16 = cursor.read()?;
        let count: u16 = cursor.read()?;
        let storage_offset: u16 = cursor.read()?;
        let mut name_records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            name_records.push(NameRecord {
                platform_id: cursor.read()?,
                encoding_id: cursor.read()?,
                language_id: cursor.read()?,
                name_id: cursor.read()?,
                length: cursor.read()?,
                offset: cursor.read()?,
            });
        }
        let lang_tag_records = match format {
            0 => Vec::new(),
            1 => {
                let lang_tag_count: u16 = cursor.read()?;
                let mut records = Vec::with_capacity(lang_tag_count as usize);
                for _ in 0..lang_tag_count {
                    records.push(LangTagRecord {
                        length: cursor.read()?,
                        offset: cursor.read()?,
                    });
                }
                records
            }
            _ => return Err(ReadError::InvalidFormat(format as i64)),
        };
        let storage = data
            .split_off(cursor.position())
            .ok_or(ReadError::OutOfBounds)?;
        Ok(Name {
            format,
            storage_offset,
            name_records,
            lang_tag_records,
            storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eot_test_data::bebuffer::BeBuffer;

    // format 0, one Windows and one Mac record for the same id
    fn two_platform_table() -> Vec<u8> {
        BeBuffer::new()
            .push(0u16) // format
            .push(2u16) // count
            .push(30u16) // stringOffset
            // Windows, family
            .push(3u16)
            .push(1u16)
            .push(0x0409u16)
            .push(FAMILY_NAME)
            .push(8u16) // length
            .push(0u16) // offset
            // Mac, family
            .push(1u16)
            .push(0u16)
            .push(0u16)
            .push(FAMILY_NAME)
            .push(4u16)
            .push(8u16)
            // storage: "Test" UTF-16BE, then "Test" mac-roman
            .extend([0u8, b'T', 0, b'e', 0, b's', 0, b't'])
            .extend([b'T', b'e', b's', b't'])
            .into_data()
    }

    #[test]
    fn windows_name_swapped_to_le() {
        let bytes = two_platform_table();
        let name = Name::read(FontData::new(&bytes)).unwrap();
        let family = name.english_name(FAMILY_NAME).unwrap();
        assert_eq!(family, [b'T', 0, b'e', 0, b's', 0, b't', 0]);
    }

    #[test]
    fn mac_name_widened() {
        // drop the Windows record so the Mac one is selected
        let bytes = two_platform_table();
        let name = Name::read(FontData::new(&bytes)).unwrap();
        let record = name.name_records()[1];
        assert_eq!(record.platform_id, 1);
        let mac_only = Name {
            name_records: vec![record],
            ..name
        };
        let family = mac_only.english_name(FAMILY_NAME).unwrap();
        assert_eq!(family, [b'T', 0, b'e', 0, b's', 0, b't', 0]);
    }

    #[test]
    fn unicode_platform_skipped() {
        let bytes = BeBuffer::new()
            .push(0u16)
            .push(1u16)
            .push(18u16)
            .push(0u16) // platform 0: skipped, not an error
            .push(3u16)
            .push(0u16)
            .push(FAMILY_NAME)
            .push(8u16)
            .push(0u16)
            .extend([0u8, b'T', 0, b'e', 0, b's', 0, b't'])
            .into_data();
        let name = Name::read(FontData::new(&bytes)).unwrap();
        assert_eq!(name.english_name(FAMILY_NAME).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn out_of_range_language_rejected() {
        let bytes = BeBuffer::new()
            .push(0u16)
            .push(1u16)
            .push(18u16)
            .push(3u16)
            .push(1u16)
            .push(0x8000u16) // language-tag range
            .push(FAMILY_NAME)
            .push(0u16)
            .push(0u16)
            .into_data();
        let name = Name::read(FontData::new(&bytes)).unwrap();
        assert!(matches!(
            name.english_name(FAMILY_NAME),
            Err(ReadError::MalformedData(_))
        ));
        // records for other ids are never classified
        assert_eq!(name.english_name(FULL_NAME).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn format_1_lang_tags_parsed() {
        let bytes = BeBuffer::new()
            .push(1u16) // format
            .push(0u16) // count
            .push(8u16) // stringOffset
            .push(1u16) // langTagCount
            .push(6u16) // length
            .push(0u16) // offset
            .extend([0u8, b'e', 0, b'n', 0, b'x'])
            .into_data();
        let name = Name::read(FontData::new(&bytes)).unwrap();
        assert_eq!(name.format(), 1);
        assert_eq!(name.lang_tag_records().len(), 1);
    }

    #[test]
    fn unknown_format_rejected() {
        let bytes = BeBuffer::new().push(2u16).push(0u16).push(6u16).into_data();
        assert!(matches!(
            Name::read(FontData::new(&bytes)),
            Err(ReadError::InvalidFormat(2))
        ));
    }

    #[test]
    fn string_out_of_bounds() {
        let bytes = BeBuffer::new()
            .push(0u16)
            .push(1u16)
            .push(18u16)
            .push(3u16)
            .push(1u16)
            .push(0x0409u16)
            .push(FAMILY_NAME)
            .push(64u16) // length runs past the table
            .push(0u16)
            .extend([0u8, b'T'])
            .into_data();
        let name = Name::read(FontData::new(&bytes)).unwrap();
        assert!(matches!(
            name.english_name(FAMILY_NAME),
            Err(ReadError::OutOfBounds)
        ));
    }
}
