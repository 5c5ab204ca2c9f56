//! The sfnt table directory and typed table access

use eot_types::Tag;

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};
use crate::tables::{head::Head, name::Name, os2::Os2};

/// The sfnt version for fonts with TrueType outlines.
pub const TT_SFNT_VERSION: u32 = 0x00010000;
/// The `OTTO` sfnt version tag, for fonts with PostScript outlines.
pub const CFF_SFNT_VERSION: u32 = u32::from_be_bytes(*b"OTTO");
/// The legacy Apple `true` sfnt version tag.
pub const TRUE_SFNT_VERSION: u32 = u32::from_be_bytes(*b"true");
/// The legacy Apple `typ1` sfnt version tag.
pub const TYP1_SFNT_VERSION: u32 = u32::from_be_bytes(*b"typ1");

/// A single record in the sfnt table directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRecord {
    /// Table identifier.
    pub tag: Tag,
    /// Checksum for the table.
    pub checksum: u32,
    /// Offset of the table from the beginning of the file.
    pub offset: u32,
    /// Length of the table, in bytes.
    pub length: u32,
}

/// The table directory at the start of an sfnt file.
#[derive(Clone, Debug)]
pub struct TableDirectory {
    sfnt_version: u32,
    search_range: u16,
    entry_selector: u16,
    range_shift: u16,
    table_records: Vec<TableRecord>,
}

impl TableDirectory {
    /// The font's sfnt version tag.
    pub fn sfnt_version(&self) -> u32 {
        self.sfnt_version
    }

    /// Binary-search hint; preserved for forward compatibility, never validated.
    pub fn search_range(&self) -> u16 {
        self.search_range
    }

    /// Binary-search hint; preserved for forward compatibility, never validated.
    pub fn entry_selector(&self) -> u16 {
        self.entry_selector
    }

    /// Binary-search hint; preserved for forward compatibility, never validated.
    pub fn range_shift(&self) -> u16 {
        self.range_shift
    }

    /// The records for the tables in the font.
    pub fn table_records(&self) -> &[TableRecord] {
        &self.table_records
    }

    /// Find the record for `tag`.
    ///
    /// Lookup is a linear scan; the first exact match wins.
    pub fn find_table(&self, tag: Tag) -> Option<&TableRecord> {
        self.table_records.iter().find(|record| record.tag == tag)
    }
}

impl<'a> FontRead<'a> for TableDirectory {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let sfnt_version: u32 = cursor.read()?;
        if ![
            TT_SFNT_VERSION,
            CFF_SFNT_VERSION,
            TRUE_SFNT_VERSION,
            TYP1_SFNT_VERSION,
        ]
        .contains(&sfnt_version)
        {
            return Err(ReadError::InvalidSfnt(sfnt_version));
        }
        let num_tables: u16 = cursor.read()?;
        let search_range = cursor.read()?;
        let entry_selector = cursor.read()?;
        let range_shift = cursor.read()?;
        let mut table_records = Vec::with_capacity(num_tables as usize);
        for _ in 0..num_tables {
            table_records.push(TableRecord {
                tag: cursor.read()?,
                checksum: cursor.read()?,
                offset: cursor.read()?,
                length: cursor.read()?,
            });
        }
        Ok(TableDirectory {
            sfnt_version,
            search_range,
            entry_selector,
            range_shift,
            table_records,
        })
    }
}

/// A parsed sfnt table directory, plus the underlying font bytes.
#[derive(Clone)]
pub struct FontRef<'a> {
    data: FontData<'a>,
    /// The font's table directory.
    pub table_directory: TableDirectory,
}

impl<'a> FontRef<'a> {
    /// Parse the table directory of `data`.
    pub fn new(data: FontData<'a>) -> Result<Self, ReadError> {
        TableDirectory::read(data).map(|table_directory| FontRef {
            data,
            table_directory,
        })
    }

    /// The raw bytes of the table with this tag, if present.
    pub fn table_data(&self, tag: Tag) -> Option<FontData<'a>> {
        self.table_directory.find_table(tag).and_then(|record| {
            let start = record.offset as usize;
            self.data.slice(start..start.checked_add(record.length as usize)?)
        })
    }
}

/// An interface for accessing tables from a font (or font-like object)
pub trait TableProvider<'a> {
    fn data_for_tag(&self, tag: Tag) -> Option<FontData<'a>>;

    fn expect_data_for_tag(&self, tag: Tag) -> Result<FontData<'a>, ReadError> {
        self.data_for_tag(tag).ok_or(ReadError::TableIsMissing(tag))
    }

    fn os2(&self) -> Result<Os2, ReadError> {
        self.expect_data_for_tag(Os2::TAG).and_then(FontRead::read)
    }

    fn name(&self) -> Result<Name<'a>, ReadError> {
        self.expect_data_for_tag(Name::TAG).and_then(FontRead::read)
    }

    fn head(&self) -> Result<Head, ReadError> {
        self.expect_data_for_tag(Head::TAG).and_then(FontRead::read)
    }
}

impl<'a> TableProvider<'a> for FontRef<'a> {
    fn data_for_tag(&self, tag: Tag) -> Option<FontData<'a>> {
        self.table_data(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eot_test_data::bebuffer::BeBuffer;

    fn directory_with_version(version: u32) -> Vec<u8> {
        BeBuffer::new()
            .push(version)
            .push(1u16) // numTables
            .push(16u16) // searchRange
            .push(0u16) // entrySelector
            .push(16u16) // rangeShift
            .push(Tag::new(b"head"))
            .push(0u32) // checksum
            .push(28u32) // offset
            .push(4u32) // length
            .into_data()
    }

    #[test]
    fn recognized_versions() {
        for version in [
            TT_SFNT_VERSION,
            CFF_SFNT_VERSION,
            TRUE_SFNT_VERSION,
            TYP1_SFNT_VERSION,
        ] {
            let bytes = directory_with_version(version);
            let directory = TableDirectory::read(FontData::new(&bytes)).unwrap();
            assert_eq!(directory.sfnt_version(), version);
            assert_eq!(directory.table_records().len(), 1);
        }
    }

    #[test]
    fn unknown_version_rejected() {
        let bytes = directory_with_version(u32::from_be_bytes(*b"wOFF"));
        assert!(matches!(
            TableDirectory::read(FontData::new(&bytes)),
            Err(ReadError::InvalidSfnt(_))
        ));
    }

    #[test]
    fn truncated_records_rejected() {
        let mut bytes = directory_with_version(TT_SFNT_VERSION);
        bytes.truncate(20);
        assert!(matches!(
            TableDirectory::read(FontData::new(&bytes)),
            Err(ReadError::OutOfBounds)
        ));
    }

    #[test]
    fn lookup_is_first_match() {
        let bytes = BeBuffer::new()
            .push(TT_SFNT_VERSION)
            .push(2u16)
            .push(16u16)
            .push(0u16)
            .push(16u16)
            .push(Tag::new(b"name"))
            .push(0u32)
            .push(44u32)
            .push(2u32)
            .push(Tag::new(b"name"))
            .push(0u32)
            .push(46u32)
            .push(2u32)
            .into_data();
        let directory = TableDirectory::read(FontData::new(&bytes)).unwrap();
        let record = directory.find_table(Tag::new(b"name")).unwrap();
        assert_eq!(record.offset, 44);
        assert!(directory.find_table(Tag::new(b"NAME")).is_none());
    }

    #[test]
    fn missing_table() {
        let font_bytes = eot_test_data::minimal_font();
        let font = FontRef::new(FontData::new(&font_bytes)).unwrap();
        assert!(font.data_for_tag(Tag::new(b"glyf")).is_none());
        assert!(matches!(
            font.expect_data_for_tag(Tag::new(b"glyf")),
            Err(ReadError::TableIsMissing(tag)) if tag == *b"glyf"
        ));
        assert!(font.os2().is_ok());
        assert!(font.name().is_ok());
        assert!(font.head().is_ok());
    }
}
