//! Building an EOT file from an OpenType font

use thiserror::Error;

use crate::font_data::FontData;
use crate::header::{fs_type, EotHeader};
use crate::read::ReadError;
use crate::sfnt::{FontRef, TableProvider};
use crate::tables::name::{self, Name};
use crate::write::{dump_header, WriteError};

/// An error produced while converting a font for embedding.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The font could not be parsed, or a required table is absent.
    #[error(transparent)]
    Font(#[from] ReadError),

    /// The font's embedding permissions forbid conversion.
    ///
    /// Distinct from a parse failure: the font is well formed, but its
    /// `fsType` declines embedding.
    #[error("the font does not allow embedding")]
    EmbeddingRestricted,

    /// The font only permits bitmap embedding, which is unsupported.
    #[error("the font requires bitmap embedding, which is not supported")]
    BitmapEmbeddingOnly,

    /// The assembled header failed size validation.
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Extract the metadata EOT needs from `font` and build a header for it.
///
/// `font_len` is the byte length of the entire source file; the writer
/// copies it verbatim after the header. Requires the `OS/2`, `name` and
/// `head` tables.
pub fn build_header(font: &FontRef, font_len: u32) -> Result<EotHeader, ConvertError> {
    let os2 = font.os2()?;
    let name = font.name()?;
    let head = font.head()?;

    let mut header = EotHeader {
        panose: os2.panose_10,
        italic: (os2.fs_selection & 0x01) as u8,
        weight: os2.us_weight_class as u32,
        fs_type: os2.fs_type,
        unicode_range: [
            os2.ul_unicode_range_1,
            os2.ul_unicode_range_2,
            os2.ul_unicode_range_3,
            os2.ul_unicode_range_4,
        ],
        code_page_range: [os2.ul_code_page_range_1, os2.ul_code_page_range_2],
        checksum_adjustment: head.checksum_adjustment,
        family_name: english_name(&name, name::FAMILY_NAME)?,
        style_name: english_name(&name, name::SUBFAMILY_NAME)?,
        version_name: english_name(&name, name::VERSION_STRING)?,
        full_name: english_name(&name, name::FULL_NAME)?,
        ..Default::default()
    };
    header.eot_size += (header.family_name.len()
        + header.style_name.len()
        + header.version_name.len()
        + header.full_name.len()) as u32;
    header.font_data_size = font_len;
    header.eot_size += font_len;
    Ok(header)
}

fn english_name(name: &Name, name_id: u16) -> Result<Vec<u8>, ReadError> {
    let bytes = name.english_name(name_id)?;
    if bytes.is_empty() {
        log::warn!("no English name record for name id {name_id}; field left empty");
    }
    Ok(bytes)
}

/// Reject fonts whose embedding permissions forbid conversion.
///
/// Restricted embedding only rejects when neither the editable nor the
/// preview-and-print bit is also set; bitmap-only embedding always
/// rejects.
pub fn check_embedding_policy(fs_type_field: u16) -> Result<(), ConvertError> {
    if fs_type_field & fs_type::EDITABLE == 0
        && fs_type_field & fs_type::PREVIEW == 0
        && fs_type_field & fs_type::RESTRICTED != 0
    {
        return Err(ConvertError::EmbeddingRestricted);
    }
    if fs_type_field & fs_type::BITMAP != 0 {
        return Err(ConvertError::BitmapEmbeddingOnly);
    }
    Ok(())
}

/// Convert a font to a complete EOT stream: header, then the font bytes
/// verbatim.
///
/// Every failure is detected before the first byte of output exists, so a
/// caller never writes a partial stream.
pub fn make_eot<'a>(
    font_bytes: &[u8],
    urls: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<u8>, ConvertError> {
    let font = FontRef::new(FontData::new(font_bytes))?;
    let mut header = build_header(&font, font_bytes.len() as u32)?;
    for url in urls {
        header.add_root_string(url);
    }
    check_embedding_policy(header.fs_type)?;
    let mut data = dump_header(&header)?;
    data.extend_from_slice(font_bytes);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{byte_checksum, Tail, VERSION_2_2};
    use crate::read::FontRead;

    #[test]
    fn minimal_font_end_to_end() {
        let font_bytes = eot_test_data::minimal_font();
        let font = FontRef::new(FontData::new(&font_bytes)).unwrap();
        let header = build_header(&font, font_bytes.len() as u32).unwrap();

        assert_eq!(header.tail.version(), VERSION_2_2);
        assert_eq!(header.weight, 400);
        assert_eq!(header.fs_type, 0);
        // "Test" is 4 UTF-16 code units
        assert_eq!(header.family_name.len(), 8);
        assert_eq!(header.tail.root_string().len(), 0);
        let name_sizes = header.family_name.len()
            + header.style_name.len()
            + header.version_name.len()
            + header.full_name.len();
        assert_eq!(
            header.eot_size as usize,
            120 + name_sizes + font_bytes.len()
        );
    }

    #[test]
    fn written_stream_rereads() {
        let font_bytes = eot_test_data::minimal_font();
        let eot = make_eot(&font_bytes, []).unwrap();
        let header = EotHeader::read(FontData::new(&eot)).unwrap();
        assert_eq!(header.eot_size as usize, eot.len());
        assert_eq!(header.font_data_size as usize, font_bytes.len());
        assert_eq!(&eot[header.header_len()..], font_bytes.as_slice());
        assert_eq!(header.family_name, [b'T', 0, b'e', 0, b's', 0, b't', 0]);

        let mut report = Vec::new();
        crate::info::write_report(&header, &mut report).unwrap();
        let report = String::from_utf8(report).unwrap();
        assert!(report.contains("FamilyName:         Test\n"));
        assert!(report.contains("Weight:             400\n"));
    }

    #[test]
    fn root_strings_accumulate_in_order() {
        let font_bytes = eot_test_data::minimal_font();
        let eot = make_eot(&font_bytes, ["http://a.example", "http://b.example"]).unwrap();
        let header = EotHeader::read(FontData::new(&eot)).unwrap();
        let Tail::Full(tail) = &header.tail else {
            panic!("writer always emits a full tail");
        };
        let expected_len = (2 * "http://a.example".len() + 2) * 2;
        assert_eq!(tail.root_string.len(), expected_len);
        assert_eq!(tail.root_string[0], b'h');
        assert_eq!(tail.root_string_checksum, byte_checksum(&tail.root_string));
    }

    #[test]
    fn restricted_font_rejected() {
        let font_bytes = eot_test_data::minimal_font_with_fs_type(fs_type::RESTRICTED);
        assert!(matches!(
            make_eot(&font_bytes, []),
            Err(ConvertError::EmbeddingRestricted)
        ));
    }

    #[test]
    fn restricted_with_preview_allowed() {
        for allowed in [fs_type::PREVIEW, fs_type::EDITABLE] {
            let font_bytes =
                eot_test_data::minimal_font_with_fs_type(fs_type::RESTRICTED | allowed);
            assert!(make_eot(&font_bytes, []).is_ok());
        }
    }

    #[test]
    fn bitmap_font_rejected() {
        let font_bytes = eot_test_data::minimal_font_with_fs_type(fs_type::BITMAP);
        assert!(matches!(
            make_eot(&font_bytes, []),
            Err(ConvertError::BitmapEmbeddingOnly)
        ));
    }

    #[test]
    fn missing_table_rejected() {
        let font_bytes = eot_test_data::font_without_os2();
        assert!(matches!(
            make_eot(&font_bytes, []),
            Err(ConvertError::Font(ReadError::TableIsMissing(tag))) if tag == *b"OS/2"
        ));
    }
}
