//! The [OS/2 (OS/2 and Windows metrics)](https://docs.microsoft.com/en-us/typography/opentype/spec/os2) table

use eot_types::Tag;

use crate::font_data::FontData;
use crate::read::{FontRead, ReadError};

/// The highest OS/2 table version this implementation accepts.
const MAX_SUPPORTED_VERSION: u16 = 4;

/// The `OS/2` table, read positionally through `usMaxContext`.
///
/// Every field through version 2 is read regardless of the declared
/// version; fonts that truncate the table at an earlier version fail
/// with an out-of-bounds error rather than yielding partial data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Os2 {
    pub version: u16,
    pub x_avg_char_width: i16,
    pub us_weight_class: u16,
    pub us_width_class: u16,
    pub fs_type: u16,
    pub y_subscript_x_size: i16,
    pub y_subscript_y_size: i16,
    pub y_subscript_x_offset: i16,
    pub y_subscript_y_offset: i16,
    pub y_superscript_x_size: i16,
    pub y_superscript_y_size: i16,
    pub y_superscript_x_offset: i16,
    pub y_superscript_y_offset: i16,
    pub y_strikeout_size: i16,
    pub y_strikeout_position: i16,
    pub s_family_class: i16,
    pub panose_10: [u8; 10],
    pub ul_unicode_range_1: u32,
    pub ul_unicode_range_2: u32,
    pub ul_unicode_range_3: u32,
    pub ul_unicode_range_4: u32,
    pub ach_vend_id: Tag,
    pub fs_selection: u16,
    pub us_first_char_index: u16,
    pub us_last_char_index: u16,
    pub s_typo_ascender: i16,
    pub s_typo_descender: i16,
    pub s_typo_line_gap: i16,
    pub us_win_ascent: u16,
    pub us_win_descent: u16,
    pub ul_code_page_range_1: u32,
    pub ul_code_page_range_2: u32,
    pub sx_height: i16,
    pub s_cap_height: i16,
    pub us_default_char: u16,
    pub us_break_char: u16,
    pub us_max_context: u16,
}

impl Os2 {
    /// The table tag.
    pub const TAG: Tag = Tag::new(b"OS/2");
}

impl<'a> FontRead<'a> for Os2 {
    fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let version: u16 = cursor.read()?;
        if version > MAX_SUPPORTED_VERSION {
            return Err(ReadError::MalformedData("OS/2 version above 4"));
        }
        Ok(Os2 {
            version,
            x_avg_char_width: cursor.read()?,
            us_weight_class: cursor.read()?,
            us_width_class: cursor.read()?,
            fs_type: cursor.read()?,
            y_subscript_x_size: cursor.read()?,
            y_subscript_y_size: cursor.read()?,
            y_subscript_x_offset: cursor.read()?,
            y_subscript_y_offset: cursor.read()?,
            y_superscript_x_size: cursor.read()?,
            y_superscript_y_size: cursor.read()?,
            y_superscript_x_offset: cursor.read()?,
            y_superscript_y_offset: cursor.read()?,
            y_strikeout_size: cursor.read()?,
            y_strikeout_position: cursor.read()?,
            s_family_class: cursor.read()?,
            panose_10: cursor.read_bytes(10)?.try_into().unwrap(),
            ul_unicode_range_1: cursor.read()?,
            ul_unicode_range_2: cursor.read()?,
            ul_unicode_range_3: cursor.read()?,
            ul_unicode_range_4: cursor.read()?,
            ach_vend_id: cursor.read()?,
            fs_selection: cursor.read()?,
            us_first_char_index: cursor.read()?,
            us_last_char_index: cursor.read()?,
            s_typo_ascender: cursor.read()?,
            s_typo_descender: cursor.read()?,
            s_typo_line_gap: cursor.read()?,
            us_win_ascent: cursor.read()?,
            us_win_descent: cursor.read()?,
            ul_code_page_range_1: cursor.read()?,
            ul_code_page_range_2: cursor.read()?,
            sx_height: cursor.read()?,
            s_cap_height: cursor.read()?,
            us_default_char: cursor.read()?,
            us_break_char: cursor.read()?,
            us_max_context: cursor.read()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eot_test_data::bebuffer::BeBuffer;

    #[test]
    fn parse_fixture() {
        let bytes = eot_test_data::os2_table(400, 0);
        let os2 = Os2::read(FontData::new(&bytes)).unwrap();
        assert_eq!(os2.version, 4);
        assert_eq!(os2.us_weight_class, 400);
        assert_eq!(os2.fs_type, 0);
        assert_eq!(os2.ach_vend_id, *b"NONE");
    }

    #[test]
    fn version_above_4_rejected() {
        let bytes = BeBuffer::new().push(5u16).push(0i16).into_data();
        assert!(matches!(
            Os2::read(FontData::new(&bytes)),
            Err(ReadError::MalformedData(_))
        ));
    }

    #[test]
    fn truncated_rejected() {
        let mut bytes = eot_test_data::os2_table(400, 0);
        bytes.truncate(60);
        assert!(matches!(
            Os2::read(FontData::new(&bytes)),
            Err(ReadError::OutOfBounds)
        ));
    }
}
