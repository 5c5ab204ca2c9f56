//! Human-readable reporting of EOT headers

use std::io::{self, Write};

use crate::header::{flags, fs_type, EotHeader};

// Keywords for the bits of the four OS/2 Unicode range words, in
// ascending bit order. Spellings are part of the report format and stay
// as they are, including the historical oddities.
#[rustfmt::skip]
static UNICODE_RANGE_1: &[(u32, &str)] = &[
    (0, "basic-latin"),
    (1, "latin-1-supplement"),
    (2, "latin-extended-a"),
    (3, "latin-extended-b"),
    (4, "ipa-extensions"),
    (5, "spacing-modifiers"),
    (6, "combining-diacritical"),
    (7, "greek-and-coptic"),
    (8, "coptic"),
    (9, "cyrillic"),
    (10, "armenian"),
    (11, "hebrew"),
    (12, "vai"),
    (13, "arabic"),
    (14, "nko"),
    (15, "devanagari"),
    (16, "bengali"),
    (17, "gurmukhi"),
    (18, "gujarati"),
    (19, "oriya"),
    (20, "tamil"),
    (21, "teluga"),
    (22, "kannada"),
    (23, "malayalam"),
    (24, "thai"),
    (25, "lao"),
    (26, "georgian"),
    (27, "balinese"),
    (28, "hangul-jamo"),
    (29, "latin-extended-additional"),
    (30, "greek-extended"),
    (31, "general-punctuation"),
];

#[rustfmt::skip]
static UNICODE_RANGE_2: &[(u32, &str)] = &[
    (0, "super-and-subscripts"),
    (1, "currency"),
    (2, "combining-diacriticals-for-symbols"),
    (3, "letterlike"),
    (4, "number-forms"),
    (5, "arrows"),
    (6, "mathematical"),
    (7, "technical"),
    (8, "control-pictures"),
    (9, "ocr"),
    (10, "enclosed-alphanumerics"),
    (11, "box-drawing"),
    (12, "block-elements"),
    (13, "geometric-shapes"),
    (14, "misc-symbols"),
    (15, "dingbats"),
    (16, "cjk-symbols-and-punctuation"),
    (17, "hiragana"),
    (18, "katakana"),
    (19, "bopomofo"),
    (20, "hangul-compatibility-jamo"),
    (21, "phags-pa"),
    (22, "enclosed-cjk"),
    (23, "cjk-compatibility"),
    (24, "hangul-syllables"),
    (25, "non-plane-0"),
    (26, "phoenician"),
    (27, "cjk"),
    (28, "private-use-0"),
    (29, "cjk-strokes"),
    (30, "alphabetic-presentation-forms"),
    (31, "arabic-presentation-a"),
];

#[rustfmt::skip]
static UNICODE_RANGE_3: &[(u32, &str)] = &[
    (0, "combining-half-marks"),
    (1, "vertical-forms"),
    (2, "small-form-variants"),
    (3, "arabic-presentation-b"),
    (4, "halfwidth-andfullwidth-forms"),
    (5, "specials"),
    (6, "tibetan"),
    (7, "syriac"),
    (8, "thaana"),
    (9, "sinhala"),
    (10, "myanmar"),
    (11, "ethiopic"),
    (12, "cherokee"),
    (13, "unified-canadian-aboriginal"),
    (14, "ogham"),
    (15, "runic"),
    (16, "khmer"),
    (17, "mongolian"),
    (18, "braille"),
    (19, "yi"),
    (20, "tagalog-hanunoo-buhid-tagbanwa"),
    (21, "old-italic"),
    (22, "gothic"),
    (23, "deseret"),
    (24, "musical-symbols"),
    (25, "mathematical alphanumeric symbols"),
    (26, "private-use-15-16"),
    (27, "variation-selectors"),
    (28, "tags"),
    (29, "limbu"),
    (30, "taile"),
    (31, "new-tai-lue"),
];

#[rustfmt::skip]
static UNICODE_RANGE_4: &[(u32, &str)] = &[
    (0, "buginese"),
    (1, "glagolitic"),
    (2, "tifinagh"),
    (3, "yijing-hexagram"),
    (4, "syloti-nagri"),
    (5, "linear-b"),
    (6, "ancient-greek-numbers"),
    (7, "ugaritic"),
    (8, "old-persian"),
    (9, "shavian"),
    (10, "osmanya"),
    (11, "cypriot"),
    (12, "kharoshthi"),
    (13, "tai-xuan-jing"),
    (14, "cuneiform"),
    (15, "counting-rod-numerals"),
    (16, "sundanese"),
    (17, "lepcha"),
    (18, "ol-chiki"),
    (19, "saurashtra"),
    (20, "kayah-li"),
    (21, "rejang"),
    (22, "cham"),
    (23, "ancient-symbols"),
    (24, "phaistos-disc"),
    (25, "carian-lycian-lydian"),
    (26, "domino-mahjong"),
];

static UNICODE_RANGES: [&[(u32, &str)]; 4] = [
    UNICODE_RANGE_1,
    UNICODE_RANGE_2,
    UNICODE_RANGE_3,
    UNICODE_RANGE_4,
];

/// An iterator over the chars of a UTF-16LE field.
///
/// Code units are paired into supplementary-plane characters when a
/// surrogate pair occurs; an unpaired surrogate yields the replacement
/// character. A zero code unit yields `'\0'`, which callers filter or
/// substitute depending on the field.
#[derive(Clone)]
pub struct CharIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> CharIter<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        CharIter { data, pos: 0 }
    }

    fn bump_u16(&mut self) -> Option<u16> {
        let result = self
            .data
            .get(self.pos..self.pos + 2)
            .map(|x| u16::from_le_bytes(x.try_into().unwrap()))?;
        self.pos += 2;
        Some(result)
    }
}

impl Iterator for CharIter<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let rep = char::REPLACEMENT_CHARACTER;
        let c1 = self.bump_u16()? as u32;
        let raw_c = if (0xD800..0xDC00).contains(&c1) {
            let Some(c2) = self.bump_u16() else {
                return Some(rep);
            };
            ((c1 & 0x3FF) << 10) + (c2 as u32 & 0x3FF) + 0x10000
        } else {
            c1
        };
        Some(char::from_u32(raw_c).unwrap_or(rep))
    }
}

/// Decode a UTF-16LE name field for display. Zero code units are dropped.
pub fn name_to_string(data: &[u8]) -> String {
    CharIter::new(data).filter(|&c| c != '\0').collect()
}

/// Decode the root string for display.
///
/// Zero code units separate URLs and render as spaces.
pub fn root_string_to_string(data: &[u8]) -> String {
    CharIter::new(data)
        .map(|c| if c == '\0' { ' ' } else { c })
        .collect()
}

fn write_unicode_ranges<W: Write>(out: &mut W, ranges: &[u32; 4]) -> io::Result<()> {
    for (word, table) in ranges.iter().zip(UNICODE_RANGES) {
        for &(bit, keyword) in table {
            if word & (1 << bit) != 0 {
                write!(out, " {keyword}")?;
            }
        }
    }
    Ok(())
}

fn write_fs_type<W: Write>(out: &mut W, value: u16) -> io::Result<()> {
    // mutually exclusive permission chain, then independent modifiers
    if value == 0 {
        write!(out, " installable")?;
    } else if value & fs_type::EDITABLE != 0 {
        write!(out, " editable")?;
    } else if value & fs_type::PREVIEW != 0 {
        write!(out, " preview-and-print")?;
    } else if value & fs_type::RESTRICTED != 0 {
        write!(out, " restricted")?;
    }
    if value & fs_type::NO_SUBSETTING != 0 {
        write!(out, " no-subsetting")?;
    }
    if value & fs_type::BITMAP != 0 {
        write!(out, " bitmap-only")?;
    }
    Ok(())
}

/// Write the multi-line report for `header` to `out`.
///
/// The labels, column widths and keyword sets are a fixed format; tests
/// compare against them verbatim.
pub fn write_report<W: Write>(header: &EotHeader, out: &mut W) -> io::Result<()> {
    writeln!(out, "EOTSize:            {}", header.eot_size)?;
    writeln!(out, "FontDataSize:       {}", header.font_data_size)?;
    writeln!(out, "Version:            0x{:08X}", header.tail.version())?;
    writeln!(
        out,
        "Flags:              {} {} {} {}",
        if header.flags & flags::SUBSET != 0 {
            "subsetted"
        } else {
            "not-subsetted"
        },
        if header.flags & flags::TT_COMPRESSED != 0 {
            "compressed"
        } else {
            "not-compressed"
        },
        if header.flags & flags::EMBED_EUDC != 0 {
            "EUDC"
        } else {
            "no-EUDC"
        },
        if header.flags & flags::XOR_ENCRYPT_DATA != 0 {
            "xor"
        } else {
            "no-xor"
        },
    )?;
    writeln!(
        out,
        "PANOSE:             {}",
        header.panose.map(|b| b.to_string()).join(" ")
    )?;
    writeln!(out, "Charset:            {}", header.charset)?;
    writeln!(
        out,
        "Italic:             {}",
        if header.italic != 0 { "yes" } else { "no" }
    )?;
    writeln!(out, "Weight:             {}", header.weight)?;
    write!(out, "fsType:            ")?;
    write_fs_type(out, header.fs_type)?;
    writeln!(out)?;
    write!(out, "UnicodeRange:      ")?;
    write_unicode_ranges(out, &header.unicode_range)?;
    writeln!(out)?;
    writeln!(out, "CodePageRange:      to do...")?;
    writeln!(out, "CheckSumAdjustment: {}", header.checksum_adjustment)?;
    writeln!(
        out,
        "FamilyName:         {}",
        name_to_string(&header.family_name)
    )?;
    writeln!(
        out,
        "StyleName:          {}",
        name_to_string(&header.style_name)
    )?;
    writeln!(
        out,
        "VersionName:        {}",
        name_to_string(&header.version_name)
    )?;
    writeln!(
        out,
        "FullName:           {}",
        name_to_string(&header.full_name)
    )?;
    writeln!(
        out,
        "RootString:         {}",
        root_string_to_string(header.tail.root_string())
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_data::FontData;
    use crate::read::FontRead;
    use pretty_assertions::assert_eq;

    fn range_keywords(word_index: usize, word: u32) -> String {
        let mut ranges = [0u32; 4];
        ranges[word_index] = word;
        let mut out = Vec::new();
        write_unicode_ranges(&mut out, &ranges).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bit_0_is_basic_latin() {
        assert_eq!(range_keywords(0, 0x00000001), " basic-latin");
    }

    #[test]
    fn bits_render_in_ascending_order() {
        assert_eq!(
            range_keywords(0, 0x80000001),
            " basic-latin general-punctuation"
        );
        assert_eq!(range_keywords(3, 1 << 26), " domino-mahjong");
    }

    #[test]
    fn words_render_in_order() {
        let mut out = Vec::new();
        write_unicode_ranges(&mut out, &[1 << 9, 1 << 17, 0, 0]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), " cyrillic hiragana");
    }

    #[test]
    fn every_table_is_complete() {
        for (table, expected) in UNICODE_RANGES.iter().zip([32usize, 32, 32, 27]) {
            assert_eq!(table.len(), expected);
            // ascending, gap-free bit positions
            for (i, &(bit, _)) in table.iter().enumerate() {
                assert_eq!(bit as usize, i);
            }
        }
    }

    #[test]
    fn fs_type_priority_chain() {
        let render = |value| {
            let mut out = Vec::new();
            write_fs_type(&mut out, value).unwrap();
            String::from_utf8(out).unwrap()
        };
        assert_eq!(render(0), " installable");
        assert_eq!(render(fs_type::RESTRICTED), " restricted");
        assert_eq!(render(fs_type::PREVIEW | fs_type::RESTRICTED), " preview-and-print");
        assert_eq!(
            render(fs_type::EDITABLE | fs_type::PREVIEW | fs_type::RESTRICTED),
            " editable"
        );
        assert_eq!(
            render(fs_type::NO_SUBSETTING | fs_type::BITMAP),
            " no-subsetting bitmap-only"
        );
    }

    #[test]
    fn utf8_reencoding() {
        // 'A'
        assert_eq!(name_to_string(&[0x41, 0x00]).as_bytes(), [0x41]);
        // U+20AC EURO SIGN
        assert_eq!(
            name_to_string(&[0xAC, 0x20]).as_bytes(),
            [0xE2, 0x82, 0xAC]
        );
        // U+10000 as a surrogate pair; four bytes starting 0xF0
        assert_eq!(
            name_to_string(&[0x00, 0xD8, 0x00, 0xDC]).as_bytes(),
            [0xF0, 0x90, 0x80, 0x80]
        );
    }

    #[test]
    fn unpaired_surrogate_replaced() {
        assert_eq!(
            name_to_string(&[0x00, 0xD8]),
            char::REPLACEMENT_CHARACTER.to_string()
        );
    }

    #[test]
    fn nul_handling_differs_by_field() {
        let data = [b'a', 0, 0, 0, b'b', 0];
        assert_eq!(name_to_string(&data), "ab");
        assert_eq!(root_string_to_string(&data), "a b");
    }

    #[test]
    fn report_matches_fixture() {
        let header =
            crate::header::EotHeader::read(FontData::new(&eot_test_data::sample_eot())).unwrap();
        let mut out = Vec::new();
        write_report(&header, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            eot_test_data::SAMPLE_EOT_REPORT
        );
    }
}
