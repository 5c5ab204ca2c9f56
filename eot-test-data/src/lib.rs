//! test data shared between the eot crates.

pub mod bebuffer;

use bebuffer::{BeBuffer, LeBuffer};
use eot_types::Tag;

/// A minimal font carrying the three tables EOT conversion requires,
/// with weight 400, fsType 0, and Windows English names
/// family="Test", full="Test Regular".
pub fn minimal_font() -> Vec<u8> {
    minimal_font_with_fs_type(0)
}

/// [`minimal_font`], with the given `OS/2.fsType` value.
pub fn minimal_font_with_fs_type(fs_type: u16) -> Vec<u8> {
    assemble_font(&[
        (b"OS/2", os2_table(400, fs_type)),
        (b"head", head_table(0x00BC_614E)),
        (b"name", name_table()),
    ])
}

/// A font missing the `OS/2` table, for missing-table failure paths.
pub fn font_without_os2() -> Vec<u8> {
    assemble_font(&[(b"head", head_table(0)), (b"name", name_table())])
}

/// A version 4 `OS/2` table, 96 bytes, PANOSE all zero.
pub fn os2_table(weight: u16, fs_type: u16) -> Vec<u8> {
    BeBuffer::new()
        .push(4u16) // version
        .push(500i16) // xAvgCharWidth
        .push(weight) // usWeightClass
        .push(5u16) // usWidthClass
        .push(fs_type) // fsType
        .push(350i16) // ySubscriptXSize
        .push(400i16) // ySubscriptYSize
        .push(0i16) // ySubscriptXOffset
        .push(100i16) // ySubscriptYOffset
        .push(350i16) // ySuperscriptXSize
        .push(400i16) // ySuperscriptYSize
        .push(0i16) // ySuperscriptXOffset
        .push(300i16) // ySuperscriptYOffset
        .push(50i16) // yStrikeoutSize
        .push(250i16) // yStrikeoutPosition
        .push(0i16) // sFamilyClass
        .extend([0u8; 10]) // panose
        .push(0u32) // ulUnicodeRange1
        .push(0u32) // ulUnicodeRange2
        .push(0u32) // ulUnicodeRange3
        .push(0u32) // ulUnicodeRange4
        .push(Tag::new(b"NONE")) // achVendID
        .push(0x0040u16) // fsSelection: REGULAR
        .push(0x0020u16) // usFirstCharIndex
        .push(0x007Eu16) // usLastCharIndex
        .push(800i16) // sTypoAscender
        .push(-200i16) // sTypoDescender
        .push(90i16) // sTypoLineGap
        .push(1000u16) // usWinAscent
        .push(250u16) // usWinDescent
        .push(0u32) // ulCodePageRange1
        .push(0u32) // ulCodePageRange2
        .push(500i16) // sxHeight
        .push(700i16) // sCapHeight
        .push(0u16) // usDefaultChar
        .push(0x0020u16) // usBreakChar
        .push(2u16) // usMaxContext
        .into_data()
}

/// A 54-byte `head` table with the provided checkSumAdjustment.
pub fn head_table(checksum_adjustment: u32) -> Vec<u8> {
    BeBuffer::new()
        .push(0x00010000u32) // version
        .push(0x00010000u32) // fontRevision
        .push(checksum_adjustment) // checkSumAdjustment
        .push(0x5F0F_3CF5u32) // magicNumber
        .push(0x0003u16) // flags
        .push(1000u16) // unitsPerEm
        .push(0u64) // created
        .push(0u64) // modified
        .push(-200i16) // xMin
        .push(-500i16) // yMin
        .push(1200i16) // xMax
        .push(900i16) // yMax
        .push(0u16) // macStyle
        .push(8u16) // lowestRecPPEM
        .push(2i16) // fontDirectionHint
        .push(0i16) // indexToLocFormat
        .push(0i16) // glyphDataFormat
        .into_data()
}

/// A format 0 `name` table with two Windows English records:
/// family (id 1) "Test" and full name (id 4) "Test Regular".
pub fn name_table() -> Vec<u8> {
    BeBuffer::new()
        .push(0u16) // format
        .push(2u16) // count
        .push(30u16) // stringOffset
        // family name
        .push(3u16) // platformID: Windows
        .push(1u16) // encodingID: Unicode BMP
        .push(0x0409u16) // languageID: en-US
        .push(1u16) // nameID
        .push(8u16) // length
        .push(0u16) // offset
        // full name
        .push(3u16)
        .push(1u16)
        .push(0x0409u16)
        .push(4u16) // nameID
        .push(24u16) // length
        .push(8u16) // offset
        .extend("Test".encode_utf16())
        .extend("Test Regular".encode_utf16())
        .into_data()
}

fn assemble_font(tables: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    // See https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory
    let entry_selector = 15 - num_tables.leading_zeros() as u16;
    let search_range = (1u16 << entry_selector) * 16;
    let range_shift = num_tables * 16 - search_range;

    let mut buffer = BeBuffer::new()
        .push(0x00010000u32) // sfnt version 1.0
        .push(num_tables)
        .push(search_range)
        .push(entry_selector)
        .push(range_shift);
    let mut offset = 12 + 16 * tables.len() as u32;
    for (tag, data) in tables {
        buffer = buffer
            .push(Tag::new(tag))
            .push(0u32) // checksum: not consulted when reading
            .push(offset)
            .push(data.len() as u32);
        offset += data.len() as u32;
    }
    let mut font = buffer.into_data();
    for (_, data) in tables {
        font.extend_from_slice(data);
    }
    font
}

/// A complete version 0x00020002 EOT file: a 170-byte header followed by
/// four bytes of stand-in font data.
pub fn sample_eot() -> Vec<u8> {
    LeBuffer::new()
        .push(174u32) // EOTSize
        .push(4u32) // FontDataSize
        .push(0x00020002u32) // Version
        .push(0u32) // Flags
        .extend([2u8, 0, 6, 3, 0, 0, 0, 0, 0, 0]) // FontPANOSE
        .push(1u8) // Charset
        .push(1u8) // Italic
        .push(400u32) // Weight
        .push(0x0108u16) // fsType: editable | no-subsetting
        .push(0x504Cu16) // MagicNumber
        .push(3u32) // UnicodeRange1: basic-latin, latin-1-supplement
        .push(0u32) // UnicodeRange2
        .push(0u32) // UnicodeRange3
        .push(0u32) // UnicodeRange4
        .push(0u32) // CodePageRange1
        .push(0u32) // CodePageRange2
        .push(12_345_678u32) // CheckSumAdjustment
        .push(0u32) // Reserved1
        .push(0u32) // Reserved2
        .push(0u32) // Reserved3
        .push(0u32) // Reserved4
        .push(0u16) // Padding1
        .push(8u16) // FamilyNameSize
        .extend("Test".encode_utf16())
        .push(0u16) // Padding2
        .push(14u16) // StyleNameSize
        .extend("Regular".encode_utf16())
        .push(0u16) // Padding3
        .push(0u16) // VersionNameSize
        .push(0u16) // Padding4
        .push(24u16) // FullNameSize
        .extend("Test Regular".encode_utf16())
        .push(0u16) // Padding5
        .push(4u16) // RootStringSize
        .extend([0x78u8, 0, 0, 0]) // RootString: "x", NUL terminated
        .push(0x5047_533Au32) // RootStringCheckSum: 0x78 ^ 0x50475342
        .push(0u32) // EUDCCodePage
        .push(0u16) // Padding6
        .push(0u16) // SignatureSize
        .push(0u32) // EUDCFlags
        .push(0u32) // EUDCFontSize
        .extend([0x00u8, 0x01, 0x00, 0x00]) // font data
        .into_data()
}

/// The report `eotinfo` prints for [`sample_eot`].
pub static SAMPLE_EOT_REPORT: &str = concat!(
    "EOTSize:            174\n",
    "FontDataSize:       4\n",
    "Version:            0x00020002\n",
    "Flags:              not-subsetted not-compressed no-EUDC no-xor\n",
    "PANOSE:             2 0 6 3 0 0 0 0 0 0\n",
    "Charset:            1\n",
    "Italic:             yes\n",
    "Weight:             400\n",
    "fsType:             editable no-subsetting\n",
    "UnicodeRange:       basic-latin latin-1-supplement\n",
    "CodePageRange:      to do...\n",
    "CheckSumAdjustment: 12345678\n",
    "FamilyName:         Test\n",
    "StyleName:          Regular\n",
    "VersionName:        \n",
    "FullName:           Test Regular\n",
    "RootString:         x \n",
);
