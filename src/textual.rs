//! The 3200-byte textual file header.
//!
//! SEG-Y rev 0 stores 40 card images of 80 columns in EBCDIC. Rev 1 also
//! allows ASCII; the encoding is detected from the first byte, which by
//! convention is the `C` of the first card (`0xC3` in EBCDIC, `0x43` in
//! ASCII).

use std::fmt;

use crate::Result;
use crate::schema::{self, Field, FieldKind, Schema};
use crate::types::{ByteOrder, TextEncoding};

/// Size of the textual header in bytes.
pub const TEXTUAL_HEADER_SIZE: usize = 3200;
/// Number of 80-column lines in the textual header.
pub const TEXTUAL_HEADER_LINES: usize = 40;
/// Width of one textual header line.
pub const TEXTUAL_LINE_WIDTH: usize = 80;

const LINE: FieldKind = FieldKind::Text(TEXTUAL_LINE_WIDTH);

const TEXTUAL_FIELDS: &[Field] = &[
    Field::new("line01", LINE),
    Field::new("line02", LINE),
    Field::new("line03", LINE),
    Field::new("line04", LINE),
    Field::new("line05", LINE),
    Field::new("line06", LINE),
    Field::new("line07", LINE),
    Field::new("line08", LINE),
    Field::new("line09", LINE),
    Field::new("line10", LINE),
    Field::new("line11", LINE),
    Field::new("line12", LINE),
    Field::new("line13", LINE),
    Field::new("line14", LINE),
    Field::new("line15", LINE),
    Field::new("line16", LINE),
    Field::new("line17", LINE),
    Field::new("line18", LINE),
    Field::new("line19", LINE),
    Field::new("line20", LINE),
    Field::new("line21", LINE),
    Field::new("line22", LINE),
    Field::new("line23", LINE),
    Field::new("line24", LINE),
    Field::new("line25", LINE),
    Field::new("line26", LINE),
    Field::new("line27", LINE),
    Field::new("line28", LINE),
    Field::new("line29", LINE),
    Field::new("line30", LINE),
    Field::new("line31", LINE),
    Field::new("line32", LINE),
    Field::new("line33", LINE),
    Field::new("line34", LINE),
    Field::new("line35", LINE),
    Field::new("line36", LINE),
    Field::new("line37", LINE),
    Field::new("line38", LINE),
    Field::new("line39", LINE),
    Field::new("line40", LINE),
];

/// Textual header layout for EBCDIC files.
pub const TEXTUAL_HEADER_EBCDIC: Schema = Schema {
    name: "textual header",
    fields: TEXTUAL_FIELDS,
    text_encoding: TextEncoding::Ebcdic,
};

/// Textual header layout for ASCII files.
pub const TEXTUAL_HEADER_ASCII: Schema = Schema {
    name: "textual header",
    fields: TEXTUAL_FIELDS,
    text_encoding: TextEncoding::Ascii,
};

/// EBCDIC code page 500 to Latin-1. Every code point maps into U+0000..=U+00FF.
const EBCDIC_TO_LATIN1: [u8; 256] = [
    0x00, 0x01, 0x02, 0x03, 0x9C, 0x09, 0x86, 0x7F, 0x97, 0x8D, 0x8E, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F,
    0x10, 0x11, 0x12, 0x13, 0x9D, 0x85, 0x08, 0x87, 0x18, 0x19, 0x92, 0x8F, 0x1C, 0x1D, 0x1E, 0x1F,
    0x80, 0x81, 0x82, 0x83, 0x84, 0x0A, 0x17, 0x1B, 0x88, 0x89, 0x8A, 0x8B, 0x8C, 0x05, 0x06, 0x07,
    0x90, 0x91, 0x16, 0x93, 0x94, 0x95, 0x96, 0x04, 0x98, 0x99, 0x9A, 0x9B, 0x14, 0x15, 0x9E, 0x1A,
    0x20, 0xA0, 0xE2, 0xE4, 0xE0, 0xE1, 0xE3, 0xE5, 0xE7, 0xF1, 0x5B, 0x2E, 0x3C, 0x28, 0x2B, 0x21,
    0x26, 0xE9, 0xEA, 0xEB, 0xE8, 0xED, 0xEE, 0xEF, 0xEC, 0xDF, 0x5D, 0x24, 0x2A, 0x29, 0x3B, 0x5E,
    0x2D, 0x2F, 0xC2, 0xC4, 0xC0, 0xC1, 0xC3, 0xC5, 0xC7, 0xD1, 0xA6, 0x2C, 0x25, 0x5F, 0x3E, 0x3F,
    0xF8, 0xC9, 0xCA, 0xCB, 0xC8, 0xCD, 0xCE, 0xCF, 0xCC, 0x60, 0x3A, 0x23, 0x40, 0x27, 0x3D, 0x22,
    0xD8, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0xAB, 0xBB, 0xF0, 0xFD, 0xFE, 0xB1,
    0xB0, 0x6A, 0x6B, 0x6C, 0x6D, 0x6E, 0x6F, 0x70, 0x71, 0x72, 0xAA, 0xBA, 0xE6, 0xB8, 0xC6, 0xA4,
    0xB5, 0x7E, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7A, 0xA1, 0xBF, 0xD0, 0xDD, 0xDE, 0xAE,
    0xA2, 0xA3, 0xA5, 0xB7, 0xA9, 0xA7, 0xB6, 0xBC, 0xBD, 0xBE, 0xAC, 0x7C, 0xAF, 0xA8, 0xB4, 0xD7,
    0x7B, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0xAD, 0xF4, 0xF6, 0xF2, 0xF3, 0xF5,
    0x7D, 0x4A, 0x4B, 0x4C, 0x4D, 0x4E, 0x4F, 0x50, 0x51, 0x52, 0xB9, 0xFB, 0xFC, 0xF9, 0xFA, 0xFF,
    0x5C, 0xF7, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5A, 0xB2, 0xD4, 0xD6, 0xD2, 0xD3, 0xD5,
    0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0xB3, 0xDB, 0xDC, 0xD9, 0xDA, 0x9F,
];

/// Decode fixed-width text bytes into a `String`, one char per byte.
pub(crate) fn decode_text(bytes: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Ebcdic => bytes
            .iter()
            .map(|&b| char::from(EBCDIC_TO_LATIN1[b as usize]))
            .collect(),
        TextEncoding::Ascii => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Guess the textual header encoding.
///
/// ASCII when the first byte is `C`, or when the first card is printable
/// ASCII containing at least one ASCII space. EBCDIC text never contains
/// `0x20` (its blank is `0x40`), so that test cannot misfire on a blank
/// EBCDIC card. Anything else is EBCDIC.
pub fn detect_encoding(data: &[u8]) -> TextEncoding {
    if data.first() == Some(&b'C') {
        return TextEncoding::Ascii;
    }
    let card = &data[..data.len().min(TEXTUAL_LINE_WIDTH)];
    let printable = card.iter().all(|b| (0x20..=0x7E).contains(b));
    if printable && card.contains(&b' ') {
        TextEncoding::Ascii
    } else {
        TextEncoding::Ebcdic
    }
}

/// Decoded textual file header: 40 lines of 80 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextualHeader {
    lines: Vec<String>,
    encoding: TextEncoding,
}

impl TextualHeader {
    /// Decode a 3200-byte textual header, detecting its encoding.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let encoding = detect_encoding(data);
        let schema = match encoding {
            TextEncoding::Ebcdic => &TEXTUAL_HEADER_EBCDIC,
            TextEncoding::Ascii => &TEXTUAL_HEADER_ASCII,
        };
        // Text fields carry no byte order.
        let record = schema::decode_record(data, schema, ByteOrder::Big)?;
        let lines = record
            .iter()
            .map(|(_, value)| value.as_str().unwrap_or_default().to_string())
            .collect();
        Ok(Self { lines, encoding })
    }

    /// The 40 lines, each exactly 80 characters, untrimmed.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// A single line by zero-based index.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Encoding the header was stored in.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// All lines with trailing whitespace removed, joined with `\n`.
    pub fn as_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for TextualHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text())
    }
}
