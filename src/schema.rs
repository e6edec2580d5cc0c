//! Schema-driven decoding of fixed-size header records.
//!
//! Every SEG-Y header is a fixed-width record: an ordered list of fields,
//! each a fixed number of bytes, laid out back to back. A [`Schema`]
//! describes that layout and [`decode_record`] turns a byte buffer into a
//! [`Record`] holding one [`FieldValue`] per field, in schema order.
//!
//! The textual, binary, and trace headers share this decoder and differ
//! only in their field lists.

use std::fmt;

use crate::textual;
use crate::types::{ByteOrder, TextEncoding};
use crate::{Result, SegyError};

/// The on-disk kind of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    /// Fixed-width text of the given byte length.
    Text(usize),
    /// Opaque bytes kept verbatim (reserved ranges).
    Bytes(usize),
}

impl FieldKind {
    /// Width of the field in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 => 4,
            Self::Text(n) | Self::Bytes(n) => n,
        }
    }
}

/// A named field in a [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Layout of a fixed-size record.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Human-readable record name, used in errors.
    pub name: &'static str,
    pub fields: &'static [Field],
    /// Encoding applied to [`FieldKind::Text`] fields.
    pub text_encoding: TextEncoding,
}

impl Schema {
    /// Total record width: the sum of all field widths.
    pub fn width(&self) -> usize {
        self.fields.iter().map(|f| f.kind.width()).sum()
    }

    /// Byte offset of the named field from the start of the record.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        let mut offset = 0;
        for field in self.fields {
            if field.name == name {
                return Some(offset);
            }
            offset += field.kind.width();
        }
        None
    }
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    Text(String),
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Widen any integer value to `i64`. Text and byte values yield `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::U8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::U16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::U32(v) => Some(v.into()),
            Self::Text(_) | Self::Bytes(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

/// A decoded record: field names paired with values, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(&'static str, FieldValue)>,
}

impl Record {
    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Look up an integer field by name, widened to `i64`.
    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_i64)
    }

    /// Iterate over `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (*n, v))
    }

    /// Field names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Decode `data` according to `schema`, reading integers in `byte_order`.
///
/// Bytes past the schema width are ignored. Text and opaque fields are
/// copied byte-for-byte regardless of `byte_order`.
pub fn decode_record(data: &[u8], schema: &Schema, byte_order: ByteOrder) -> Result<Record> {
    let width = schema.width();
    if data.len() < width {
        return Err(SegyError::TruncatedRecord {
            schema: schema.name,
            expected: width,
            actual: data.len(),
        });
    }

    let mut fields = Vec::with_capacity(schema.fields.len());
    let mut offset = 0;
    for field in schema.fields {
        let n = field.kind.width();
        let bytes = &data[offset..offset + n];
        let value = decode_field(bytes, field.kind, byte_order, schema.text_encoding);
        fields.push((field.name, value));
        offset += n;
    }
    Ok(Record { fields })
}

fn decode_field(
    bytes: &[u8],
    kind: FieldKind,
    byte_order: ByteOrder,
    text_encoding: TextEncoding,
) -> FieldValue {
    match kind {
        FieldKind::I8 => FieldValue::I8(bytes[0] as i8),
        FieldKind::U8 => FieldValue::U8(bytes[0]),
        FieldKind::I16 => FieldValue::I16(read_u16(bytes, byte_order) as i16),
        FieldKind::U16 => FieldValue::U16(read_u16(bytes, byte_order)),
        FieldKind::I32 => FieldValue::I32(read_u32(bytes, byte_order) as i32),
        FieldKind::U32 => FieldValue::U32(read_u32(bytes, byte_order)),
        FieldKind::Text(_) => FieldValue::Text(textual::decode_text(bytes, text_encoding)),
        FieldKind::Bytes(_) => FieldValue::Bytes(bytes.to_vec()),
    }
}

fn read_u16(bytes: &[u8], byte_order: ByteOrder) -> u16 {
    let raw = [bytes[0], bytes[1]];
    match byte_order {
        ByteOrder::Big => u16::from_be_bytes(raw),
        ByteOrder::Little => u16::from_le_bytes(raw),
    }
}

fn read_u32(bytes: &[u8], byte_order: ByteOrder) -> u32 {
    let raw = [bytes[0], bytes[1], bytes[2], bytes[3]];
    match byte_order {
        ByteOrder::Big => u32::from_be_bytes(raw),
        ByteOrder::Little => u32::from_le_bytes(raw),
    }
}
