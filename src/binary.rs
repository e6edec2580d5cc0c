//! The 400-byte binary file header and byte-order detection.
//!
//! The standard stores the binary header big-endian, but files written on
//! little-endian machines without swapping are common. The sample format
//! code is used as a canary: it must lie in `1..=8`, so a value outside that
//! range means the header was decoded in the wrong byte order.

use crate::schema::{self, Field, FieldKind, FieldValue, Record, Schema};
use crate::types::{ByteOrder, SampleFormat, TextEncoding};
use crate::{Result, SegyError};

/// Absolute file offset of the binary header.
pub const BINARY_HEADER_OFFSET: u64 = 3200;
/// Size of the binary header in bytes.
pub const BINARY_HEADER_SIZE: usize = 400;

const BINARY_FIELDS: &[Field] = &[
    Field::new("job_id", FieldKind::I32),
    Field::new("line_number", FieldKind::I32),
    Field::new("reel_number", FieldKind::I32),
    Field::new("traces_per_ensemble", FieldKind::I16),
    Field::new("auxiliary_traces_per_ensemble", FieldKind::I16),
    Field::new("sample_interval_micros", FieldKind::U16),
    Field::new("original_sample_interval_micros", FieldKind::U16),
    Field::new("samples_per_trace", FieldKind::U16),
    Field::new("original_samples_per_trace", FieldKind::U16),
    Field::new("sample_format_code", FieldKind::I16),
    Field::new("ensemble_fold", FieldKind::I16),
    Field::new("trace_sorting_code", FieldKind::I16),
    Field::new("vertical_sum_code", FieldKind::I16),
    Field::new("sweep_frequency_start", FieldKind::I16),
    Field::new("sweep_frequency_end", FieldKind::I16),
    Field::new("sweep_length", FieldKind::I16),
    Field::new("sweep_type_code", FieldKind::I16),
    Field::new("sweep_channel_trace", FieldKind::I16),
    Field::new("sweep_taper_start", FieldKind::I16),
    Field::new("sweep_taper_end", FieldKind::I16),
    Field::new("taper_type", FieldKind::I16),
    Field::new("correlated_traces", FieldKind::I16),
    Field::new("binary_gain_recovered", FieldKind::I16),
    Field::new("amplitude_recovery_method", FieldKind::I16),
    Field::new("measurement_system", FieldKind::I16),
    Field::new("impulse_signal_polarity", FieldKind::I16),
    Field::new("vibratory_polarity_code", FieldKind::I16),
    Field::new("unassigned_1", FieldKind::Bytes(240)),
    Field::new("segy_revision", FieldKind::I16),
    Field::new("fixed_length_flag", FieldKind::I16),
    Field::new("extended_header_count", FieldKind::I16),
    Field::new("unassigned_2", FieldKind::Bytes(94)),
];

/// Binary file header layout.
pub const BINARY_HEADER: Schema = Schema {
    name: "binary header",
    fields: BINARY_FIELDS,
    text_encoding: TextEncoding::Ebcdic,
};

/// Decoded binary file header together with the byte order it was read in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryHeader {
    byte_order: ByteOrder,
    record: Record,
}

impl BinaryHeader {
    /// Byte order the integer fields were decoded with.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// All fields, in on-disk order.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Look up any field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.record.get(name)
    }

    pub fn job_id(&self) -> i32 {
        self.int("job_id") as i32
    }

    pub fn line_number(&self) -> i32 {
        self.int("line_number") as i32
    }

    pub fn reel_number(&self) -> i32 {
        self.int("reel_number") as i32
    }

    pub fn traces_per_ensemble(&self) -> i16 {
        self.int("traces_per_ensemble") as i16
    }

    /// Sample interval in microseconds (`hdt`).
    pub fn sample_interval_micros(&self) -> u16 {
        self.int("sample_interval_micros") as u16
    }

    /// Samples per trace (`hns`).
    pub fn samples_per_trace(&self) -> u16 {
        self.int("samples_per_trace") as u16
    }

    pub fn sample_format_code(&self) -> i16 {
        self.int("sample_format_code") as i16
    }

    /// The sample format, if the code lies in `1..=8`.
    pub fn sample_format(&self) -> Option<SampleFormat> {
        SampleFormat::from_code(self.sample_format_code())
    }

    pub fn ensemble_fold(&self) -> i16 {
        self.int("ensemble_fold") as i16
    }

    pub fn trace_sorting_code(&self) -> i16 {
        self.int("trace_sorting_code") as i16
    }

    /// 1 = meters, 2 = feet.
    pub fn measurement_system(&self) -> i16 {
        self.int("measurement_system") as i16
    }

    pub fn segy_revision(&self) -> i16 {
        self.int("segy_revision") as i16
    }

    pub fn fixed_length_flag(&self) -> i16 {
        self.int("fixed_length_flag") as i16
    }

    pub fn extended_header_count(&self) -> i16 {
        self.int("extended_header_count") as i16
    }

    fn int(&self, name: &str) -> i64 {
        let value = self.record.int(name);
        debug_assert!(value.is_some(), "no integer field named {name}");
        value.unwrap_or_default()
    }
}

/// Decode the binary header, detecting its byte order.
///
/// The buffer is first decoded as `preferred`; if the format code is out
/// of range it is decoded again in the reversed order. Fails with
/// [`SegyError::InvalidFormatCode`] when neither order yields a valid code.
///
/// A format code that happens to be valid in the wrong order is not
/// detected.
pub fn resolve_binary_header(data: &[u8], preferred: ByteOrder) -> Result<BinaryHeader> {
    let first = decode_binary_header(data, preferred)?;
    if SampleFormat::is_valid_code(first.sample_format_code()) {
        return Ok(first);
    }

    let second = decode_binary_header(data, preferred.reversed())?;
    if SampleFormat::is_valid_code(second.sample_format_code()) {
        return Ok(second);
    }

    let (big, little) = match preferred {
        ByteOrder::Big => (&first, &second),
        ByteOrder::Little => (&second, &first),
    };
    Err(SegyError::InvalidFormatCode {
        big_endian: big.sample_format_code(),
        little_endian: little.sample_format_code(),
    })
}

/// Decode the binary header in a fixed byte order, without validation.
pub fn decode_binary_header(data: &[u8], byte_order: ByteOrder) -> Result<BinaryHeader> {
    let record = schema::decode_record(data, &BINARY_HEADER, byte_order)?;
    Ok(BinaryHeader { byte_order, record })
}
