//! Trace headers and decoded traces.
//!
//! Trace headers are always decoded big-endian, independently of the byte
//! order detected for the binary header.

use std::fmt;

use crate::Result;
use crate::schema::{self, Field, FieldKind, FieldValue, Record, Schema};
use crate::types::{ByteOrder, TextEncoding};

/// Size of a trace header in bytes.
pub const TRACE_HEADER_SIZE: usize = 240;

/// Byte order used for every trace header.
pub const TRACE_HEADER_BYTE_ORDER: ByteOrder = ByteOrder::Big;

const TRACE_FIELDS: &[Field] = &[
    Field::new("trace_sequence_line", FieldKind::I32),
    Field::new("trace_sequence_file", FieldKind::I32),
    Field::new("field_record", FieldKind::I32),
    Field::new("trace_number", FieldKind::I32),
    Field::new("energy_source_point", FieldKind::I32),
    Field::new("cdp", FieldKind::I32),
    Field::new("cdp_trace", FieldKind::I32),
    Field::new("trace_id_code", FieldKind::I16),
    Field::new("vertically_summed_traces", FieldKind::I16),
    Field::new("horizontally_stacked_traces", FieldKind::I16),
    Field::new("data_use", FieldKind::I16),
    Field::new("offset", FieldKind::I32),
    Field::new("receiver_group_elevation", FieldKind::I32),
    Field::new("source_surface_elevation", FieldKind::I32),
    Field::new("source_depth", FieldKind::I32),
    Field::new("receiver_datum_elevation", FieldKind::I32),
    Field::new("source_datum_elevation", FieldKind::I32),
    Field::new("source_water_depth", FieldKind::I32),
    Field::new("group_water_depth", FieldKind::I32),
    Field::new("elevation_scalar", FieldKind::I16),
    Field::new("coordinate_scalar", FieldKind::I16),
    Field::new("source_x", FieldKind::I32),
    Field::new("source_y", FieldKind::I32),
    Field::new("group_x", FieldKind::I32),
    Field::new("group_y", FieldKind::I32),
    Field::new("coordinate_units", FieldKind::I16),
    Field::new("weathering_velocity", FieldKind::I16),
    Field::new("subweathering_velocity", FieldKind::I16),
    Field::new("source_uphole_time", FieldKind::I16),
    Field::new("group_uphole_time", FieldKind::I16),
    Field::new("source_static_correction", FieldKind::I16),
    Field::new("group_static_correction", FieldKind::I16),
    Field::new("total_static", FieldKind::I16),
    Field::new("lag_time_a", FieldKind::I16),
    Field::new("lag_time_b", FieldKind::I16),
    Field::new("delay_recording_time", FieldKind::I16),
    Field::new("mute_time_start", FieldKind::I16),
    Field::new("mute_time_end", FieldKind::I16),
    Field::new("samples", FieldKind::I16),
    Field::new("sample_interval", FieldKind::I16),
    Field::new("gain_type", FieldKind::I16),
    Field::new("instrument_gain_constant", FieldKind::I16),
    Field::new("instrument_initial_gain", FieldKind::I16),
    Field::new("correlated", FieldKind::I16),
    Field::new("sweep_frequency_start", FieldKind::I16),
    Field::new("sweep_frequency_end", FieldKind::I16),
    Field::new("sweep_length", FieldKind::I16),
    Field::new("sweep_type", FieldKind::I16),
    Field::new("sweep_taper_start", FieldKind::I16),
    Field::new("sweep_taper_end", FieldKind::I16),
    Field::new("taper_type", FieldKind::I16),
    Field::new("alias_filter_frequency", FieldKind::I16),
    Field::new("alias_filter_slope", FieldKind::I16),
    Field::new("notch_filter_frequency", FieldKind::I16),
    Field::new("notch_filter_slope", FieldKind::I16),
    Field::new("low_cut_frequency", FieldKind::I16),
    Field::new("high_cut_frequency", FieldKind::I16),
    Field::new("low_cut_slope", FieldKind::I16),
    Field::new("high_cut_slope", FieldKind::I16),
    Field::new("year", FieldKind::I16),
    Field::new("day_of_year", FieldKind::I16),
    Field::new("hour", FieldKind::I16),
    Field::new("minute", FieldKind::I16),
    Field::new("second", FieldKind::I16),
    Field::new("time_basis_code", FieldKind::I16),
    Field::new("trace_weighting_factor", FieldKind::I16),
    Field::new("geophone_group_roll_switch", FieldKind::I16),
    Field::new("geophone_group_first_trace", FieldKind::I16),
    Field::new("geophone_group_last_trace", FieldKind::I16),
    Field::new("gap_size", FieldKind::I16),
    Field::new("over_travel", FieldKind::I16),
    Field::new("cdp_x", FieldKind::I32),
    Field::new("cdp_y", FieldKind::I32),
    Field::new("inline", FieldKind::I32),
    Field::new("crossline", FieldKind::I32),
    Field::new("shotpoint", FieldKind::I32),
    Field::new("shotpoint_scalar", FieldKind::I16),
    Field::new("trace_value_unit", FieldKind::I16),
    Field::new("transduction_constant_mantissa", FieldKind::I32),
    Field::new("transduction_constant_exponent", FieldKind::I16),
    Field::new("transduction_unit", FieldKind::I16),
    Field::new("device_id", FieldKind::I16),
    Field::new("time_scalar", FieldKind::I16),
    Field::new("source_type", FieldKind::I16),
    Field::new("source_energy_direction", FieldKind::I32),
    Field::new("source_energy_direction_ext", FieldKind::I16),
    Field::new("source_measurement_mantissa", FieldKind::I32),
    Field::new("source_measurement_exponent", FieldKind::I16),
    Field::new("source_measurement_unit", FieldKind::I16),
    Field::new("unassigned_1", FieldKind::I32),
    Field::new("unassigned_2", FieldKind::I32),
];

/// Trace header layout.
pub const TRACE_HEADER: Schema = Schema {
    name: "trace header",
    fields: TRACE_FIELDS,
    text_encoding: TextEncoding::Ebcdic,
};

/// Decoded 240-byte trace header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceHeader {
    record: Record,
}

impl TraceHeader {
    /// Decode a trace header (always big-endian).
    pub fn decode(data: &[u8]) -> Result<Self> {
        let record = schema::decode_record(data, &TRACE_HEADER, TRACE_HEADER_BYTE_ORDER)?;
        Ok(Self { record })
    }

    /// All fields, in on-disk order.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Look up any field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.record.get(name)
    }

    pub fn trace_sequence_line(&self) -> i32 {
        self.int("trace_sequence_line") as i32
    }

    pub fn trace_sequence_file(&self) -> i32 {
        self.int("trace_sequence_file") as i32
    }

    pub fn field_record(&self) -> i32 {
        self.int("field_record") as i32
    }

    pub fn trace_number(&self) -> i32 {
        self.int("trace_number") as i32
    }

    pub fn cdp(&self) -> i32 {
        self.int("cdp") as i32
    }

    pub fn trace_id_code(&self) -> i16 {
        self.int("trace_id_code") as i16
    }

    /// Source to receiver distance.
    pub fn offset(&self) -> i32 {
        self.int("offset") as i32
    }

    pub fn coordinate_scalar(&self) -> i16 {
        self.int("coordinate_scalar") as i16
    }

    pub fn source_x(&self) -> i32 {
        self.int("source_x") as i32
    }

    pub fn source_y(&self) -> i32 {
        self.int("source_y") as i32
    }

    pub fn group_x(&self) -> i32 {
        self.int("group_x") as i32
    }

    pub fn group_y(&self) -> i32 {
        self.int("group_y") as i32
    }

    /// Sample count recorded in this trace's header.
    ///
    /// Not used for decoding: the binary header's count applies to every trace.
    pub fn samples(&self) -> i16 {
        self.int("samples") as i16
    }

    /// Sample interval recorded in this trace's header, in microseconds.
    pub fn sample_interval(&self) -> i16 {
        self.int("sample_interval") as i16
    }

    pub fn cdp_x(&self) -> i32 {
        self.int("cdp_x") as i32
    }

    pub fn cdp_y(&self) -> i32 {
        self.int("cdp_y") as i32
    }

    pub fn inline(&self) -> i32 {
        self.int("inline") as i32
    }

    pub fn crossline(&self) -> i32 {
        self.int("crossline") as i32
    }

    /// Apply the coordinate scalar to a raw coordinate.
    ///
    /// Positive scalars multiply, negative scalars divide, zero is a no-op.
    pub fn scale_coordinate(&self, raw: i32) -> f64 {
        apply_scalar(raw, self.coordinate_scalar())
    }

    fn int(&self, name: &str) -> i64 {
        let value = self.record.int(name);
        debug_assert!(value.is_some(), "no integer field named {name}");
        value.unwrap_or_default()
    }
}

fn apply_scalar(raw: i32, scalar: i16) -> f64 {
    match scalar {
        0 => raw as f64,
        s if s > 0 => raw as f64 * s as f64,
        s => raw as f64 / -(s as f64),
    }
}

/// One trace: its header and decoded samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub header: TraceHeader,
    pub samples: Vec<f32>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trace {} | cdp {} | il {} xl {} | {} samples",
            self.header.trace_sequence_line(),
            self.header.cdp(),
            self.header.inline(),
            self.header.crossline(),
            self.samples.len(),
        )
    }
}
