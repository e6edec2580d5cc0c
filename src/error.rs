//! Error types for SEG-Y decoding.

use thiserror::Error;

use crate::types::SampleFormat;

#[derive(Debug, Error)]
pub enum SegyError {
    #[error("{schema} record too short: expected {expected} bytes, got {actual}")]
    TruncatedRecord {
        schema: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(
        "invalid sample format code: {big_endian} as big-endian, {little_endian} as little-endian"
    )]
    InvalidFormatCode { big_endian: i16, little_endian: i16 },

    #[error("unsupported sample format: {0}")]
    UnsupportedSampleFormat(SampleFormat),

    #[error("trace {index} truncated: expected {expected} sample bytes, got {actual}")]
    TruncatedTrace {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("samples per trace {requested} exceeds the maximum of {max}")]
    TooManySamples { requested: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SegyError>;
