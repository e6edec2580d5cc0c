//! Reader configuration and the resolved per-file decoding context.

use crate::binary::BinaryHeader;
use crate::trace::TRACE_HEADER_SIZE;
use crate::types::{ByteOrder, SampleFormat};
use crate::{Result, SegyError};

/// Largest samples-per-trace count, bounded by the 2-byte `hns` field.
pub const MAX_SAMPLES_PER_TRACE: usize = u16::MAX as usize;

/// Caller-supplied reader options.
///
/// # Example
///
/// ```
/// use segy_rs::{ByteOrder, ReaderOptions};
///
/// let options = ReaderOptions::new()
///     .with_byte_order(ByteOrder::Little)
///     .with_samples_per_trace(1001);
/// assert_eq!(options.byte_order, Some(ByteOrder::Little));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Force the binary header byte order instead of detecting it.
    pub byte_order: Option<ByteOrder>,
    /// Override the binary header's samples-per-trace count.
    ///
    /// Values above [`MAX_SAMPLES_PER_TRACE`] are rejected when the reader
    /// is built.
    pub samples_per_trace: Option<usize>,
}

impl ReaderOptions {
    /// Options with byte order detection and the header's sample count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the binary header in this byte order, skipping detection.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = Some(byte_order);
        self
    }

    /// Decode every trace with this many samples.
    pub fn with_samples_per_trace(mut self, samples: usize) -> Self {
        self.samples_per_trace = Some(samples);
        self
    }
}

/// Decoding parameters fixed for the whole file.
///
/// Built once from the binary header and handed to the trace reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodingContext {
    /// Byte order of the binary header. Trace headers are always big-endian.
    pub byte_order: ByteOrder,
    pub sample_format: SampleFormat,
    pub samples_per_trace: usize,
    pub sample_interval_micros: u16,
}

impl DecodingContext {
    /// Derive the context from a resolved binary header.
    pub fn from_binary_header(header: &BinaryHeader, options: &ReaderOptions) -> Result<Self> {
        let code = header.sample_format_code();
        let sample_format = SampleFormat::from_code(code).ok_or_else(|| {
            let swapped = code.swap_bytes();
            let (big_endian, little_endian) = match header.byte_order() {
                ByteOrder::Big => (code, swapped),
                ByteOrder::Little => (swapped, code),
            };
            SegyError::InvalidFormatCode {
                big_endian,
                little_endian,
            }
        })?;
        let samples_per_trace = options
            .samples_per_trace
            .unwrap_or(header.samples_per_trace() as usize);

        let context = Self {
            byte_order: header.byte_order(),
            sample_format,
            samples_per_trace,
            sample_interval_micros: header.sample_interval_micros(),
        };
        context.validate()?;
        Ok(context)
    }

    /// Check that the sample count fits the format's limits.
    pub fn validate(&self) -> Result<()> {
        if self.samples_per_trace > MAX_SAMPLES_PER_TRACE {
            return Err(SegyError::TooManySamples {
                requested: self.samples_per_trace,
                max: MAX_SAMPLES_PER_TRACE,
            });
        }
        Ok(())
    }

    /// A context for IBM float data, for decoding a bare trace stream.
    pub fn ibm(samples_per_trace: usize, sample_interval_micros: u16) -> Self {
        Self {
            byte_order: ByteOrder::Big,
            sample_format: SampleFormat::IbmFloat32,
            samples_per_trace,
            sample_interval_micros,
        }
    }

    /// Bytes of sample data per trace. Saturates instead of overflowing.
    pub fn sample_bytes(&self) -> usize {
        self.samples_per_trace
            .saturating_mul(self.sample_format.bytes_per_sample())
    }

    /// Bytes per trace: header plus samples.
    pub fn trace_size(&self) -> usize {
        TRACE_HEADER_SIZE.saturating_add(self.sample_bytes())
    }

    /// Sample interval in seconds.
    pub fn sample_interval_secs(&self) -> f64 {
        self.sample_interval_micros as f64 / 1e6
    }
}
