//! Whole-file reading: headers first, then traces.
//!
//! [`SegyReader`] reads the textual and binary headers from any
//! `Read + Seek` source, resolves the decoding context, and hands out a
//! [`TraceReader`] for the traces. [`read_segy`] drains everything into a
//! [`Dataset`].

use std::io::{Read, Seek, SeekFrom};

use tracing::debug;

use crate::Result;
use crate::binary::{self, BINARY_HEADER_OFFSET, BINARY_HEADER_SIZE, BinaryHeader};
use crate::context::{DecodingContext, ReaderOptions};
use crate::reader::{TraceReader, read_full};
use crate::textual::{TEXTUAL_HEADER_SIZE, TextualHeader};
use crate::trace::Trace;
use crate::types::ByteOrder;

/// Absolute file offset of the first trace header.
pub const FIRST_TRACE_OFFSET: u64 = 3600;

/// A SEG-Y source with its headers decoded.
///
/// The source is owned by the reader; dropping the reader (or the
/// [`TraceReader`] from [`traces`](Self::traces)) releases it.
pub struct SegyReader<R> {
    source: R,
    textual_header: TextualHeader,
    binary_header: BinaryHeader,
    context: DecodingContext,
}

impl<R: Read + Seek> SegyReader<R> {
    /// Read the headers with default options.
    pub fn new(source: R) -> Result<Self> {
        Self::with_options(source, ReaderOptions::default())
    }

    /// Read the headers, honoring `options`.
    pub fn with_options(mut source: R, options: ReaderOptions) -> Result<Self> {
        let mut textual = vec![0u8; TEXTUAL_HEADER_SIZE];
        source.seek(SeekFrom::Start(0))?;
        let n = read_full(&mut source, &mut textual)?;
        let textual_header = TextualHeader::decode(&textual[..n])?;

        let mut raw = [0u8; BINARY_HEADER_SIZE];
        source.seek(SeekFrom::Start(BINARY_HEADER_OFFSET))?;
        let n = read_full(&mut source, &mut raw)?;
        let binary_header = match options.byte_order {
            Some(order) => binary::decode_binary_header(&raw[..n], order)?,
            None => binary::resolve_binary_header(&raw[..n], ByteOrder::Big)?,
        };
        if binary_header.byte_order() != ByteOrder::Big {
            debug!(
                byte_order = %binary_header.byte_order(),
                "binary header is not big-endian"
            );
        }

        let context = DecodingContext::from_binary_header(&binary_header, &options)?;
        debug!(
            byte_order = %context.byte_order,
            format = %context.sample_format,
            samples_per_trace = context.samples_per_trace,
            sample_interval_micros = context.sample_interval_micros,
            "resolved SEG-Y headers"
        );

        Ok(Self {
            source,
            textual_header,
            binary_header,
            context,
        })
    }

    pub fn textual_header(&self) -> &TextualHeader {
        &self.textual_header
    }

    pub fn binary_header(&self) -> &BinaryHeader {
        &self.binary_header
    }

    pub fn context(&self) -> &DecodingContext {
        &self.context
    }

    /// Seek to the first trace and stream traces from there.
    pub fn traces(mut self) -> Result<TraceReader<R>> {
        self.source.seek(SeekFrom::Start(FIRST_TRACE_OFFSET))?;
        TraceReader::new(self.source, self.context)
    }

    /// Read every trace into memory.
    pub fn read_all(self) -> Result<Dataset> {
        let textual_header = self.textual_header.clone();
        let binary_header = self.binary_header.clone();
        let context = self.context;
        let mut reader = self.traces()?;
        let traces = reader.by_ref().collect::<Result<Vec<_>>>()?;
        debug!(
            traces = traces.len(),
            trailing_bytes = reader.trailing_bytes(),
            "read SEG-Y dataset"
        );
        Ok(Dataset {
            textual_header,
            binary_header,
            context,
            traces,
        })
    }
}

/// A fully loaded SEG-Y file.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub textual_header: TextualHeader,
    pub binary_header: BinaryHeader,
    pub context: DecodingContext,
    /// Traces in on-disk order.
    pub traces: Vec<Trace>,
}

impl Dataset {
    /// Number of traces.
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trace> {
        self.traces.iter()
    }

    /// Samples per trace, uniform across the file.
    pub fn samples_per_trace(&self) -> usize {
        self.context.samples_per_trace
    }

    /// Sample interval in microseconds, uniform across the file.
    pub fn sample_interval_micros(&self) -> u16 {
        self.context.sample_interval_micros
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Trace;
    type IntoIter = std::slice::Iter<'a, Trace>;

    fn into_iter(self) -> Self::IntoIter {
        self.traces.iter()
    }
}

/// Read a whole SEG-Y file from `source`.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use std::io::BufReader;
///
/// let file = BufReader::new(File::open("line42.sgy")?);
/// let dataset = segy_rs::read_segy(file)?;
/// for trace in &dataset {
///     println!("{trace}");
/// }
/// # Ok::<(), segy_rs::SegyError>(())
/// ```
pub fn read_segy<R: Read + Seek>(source: R) -> Result<Dataset> {
    SegyReader::new(source)?.read_all()
}
