//! Streaming trace reader.
//!
//! [`TraceReader`] pulls one trace at a time from any [`Read`] source
//! positioned at the first trace header (file offset 3600). Each step reads
//! a 240-byte header and `4 * ns` bytes of IBM float samples.

use std::io::{ErrorKind, Read};
use std::iter::FusedIterator;

use crate::context::DecodingContext;
use crate::ibm;
use crate::trace::{TRACE_HEADER_SIZE, Trace, TraceHeader};
use crate::types::SampleFormat;
use crate::{Result, SegyError};

/// Iterator over the traces of a SEG-Y byte stream.
///
/// Iteration ends normally when fewer than 240 bytes remain. A trace whose
/// sample block is cut short yields [`SegyError::TruncatedTrace`]. After
/// any error the iterator is exhausted.
///
/// # Example
///
/// ```
/// use segy_rs::{DecodingContext, TraceReader, ieee_to_ibm};
///
/// let mut stream = vec![0u8; 240];
/// for x in [1.0f32, -2.0] {
///     stream.extend_from_slice(&ieee_to_ibm(x).to_be_bytes());
/// }
///
/// let reader = TraceReader::new(stream.as_slice(), DecodingContext::ibm(2, 1000)).unwrap();
/// let traces: Vec<_> = reader.collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(traces.len(), 1);
/// assert_eq!(traces[0].samples, vec![1.0, -2.0]);
/// ```
pub struct TraceReader<R> {
    source: R,
    context: DecodingContext,
    index: usize,
    trailing: usize,
    done: bool,
    header_buf: [u8; TRACE_HEADER_SIZE],
    sample_buf: Vec<u8>,
}

impl<R: Read> TraceReader<R> {
    /// Create a reader over `source` using the file's decoding context.
    ///
    /// Only IBM float samples (format code 1) are decoded; any other format
    /// fails with [`SegyError::UnsupportedSampleFormat`]. A sample count
    /// above [`MAX_SAMPLES_PER_TRACE`](crate::context::MAX_SAMPLES_PER_TRACE)
    /// fails with [`SegyError::TooManySamples`].
    pub fn new(source: R, context: DecodingContext) -> Result<Self> {
        context.validate()?;
        if context.sample_format != SampleFormat::IbmFloat32 {
            return Err(SegyError::UnsupportedSampleFormat(context.sample_format));
        }
        Ok(Self {
            source,
            context,
            index: 0,
            trailing: 0,
            done: false,
            header_buf: [0; TRACE_HEADER_SIZE],
            sample_buf: vec![0; context.sample_bytes()],
        })
    }

    pub fn context(&self) -> &DecodingContext {
        &self.context
    }

    /// Number of traces yielded so far.
    pub fn traces_read(&self) -> usize {
        self.index
    }

    /// Bytes left over after the last whole trace, once the stream has
    /// ended. Zero until then.
    pub fn trailing_bytes(&self) -> usize {
        self.trailing
    }

    /// Give back the underlying source.
    pub fn into_inner(self) -> R {
        self.source
    }

    fn read_trace(&mut self) -> Result<Option<Trace>> {
        let n = read_full(&mut self.source, &mut self.header_buf)?;
        if n < TRACE_HEADER_SIZE {
            self.trailing = n;
            return Ok(None);
        }
        let header = TraceHeader::decode(&self.header_buf)?;

        let expected = self.sample_buf.len();
        let got = read_full(&mut self.source, &mut self.sample_buf)?;
        if got < expected {
            return Err(SegyError::TruncatedTrace {
                index: self.index,
                expected,
                actual: got,
            });
        }

        let mut samples = Vec::with_capacity(self.context.samples_per_trace);
        ibm::decode_ibm_be(&self.sample_buf, &mut samples);

        self.index += 1;
        Ok(Some(Trace { header, samples }))
    }
}

impl<R: Read> Iterator for TraceReader<R> {
    type Item = Result<Trace>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_trace() {
            Ok(Some(trace)) => Some(Ok(trace)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> FusedIterator for TraceReader<R> {}

/// Fill `buf` from `source`, stopping early only at end of stream.
///
/// Returns the number of bytes read.
pub(crate) fn read_full<R: Read>(source: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
