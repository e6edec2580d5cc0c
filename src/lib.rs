//! Pure Rust SEG-Y reader.
//!
//! Reads the 3200-byte textual header (EBCDIC or ASCII), the 400-byte
//! binary header with automatic byte order detection, and streams traces
//! whose samples are stored as IBM hexadecimal floats. Zero `unsafe`,
//! no C dependencies.
//!
//! # Converting IBM floats
//!
//! ```
//! use segy_rs::{ibm_to_ieee, ieee_to_ibm};
//!
//! assert_eq!(ibm_to_ieee(0xC278_0000), -120.0);
//! assert_eq!(ieee_to_ibm(16.0), 0x4210_0000);
//! ```
//!
//! # Reading a file
//!
//! ```
//! use std::io::Cursor;
//! use segy_rs::{SegyReader, ieee_to_ibm};
//!
//! // Minimal file: blank textual header, binary header with ns=2,
//! // IBM float format, and a single trace.
//! let mut data = vec![0x40u8; 3200];
//! let mut binary = [0u8; 400];
//! binary[16..18].copy_from_slice(&1000u16.to_be_bytes()); // sample interval
//! binary[20..22].copy_from_slice(&2u16.to_be_bytes()); // samples per trace
//! binary[24..26].copy_from_slice(&1i16.to_be_bytes()); // format code
//! data.extend_from_slice(&binary);
//! data.extend_from_slice(&[0u8; 240]);
//! data.extend_from_slice(&ieee_to_ibm(0.5).to_be_bytes());
//! data.extend_from_slice(&ieee_to_ibm(-3.0).to_be_bytes());
//!
//! let reader = SegyReader::new(Cursor::new(data)).unwrap();
//! assert_eq!(reader.binary_header().samples_per_trace(), 2);
//!
//! let traces: Vec<_> = reader
//!     .traces()
//!     .unwrap()
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(traces.len(), 1);
//! assert_eq!(traces[0].samples, vec![0.5, -3.0]);
//! ```
//!
//! [`SegyReader`] emits `tracing` events at `debug` level and never installs
//! a subscriber. The codecs and [`TraceReader`] are silent.

pub mod binary;
pub mod context;
pub mod error;
pub mod file;
pub mod ibm;
pub mod reader;
pub mod schema;
pub mod textual;
pub mod trace;
pub mod types;

pub use binary::{BinaryHeader, resolve_binary_header};
pub use context::{DecodingContext, ReaderOptions};
pub use error::{Result, SegyError};
pub use file::{Dataset, SegyReader, read_segy};
pub use reader::TraceReader;
pub use schema::{Field, FieldKind, FieldValue, Record, Schema, decode_record};
pub use textual::TextualHeader;
pub use trace::{Trace, TraceHeader};
pub use types::{ByteOrder, SampleFormat, TextEncoding};

pub use ibm::{ibm_to_ieee, ieee_to_ibm};
