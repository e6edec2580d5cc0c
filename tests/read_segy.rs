//! End-to-end reads of synthetic SEG-Y files built in memory.

use std::io::Cursor;

use segy_rs::{
    ByteOrder, ReaderOptions, SampleFormat, SegyError, SegyReader, TextEncoding, read_segy,
};

/// Encode uppercase letters, digits, and spaces as EBCDIC.
fn ebcdic(text: &str) -> Vec<u8> {
    text.bytes()
        .map(|b| match b {
            b' ' => 0x40,
            b'0'..=b'9' => 0xF0 + (b - b'0'),
            b'A'..=b'I' => 0xC1 + (b - b'A'),
            b'J'..=b'R' => 0xD1 + (b - b'J'),
            b'S'..=b'Z' => 0xE2 + (b - b'S'),
            _ => panic!("no EBCDIC mapping for {b:#04X} in test helper"),
        })
        .collect()
}

fn textual_header() -> Vec<u8> {
    let mut data = Vec::with_capacity(3200);
    for i in 1..=40 {
        data.extend_from_slice(&ebcdic(&format!("{:<80}", format!("C{i:2} SYNTHETIC LINE"))));
    }
    data
}

fn binary_header(byte_order: ByteOrder, format: i16, ns: u16, dt: u16) -> Vec<u8> {
    let mut data = vec![0u8; 400];
    let mut put = |offset: usize, v: u16| {
        let bytes = match byte_order {
            ByteOrder::Big => v.to_be_bytes(),
            ByteOrder::Little => v.to_le_bytes(),
        };
        data[offset..offset + 2].copy_from_slice(&bytes);
    };
    put(12, 24); // traces per ensemble
    put(16, dt);
    put(20, ns);
    put(24, format as u16);
    data
}

fn trace_header(sequence: i32) -> Vec<u8> {
    let mut data = vec![0u8; 240];
    data[0..4].copy_from_slice(&sequence.to_be_bytes());
    data[20..24].copy_from_slice(&(5000 + sequence).to_be_bytes());
    data
}

struct SegyBuilder {
    data: Vec<u8>,
}

impl SegyBuilder {
    fn new(byte_order: ByteOrder, format: i16, ns: u16, dt: u16) -> Self {
        let mut data = textual_header();
        data.extend_from_slice(&binary_header(byte_order, format, ns, dt));
        Self { data }
    }

    fn trace(mut self, sequence: i32, ibm_words: &[u32]) -> Self {
        self.data.extend_from_slice(&trace_header(sequence));
        for w in ibm_words {
            self.data.extend_from_slice(&w.to_be_bytes());
        }
        self
    }

    fn build(self) -> Cursor<Vec<u8>> {
        Cursor::new(self.data)
    }
}

const ONE: u32 = 0x4110_0000;
const MINUS_120: u32 = 0xC278_0000;
const SIXTEEN: u32 = 0x4210_0000;
const FIVE_THIRTY_SECONDS: u32 = 0x4028_0000; // 0.15625

#[test]
fn test_minimal_file_end_to_end() {
    let file = SegyBuilder::new(ByteOrder::Big, 1, 4, 4000)
        .trace(1, &[ONE, MINUS_120, SIXTEEN, FIVE_THIRTY_SECONDS])
        .build();

    let dataset = read_segy(file).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.samples_per_trace(), 4);
    assert_eq!(dataset.sample_interval_micros(), 4000);
    assert_eq!(dataset.binary_header.byte_order(), ByteOrder::Big);
    assert_eq!(dataset.binary_header.traces_per_ensemble(), 24);

    let trace = &dataset.traces[0];
    assert_eq!(trace.header.trace_sequence_line(), 1);
    assert_eq!(trace.header.cdp(), 5001);

    let expected = [1.0f32, -120.0, 16.0, 0.15625];
    assert_eq!(trace.samples.len(), expected.len());
    for (got, want) in trace.samples.iter().zip(expected) {
        assert!((got - want).abs() <= 1e-6 * want.abs(), "{got} != {want}");
    }
}

#[test]
fn test_textual_header_is_decoded() {
    let reader = SegyReader::new(SegyBuilder::new(ByteOrder::Big, 1, 1, 1000).build()).unwrap();
    let textual = reader.textual_header();
    assert_eq!(textual.encoding(), TextEncoding::Ebcdic);
    assert_eq!(textual.lines().len(), 40);
    assert_eq!(textual.line(0).unwrap().trim_end(), "C 1 SYNTHETIC LINE");
    assert_eq!(textual.line(39).unwrap().trim_end(), "C40 SYNTHETIC LINE");
}

#[test]
fn test_traces_in_disk_order() {
    let mut builder = SegyBuilder::new(ByteOrder::Big, 1, 2, 2000);
    for seq in 1..=5 {
        builder = builder.trace(seq, &[ONE, SIXTEEN]);
    }

    let traces = SegyReader::new(builder.build())
        .unwrap()
        .traces()
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(traces.len(), 5);
    let sequence: Vec<_> = traces
        .iter()
        .map(|t| t.header.trace_sequence_line())
        .collect();
    assert_eq!(sequence, vec![1, 2, 3, 4, 5]);
    assert!(traces.iter().all(|t| t.samples == vec![1.0, 16.0]));
}

#[test]
fn test_header_only_file_has_no_traces() {
    let dataset = read_segy(SegyBuilder::new(ByteOrder::Big, 1, 10, 1000).build()).unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn test_little_endian_binary_header() {
    let file = SegyBuilder::new(ByteOrder::Little, 1, 3, 500)
        .trace(1, &[ONE, MINUS_120, SIXTEEN])
        .trace(2, &[SIXTEEN, ONE, MINUS_120])
        .build();

    let reader = SegyReader::new(file).unwrap();
    assert_eq!(reader.binary_header().byte_order(), ByteOrder::Little);
    assert_eq!(reader.context().samples_per_trace, 3);
    assert_eq!(reader.context().sample_interval_micros, 500);
    assert_eq!(reader.binary_header().traces_per_ensemble(), 24);

    // Trace headers stay big-endian regardless.
    let traces = reader
        .traces()
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[1].header.trace_sequence_line(), 2);
    assert_eq!(traces[1].samples, vec![16.0, 1.0, -120.0]);
}

#[test]
fn test_dangling_partial_trace() {
    let mut file = SegyBuilder::new(ByteOrder::Big, 1, 4, 1000)
        .trace(1, &[ONE, ONE, ONE, ONE])
        .trace(2, &[ONE, ONE, ONE, ONE])
        .build()
        .into_inner();
    file.truncate(file.len() - 4);

    let mut traces = SegyReader::new(Cursor::new(file)).unwrap().traces().unwrap();
    assert!(traces.next().unwrap().is_ok());
    assert!(matches!(
        traces.next(),
        Some(Err(SegyError::TruncatedTrace {
            index: 1,
            expected: 16,
            actual: 12,
        }))
    ));
    assert!(traces.next().is_none());

    let file = SegyBuilder::new(ByteOrder::Big, 1, 4, 1000)
        .trace(1, &[ONE, ONE])
        .build();
    assert!(matches!(
        read_segy(file),
        Err(SegyError::TruncatedTrace { index: 0, .. })
    ));
}

#[test]
fn test_file_shorter_than_headers() {
    let mut data = textual_header();
    data.extend_from_slice(&[0u8; 100]);
    let err = SegyReader::new(Cursor::new(data)).err().unwrap();
    assert!(matches!(
        err,
        SegyError::TruncatedRecord {
            schema: "binary header",
            expected: 400,
            actual: 100,
        }
    ));

    let err = SegyReader::new(Cursor::new(vec![0x40u8; 1000])).err().unwrap();
    assert!(matches!(
        err,
        SegyError::TruncatedRecord {
            schema: "textual header",
            expected: 3200,
            actual: 1000,
        }
    ));
}

#[test]
fn test_invalid_format_code() {
    let file = SegyBuilder::new(ByteOrder::Big, 0x0A0A, 4, 1000).build();
    let err = SegyReader::new(file).err().unwrap();
    assert!(matches!(err, SegyError::InvalidFormatCode { .. }));
}

#[test]
fn test_unsupported_sample_format() {
    let file = SegyBuilder::new(ByteOrder::Big, 5, 4, 1000).build();
    let reader = SegyReader::new(file).unwrap();
    assert_eq!(
        reader.binary_header().sample_format(),
        Some(SampleFormat::IeeeFloat32)
    );
    let err = reader.traces().err().unwrap();
    assert!(matches!(
        err,
        SegyError::UnsupportedSampleFormat(SampleFormat::IeeeFloat32)
    ));
}

#[test]
fn test_samples_per_trace_override() {
    // Header claims zero samples; the caller knows better.
    let file = SegyBuilder::new(ByteOrder::Big, 1, 0, 1000)
        .trace(1, &[ONE, SIXTEEN])
        .build();
    let options = ReaderOptions::new().with_samples_per_trace(2);
    let dataset = SegyReader::with_options(file, options)
        .unwrap()
        .read_all()
        .unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.traces[0].samples, vec![1.0, 16.0]);
}

#[test]
fn test_oversized_samples_override_is_an_error() {
    let file = SegyBuilder::new(ByteOrder::Big, 1, 2, 1000)
        .trace(1, &[ONE, ONE])
        .build();
    let options = ReaderOptions::new().with_samples_per_trace(usize::MAX / 2);
    assert!(matches!(
        SegyReader::with_options(file, options),
        Err(SegyError::TooManySamples { max: 65535, .. })
    ));
}

#[test]
fn test_forced_byte_order() {
    let file = SegyBuilder::new(ByteOrder::Little, 1, 2, 1000)
        .trace(1, &[ONE, ONE])
        .build();
    let options = ReaderOptions::new().with_byte_order(ByteOrder::Little);
    let reader = SegyReader::with_options(file, options).unwrap();
    assert_eq!(reader.binary_header().byte_order(), ByteOrder::Little);
    assert_eq!(reader.context().samples_per_trace, 2);

    // Forcing the wrong order still validates the format code.
    let file = SegyBuilder::new(ByteOrder::Little, 1, 2, 1000).build();
    let options = ReaderOptions::new().with_byte_order(ByteOrder::Big);
    let err = SegyReader::with_options(file, options).err().unwrap();
    assert!(matches!(
        err,
        SegyError::InvalidFormatCode {
            big_endian: 256,
            little_endian: 1,
        }
    ));
}

#[test]
fn test_dataset_iteration() {
    let file = SegyBuilder::new(ByteOrder::Big, 1, 1, 1000)
        .trace(10, &[ONE])
        .trace(20, &[MINUS_120])
        .build();
    let dataset = read_segy(file).unwrap();

    let total: f32 = dataset.iter().map(|t| t.samples[0]).sum();
    assert_eq!(total, -119.0);

    let mut seen = Vec::new();
    for trace in &dataset {
        seen.push(trace.header.trace_sequence_line());
    }
    assert_eq!(seen, vec![10, 20]);
}
