use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use segy_rs::{DecodingContext, TraceReader, ibm, ibm_to_ieee, ieee_to_ibm};

/// Generate realistic seismic-like amplitudes (decaying oscillation + ripple).
fn seismic_samples(n: usize) -> Vec<f32> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f32 * 0.004;
        let envelope = (-t * 1.5).exp() * 1.0e4;
        let ripple = (t * 310.0).sin() * 3.0;
        v.push(envelope * (t * 60.0).sin() + ripple);
    }
    v
}

fn ibm_bytes(samples: &[f32]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|&x| ieee_to_ibm(x).to_be_bytes())
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let samples = seismic_samples(1000);
    let words: Vec<u32> = samples.iter().map(|&x| ieee_to_ibm(x)).collect();
    let bytes = ibm_bytes(&samples);

    let mut group = c.benchmark_group("ibm");

    group.throughput(Throughput::Elements(1000));

    group.bench_function("ibm_to_ieee/1000samp", |b| {
        b.iter(|| {
            black_box(&words)
                .iter()
                .map(|&w| ibm_to_ieee(w))
                .sum::<f32>()
        })
    });
    group.bench_function("ieee_to_ibm/1000samp", |b| {
        b.iter(|| ibm::ieee_to_ibm_slice(black_box(&samples)))
    });
    group.bench_function("decode_ibm_be/1000samp", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            ibm::decode_ibm_be(black_box(&bytes), &mut out);
            out
        })
    });

    group.finish();
}

fn bench_reader(c: &mut Criterion) {
    let ns = 1000;
    let samples = seismic_samples(ns);
    let trace_bytes = ibm_bytes(&samples);

    // 100 traces with blank headers
    let mut stream = Vec::new();
    for _ in 0..100 {
        stream.extend_from_slice(&[0u8; 240]);
        stream.extend_from_slice(&trace_bytes);
    }
    let ctx = DecodingContext::ibm(ns, 4000);

    let mut group = c.benchmark_group("reader");

    group.throughput(Throughput::Bytes(stream.len() as u64));

    group.bench_function("traces/100x1000samp", |b| {
        b.iter(|| {
            let traces: Vec<_> = TraceReader::new(black_box(stream.as_slice()), ctx)
                .unwrap()
                .collect::<Result<Vec<_>, _>>()
                .unwrap();
            assert_eq!(traces.len(), 100);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_reader);
criterion_main!(benches);
