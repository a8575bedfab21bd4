use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use utf8modem::{Text, byte_length, decode, encode};

fn ascii_sample(len: usize) -> String {
    "the quick brown fox jumps over the lazy dog "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn mixed_sample(len: usize) -> String {
    "déjà vu — €конец 🦀🙂 "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (name, sample) in [
        ("ascii_4k", ascii_sample(4096)),
        ("mixed_4k", mixed_sample(4096)),
    ] {
        let bytes = sample.into_bytes();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| decode(black_box(bytes.as_slice())).unwrap());
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (name, sample) in [
        ("ascii_4k", ascii_sample(4096)),
        ("mixed_4k", mixed_sample(4096)),
    ] {
        let text = Text::from(sample.as_str());
        let mut wire = vec![0u8; byte_length(&text)];
        group.throughput(Throughput::Bytes(wire.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| encode(black_box(&text), black_box(wire.as_mut_slice())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
