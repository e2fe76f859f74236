use base_n::{Codec, Options, hex_fast};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::RngCore;
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn random_bytes(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    rand::rng().fill_bytes(&mut data);
    data
}

fn bench_encode(c: &mut Criterion, name: &str, codec: &Codec, sizes: &[usize]) {
    let mut group = c.benchmark_group(format!("encode_{}", name));

    for &size in sizes {
        group.throughput(Throughput::Bytes(size as u64));
        let data = random_bytes(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data), Options::NONE));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion, name: &str, codec: &Codec, sizes: &[usize]) {
    let mut group = c.benchmark_group(format!("decode_{}", name));

    for &size in sizes {
        let encoded = codec.encode(&random_bytes(size), Options::NONE);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| codec.decode(black_box(encoded), Options::NONE).unwrap());
        });
    }
    group.finish();
}

fn bench_block_codecs(c: &mut Criterion) {
    bench_encode(c, "base16", Codec::base16(), &SIZES);
    bench_decode(c, "base16", Codec::base16(), &SIZES);
    bench_encode(c, "base24", Codec::base24(), &SIZES);
    bench_decode(c, "base24", Codec::base24(), &SIZES);
    bench_encode(c, "base64", Codec::base64(), &SIZES);
    bench_decode(c, "base64", Codec::base64(), &SIZES);
}

fn bench_base58(c: &mut Criterion) {
    // quadratic in input length, keep sizes modest
    let sizes = [32, 64, 256, 1024];
    bench_encode(c, "base58", Codec::base58(), &sizes);
    bench_decode(c, "base58", Codec::base58(), &sizes);
}

fn bench_hex_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_paths");
    let text = hex::encode(random_bytes(4096));
    group.throughput(Throughput::Bytes(4096));

    group.bench_function("fast_path", |b| {
        b.iter(|| hex_fast::decode(black_box(&text)).unwrap());
    });
    group.bench_function("block_engine", |b| {
        // RELAX routes around the fast path
        b.iter(|| Codec::base16().decode(black_box(&text), Options::RELAX).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_block_codecs, bench_base58, bench_hex_paths);
criterion_main!(benches);
