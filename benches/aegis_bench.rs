use aegis_aead::aegis128l::{self, Aegis128L};
use aegis_aead::aegis256::{self, Aegis256};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

const SIZES: [usize; 6] = [64, 256, 1024, 4096, 16384, 65536];

/// Benchmark one-shot sealing for both variants
fn bench_seal_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("seal_throughput");
    let aead128 = Aegis128L::new(&[0x01; aegis128l::KEY_LENGTH], 16).unwrap();
    let aead256 = Aegis256::new(&[0x01; aegis256::KEY_LENGTH], 16).unwrap();
    let nonce128 = [0x02u8; aegis128l::NONCE_LENGTH];
    let nonce256 = [0x02u8; aegis256::NONCE_LENGTH];
    let ad = [0x41u8; 32];

    for size in SIZES {
        let plaintext = vec![0x42u8; size];
        // Reused across iterations so the spare capacity path is measured
        let mut dst = Vec::with_capacity(size + 16);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("aegis128l", size), &size, |b, _| {
            b.iter(|| {
                dst.clear();
                aead128.seal_to(&mut dst, black_box(&nonce128), black_box(&plaintext), &ad);
                black_box(&dst);
            });
        });
        group.bench_with_input(BenchmarkId::new("aegis256", size), &size, |b, _| {
            b.iter(|| {
                dst.clear();
                aead256.seal_to(&mut dst, black_box(&nonce256), black_box(&plaintext), &ad);
                black_box(&dst);
            });
        });
    }
    group.finish();
}

/// Benchmark one-shot opening, including tag verification
fn bench_open_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_throughput");
    let aead = Aegis128L::new(&[0x03; aegis128l::KEY_LENGTH], 16).unwrap();
    let nonce = [0x04u8; aegis128l::NONCE_LENGTH];

    for size in SIZES {
        let sealed = aead.seal(&nonce, &vec![0x42u8; size], b"");
        let mut dst = Vec::with_capacity(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("aegis128l", size), &size, |b, _| {
            b.iter(|| {
                dst.clear();
                aead.open_to(&mut dst, black_box(&nonce), black_box(&sealed), b"")
                    .unwrap();
                black_box(&dst);
            });
        });
    }
    group.finish();
}

/// Benchmark incremental encryption in fixed-size chunks
fn bench_stream_chunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_throughput");
    let key = [0x05u8; aegis256::KEY_LENGTH];
    let nonce = [0x06u8; aegis256::NONCE_LENGTH];
    let message = vec![0x42u8; 65536];
    group.throughput(Throughput::Bytes(message.len() as u64));

    for chunk in [1usize, 15, 64, 4096] {
        group.bench_with_input(BenchmarkId::new("aegis256", chunk), &chunk, |b, &chunk| {
            let mut buf = message.clone();
            b.iter(|| {
                let mut encrypter = aegis256::Encrypter::new(&key, &nonce, b"", 16).unwrap();
                for piece in buf.chunks_mut(chunk) {
                    encrypter.encrypt_in_place(piece);
                }
                black_box(encrypter.finalize())
            });
        });
    }
    group.finish();
}

/// Benchmark context setup, which dominates for tiny messages
fn bench_setup_overhead(c: &mut Criterion) {
    let key = [0x07u8; aegis128l::KEY_LENGTH];
    let nonce = [0x08u8; aegis128l::NONCE_LENGTH];

    c.bench_function("setup_and_seal_empty", |b| {
        b.iter(|| {
            let aead = Aegis128L::new(black_box(&key), 16).unwrap();
            black_box(aead.seal(&nonce, b"", b""))
        });
    });
}

criterion_group!(
    benches,
    bench_seal_sizes,
    bench_open_sizes,
    bench_stream_chunks,
    bench_setup_overhead
);
criterion_main!(benches);
