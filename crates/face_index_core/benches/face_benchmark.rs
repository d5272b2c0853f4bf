//! Benchmark for the face pipeline.
//!
//! TARGET: 1,000,000 faces per second (synthesis + geometry)
//!
//! Run with: cargo bench --package face_index_core --bench face_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use face_index_core::{decode, encode, map_geometry, synthesize, FaceDimensions, FaceGallery, Seed};

fn benchmark_synthesize(c: &mut Criterion) {
    let seed = decode("00112233445566778899aabb");

    c.bench_function("synthesize", |b| {
        let mut index = 0i64;
        b.iter(|| {
            index += 1;
            black_box(synthesize(black_box(index), &seed))
        });
    });
}

fn benchmark_map_geometry(c: &mut Criterion) {
    let dimensions = FaceDimensions::default();
    let params = synthesize(37, &Seed::DEFAULT);

    c.bench_function("map_geometry", |b| {
        b.iter(|| black_box(map_geometry(&dimensions, black_box(&params))));
    });
}

fn benchmark_codec(c: &mut Criterion) {
    let seed = decode("ff80c040102030405060708f");

    c.bench_function("encode_reference", |b| {
        b.iter(|| black_box(encode(black_box(&seed))));
    });
    c.bench_function("decode_reference", |b| {
        b.iter(|| black_box(decode(black_box("ff80c040102030405060708f"))));
    });
}

fn benchmark_walk(c: &mut Criterion) {
    let gallery = FaceGallery::default();

    let mut group = c.benchmark_group("walk");
    group.throughput(Throughput::Elements(10_000));
    group.sample_size(10);

    group.bench_function("10k_faces", |b| {
        b.iter(|| {
            for face in gallery.walk(0, 10_000) {
                black_box(face);
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_synthesize,
    benchmark_map_geometry,
    benchmark_codec,
    benchmark_walk
);
criterion_main!(benches);
