use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use shardblob_core::{deserialize_blob, serialize_blob, Flags, RawBlob};

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_blob");
    for size in [31usize, 1024, 128 * 1024] {
        let blob = RawBlob::new(Flags::NONE, vec![0x5a; size]);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &blob, |b, blob| {
            b.iter(|| serialize_blob(black_box(blob)))
        });
    }
    group.finish();
}

fn bench_deserialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_blob");
    for size in [31usize, 1024, 128 * 1024] {
        let bytes = serialize_blob(&RawBlob::new(Flags::new(true), vec![0x5a; size]));
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| deserialize_blob(black_box(bytes)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_serialize, bench_deserialize);
criterion_main!(benches);
