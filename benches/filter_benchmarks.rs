use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dual_bloom_rs::{
    DualBloomFilter, FilterConfigBuilder, InMemoryStorage, hash_murmur64,
};
use rand::{Rng, distr::Alphanumeric};
use std::hint::black_box;

// Helper function to generate random string data
fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn generate_test_data(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| generate_random_string(32).into_bytes())
        .collect()
}

fn create_filter(capacity: u64) -> DualBloomFilter<InMemoryStorage> {
    let config = FilterConfigBuilder::default()
        .id("bench".to_string())
        .capacity(capacity)
        .build()
        .expect("Failed to build bench config");
    DualBloomFilter::new(config, InMemoryStorage::new())
        .expect("Failed to create bench filter")
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_operations");

    for capacity in [1_000u64, 100_000, 10_000_000] {
        let test_data = generate_test_data(1_000);
        let filter = create_filter(capacity);

        group.bench_with_input(
            BenchmarkId::new("inmemory", capacity),
            &test_data,
            |b, data| {
                let mut idx = 0;
                b.iter(|| {
                    filter.add(black_box(&data[idx % data.len()])).unwrap();
                    idx += 1;
                });
            },
        );
    }
    group.finish();
}

fn bench_has(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_operations");

    for capacity in [1_000u64, 100_000, 10_000_000] {
        let test_data = generate_test_data(1_000);
        let filter = create_filter(capacity);
        for element in &test_data {
            filter.add(element).unwrap();
        }

        group.bench_with_input(
            BenchmarkId::new("inmemory", capacity),
            &test_data,
            |b, data| {
                let mut idx = 0;
                b.iter(|| {
                    let found =
                        filter.has(black_box(&data[idx % data.len()])).unwrap();
                    idx += 1;
                    found
                });
            },
        );
    }
    group.finish();
}

fn bench_hash_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_functions");
    let test_data = generate_test_data(1_000);

    let mut fnv_filter = create_filter(100_000);
    fnv_filter.set_hash_function(dual_bloom_rs::hash_fnv64);
    let mut murmur_filter = create_filter(100_000);
    murmur_filter.set_hash_function(hash_murmur64);

    group.bench_function("add_fnv64", |b| {
        let mut idx = 0;
        b.iter(|| {
            fnv_filter
                .add(black_box(&test_data[idx % test_data.len()]))
                .unwrap();
            idx += 1;
        });
    });

    group.bench_function("add_murmur64", |b| {
        let mut idx = 0;
        b.iter(|| {
            murmur_filter
                .add(black_box(&test_data[idx % test_data.len()]))
                .unwrap();
            idx += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_has, bench_hash_functions);
criterion_main!(benches);
