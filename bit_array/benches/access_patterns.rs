// benches/access_patterns.rs

use bit_array::{layout, PackedArray};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

const WIDTH: u32 = 11;

fn filled_storage(size: usize) -> Vec<u64> {
    let mut storage = vec![0u64; layout::required_units::<u64>(size, WIDTH)];
    let mut array: PackedArray<u64, u32> = PackedArray::new(&mut storage, size, WIDTH).unwrap();
    for i in 0..size {
        array.write(i, (i as u32) & 0x7FF);
    }
    storage
}

fn bench_sequential_write(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("sequential_write");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut storage = vec![0u64; layout::required_units::<u64>(size, WIDTH)];
            b.iter(|| {
                let mut array: PackedArray<u64, u32> =
                    PackedArray::new(&mut storage, size, WIDTH).unwrap();
                for i in 0..size {
                    array.write(i, black_box((i as u32) & 0x7FF));
                }
            });
        });
    }
    group.finish();
}

fn bench_sequential_read(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("sequential_read");
    for size in sizes {
        let mut storage = filled_storage(size);
        let array: PackedArray<u64, u32> =
            PackedArray::new(&mut storage, size, WIDTH).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..array.len() {
                    sum += black_box(array.read(i)) as u64;
                }
                sum
            });
        });
    }
    group.finish();
}

fn bench_random_read(c: &mut Criterion) {
    let sizes = vec![1_000, 10_000];

    let mut group = c.benchmark_group("random_read");
    for size in sizes {
        let mut storage = filled_storage(size);
        let array: PackedArray<u64, u32> =
            PackedArray::new(&mut storage, size, WIDTH).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let indices: Vec<usize> = (0..size).map(|_| rng.random_range(0..size)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0u64;
                for &i in &indices {
                    sum += black_box(array.read(i)) as u64;
                }
                sum
            });
        });
    }
    group.finish();
}

fn bench_iterator(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("iterator");
    for size in sizes {
        let mut storage = filled_storage(size);
        let array: PackedArray<u64, u32> =
            PackedArray::new(&mut storage, size, WIDTH).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let sum: u64 = array.iter().map(|v| black_box(v) as u64).sum();
                sum
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_write,
    bench_sequential_read,
    bench_random_read,
    bench_iterator
);
criterion_main!(benches);
