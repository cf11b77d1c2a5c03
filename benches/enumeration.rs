use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decibinary_rs::{harness, DecibinaryEnumerator};
use std::io::Cursor;

/// Build a query file with `count` indices spread up to `max_index`
fn generate_queries(count: usize, max_index: u64) -> String {
    let mut input = format!("{count}\n");
    let mut seed = 12345u64;

    for _ in 0..count {
        // Simple LCG random
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        input.push_str(&format!("{}\n", seed % max_index + 1));
    }
    input
}

fn bench_cold_nth(c: &mut Criterion) {
    let indices = [1_000u64, 10_000, 100_000];
    let mut group = c.benchmark_group("cold_nth");

    for index in indices.iter() {
        group.bench_with_input(BenchmarkId::new("nth", index), index, |b, &index| {
            b.iter(|| {
                let mut enumerator = DecibinaryEnumerator::new();
                let s = enumerator.nth(black_box(index)).map(str::len);
                black_box(s)
            });
        });
    }

    group.finish();
}

fn bench_warm_nth(c: &mut Criterion) {
    let mut enumerator = DecibinaryEnumerator::new();
    let _ = enumerator.nth(100_000);

    c.bench_function("warm_nth", |b| {
        let mut i = 1u64;
        b.iter(|| {
            i = i % 100_000 + 1;
            black_box(enumerator.nth(black_box(i)).map(str::len))
        });
    });
}

fn bench_harness(c: &mut Criterion) {
    let sizes = [100usize, 1_000];
    let mut group = c.benchmark_group("harness");

    for size in sizes.iter() {
        let input = generate_queries(*size, 50_000);
        group.bench_with_input(BenchmarkId::new("run", size), &input, |b, input| {
            b.iter(|| {
                let mut out = Vec::new();
                let answered = harness::run(Cursor::new(black_box(input.as_bytes())), &mut out);
                black_box((answered.ok(), out))
            });
        });
    }

    group.finish();
}

fn bench_all_strings_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_strings_for");

    for value in [64u64, 256, 512].iter() {
        group.bench_with_input(BenchmarkId::new("fresh", value), value, |b, &value| {
            b.iter(|| {
                let mut enumerator = DecibinaryEnumerator::new();
                black_box(enumerator.all_strings_for(black_box(value)).len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_cold_nth,
    bench_warm_nth,
    bench_harness,
    bench_all_strings_for
);
criterion_main!(benches);
