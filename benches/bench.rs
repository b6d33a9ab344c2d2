use std::cell::Cell;
use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_test_tools::{patterns, Row};
use utilkit::{sorted1, sorted3, sorted6, Ordered, OrderedRepr};

thread_local! {
    static KEY_READS: Cell<u64> = const { Cell::new(0) };
}

/// Key that counts how often the sorter inspects it.
struct Counted(i32);

impl Ordered for Counted {
    fn ordered_repr(&self) -> OrderedRepr<'_> {
        KEY_READS.with(|reads| reads.set(reads.get() + 1));
        OrderedRepr::I32(self.0)
    }
}

type SortFn = fn(&[Row]) -> Vec<Row>;

fn sort_1(rows: &[Row]) -> Vec<Row> {
    sorted1(rows.iter().copied(), |r| r.keys[0])
}

fn sort_3(rows: &[Row]) -> Vec<Row> {
    sorted3(rows.iter().copied(), |r| (r.keys[0], r.keys[1], r.keys[2]))
}

fn sort_6(rows: &[Row]) -> Vec<Row> {
    sorted6(rows.iter().copied(), |r| {
        (r.keys[0], r.keys[1], r.keys[2], r.keys[3], r.keys[4], r.keys[5])
    })
}

fn std_stable_3(rows: &[Row]) -> Vec<Row> {
    let mut v = rows.to_vec();
    v.sort_by_key(|r| (r.keys[0], r.keys[1], r.keys[2]));
    v
}

fn measure_comp_count(name: &str, test_len: usize, pattern_provider: &dyn Fn(usize) -> Vec<Row>) {
    // Measure how many comparisons a pattern and length combination needs.
    let run_count: usize = if test_len <= 20 {
        10_000
    } else if test_len < 10_000 {
        300
    } else {
        20
    };

    KEY_READS.with(|reads| reads.set(0));
    for _ in 0..run_count {
        let rows = pattern_provider(test_len);
        black_box(sorted3(rows.iter().copied(), |r| {
            (Counted(r.keys[0]), r.keys[1], r.keys[2])
        }));
    }

    // Every comparison reads the leading key of both sides.
    let total = KEY_READS.with(Cell::get) / 2 / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

fn bench_sort(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: &dyn Fn(usize) -> Vec<Row>,
    bench_name: &str,
    sort_func: SortFn,
) {
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{bench_name}-{pattern_name}-{test_len}"), |b| {
        b.iter_batched(
            || pattern_provider(test_len),
            |rows| sort_func(black_box(rows.as_slice())),
            batch_size,
        )
    });
}

fn bench_patterns(c: &mut Criterion, test_len: usize) {
    let pattern_providers: Vec<(&'static str, Box<dyn Fn(usize) -> Vec<Row>>)> = vec![
        ("random", Box::new(|len| patterns::rows(patterns::random(len), i32::MAX))),
        (
            "random_d4",
            Box::new(|len| patterns::rows(patterns::random_uniform(len, 0..4), 4)),
        ),
        (
            "random_z1",
            Box::new(|len| patterns::rows(patterns::random_zipf(len, 1.0), 16)),
        ),
        (
            "ascending",
            Box::new(|len| patterns::rows(patterns::ascending(len), 16)),
        ),
        (
            "descending",
            Box::new(|len| patterns::rows(patterns::descending(len), 16)),
        ),
        (
            "saws_long",
            Box::new(|len| {
                patterns::rows(
                    patterns::saw_mixed(len, ((len as f64).log2().round()) as usize),
                    16,
                )
            }),
        ),
        ("all_equal", Box::new(|len| patterns::rows(patterns::all_equal(len), 1))),
    ];

    let sort_funcs: [(&str, SortFn); 4] = [
        ("sorted1", sort_1),
        ("sorted3", sort_3),
        ("sorted6", sort_6),
        ("std_stable_3", std_stable_3),
    ];

    for (pattern_name, pattern_provider) in &pattern_providers {
        if env::var("MEASURE_COMP").is_ok() {
            let name = format!("sorted3-comp-{pattern_name}-{test_len}");
            measure_comp_count(&name, test_len, pattern_provider.as_ref());
            continue;
        }

        for (bench_name, sort_func) in sort_funcs {
            bench_sort(
                c,
                test_len,
                pattern_name,
                pattern_provider.as_ref(),
                bench_name,
                sort_func,
            );
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_lens = [0, 1, 8, 20, 100, 1_000, 10_000, 100_000];

    for test_len in test_lens {
        bench_patterns(c, test_len);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
