//! Benchmarks for trie construction, membership, and completion.

use autotrie::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Create a word list of the specified size with varied word lengths
fn word_list(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| {
            // Pad the index to varying widths (5-13 characters total) so
            // paths diverge at different depths.
            let width = 1 + (i % 9);
            format!("word{:0width$}", i, width = width)
        })
        .collect()
}

/// Benchmark: Trie construction with different word counts
fn bench_build_varying_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_varying_size");

    for size in [100, 500, 1000, 5000].iter() {
        let words = word_list(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let trie = Trie::from_terms(black_box(&words));
                black_box(trie);
            });
        });
    }
    group.finish();
}

/// Benchmark: Membership checks against a populated trie
fn bench_contains(c: &mut Criterion) {
    let words = word_list(1000);
    let trie = Trie::from_terms(&words);
    let stored = words[500].clone();
    let mut group = c.benchmark_group("contains");

    group.bench_function("hit", |b| {
        b.iter(|| trie.contains(black_box(&stored)));
    });

    group.bench_function("miss", |b| {
        b.iter(|| trie.contains(black_box("miss")));
    });

    group.bench_function("near_miss_prefix", |b| {
        // Walks the whole path and fails only on the terminal flag.
        b.iter(|| trie.contains(black_box("word")));
    });

    group.finish();
}

/// Benchmark: Incremental insertion into a growing trie
fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert_fresh_words", |b| {
        let mut trie = Trie::from_terms(word_list(1000));
        let mut counter = 0usize;
        b.iter(|| {
            trie.insert(&format!("fresh{}", counter));
            counter += 1;
        });
    });
}

/// Benchmark: Completion with different trie sizes
///
/// Every generated word shares the "word" prefix, so this walks the whole
/// population each time.
fn bench_complete_varying_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete_varying_size");

    for size in [100, 500, 1000, 5000].iter() {
        let trie = Trie::from_terms(word_list(*size));

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let results: Vec<String> = trie.complete(black_box("word")).collect();
                black_box(results);
            });
        });
    }
    group.finish();
}

/// Benchmark: Completion selectivity by prefix length
fn bench_complete_varying_prefix(c: &mut Criterion) {
    let trie = Trie::from_terms(word_list(1000));
    let mut group = c.benchmark_group("complete_varying_prefix");

    // Longer prefixes select progressively smaller subtrees.
    let prefixes = ["w", "word", "word0", "word00005"];

    for prefix in prefixes.iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(prefix.len()),
            prefix,
            |b, &p| {
                b.iter(|| {
                    let results: Vec<String> = trie.complete(black_box(p)).collect();
                    black_box(results);
                });
            },
        );
    }
    group.finish();
}

/// Benchmark: Taking only the first few suggestions from a lazy walk
fn bench_complete_first_suggestion(c: &mut Criterion) {
    let trie = Trie::from_terms(word_list(5000));

    c.bench_function("complete_first_suggestion", |b| {
        b.iter(|| {
            let first = trie.complete(black_box("word")).next();
            black_box(first);
        });
    });
}

/// Benchmark: The autocomplete engine's folding and capping overhead
fn bench_autocomplete_engine(c: &mut Criterion) {
    let words = word_list(1000);
    let mut group = c.benchmark_group("autocomplete_engine");

    let folding = Autocompleter::from_entries(&words);
    group.bench_function("folding_uncapped", |b| {
        b.iter(|| {
            let results = folding.autocomplete(black_box("WORD"));
            black_box(results);
        });
    });

    let exact = Autocompleter::builder()
        .entries(&words)
        .case_sensitive()
        .build();
    group.bench_function("exact_uncapped", |b| {
        b.iter(|| {
            let results = exact.autocomplete(black_box("word"));
            black_box(results);
        });
    });

    let capped = Autocompleter::builder()
        .entries(&words)
        .max_results(10)
        .build();
    group.bench_function("folding_capped_10", |b| {
        b.iter(|| {
            let results = capped.autocomplete(black_box("word"));
            black_box(results);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build_varying_size,
    bench_contains,
    bench_insert,
    bench_complete_varying_size,
    bench_complete_varying_prefix,
    bench_complete_first_suggestion,
    bench_autocomplete_engine,
);
criterion_main!(benches);
