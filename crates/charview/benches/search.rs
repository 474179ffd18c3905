// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![expect(missing_docs, reason = "Benchmark code")]

use std::hint::black_box;

use charview::{NPOS, StrView};
use criterion::{Criterion, criterion_group, criterion_main};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

// "Log line sized" filler with no occurrence of the probe needle, so the
// worst-case scans below have to walk all of it.
const FILLER: &str = "lorem ipsum dolor sit amet consectetur adipiscing elit ";
const REPEATS: usize = 256;

fn entrypoint(c: &mut Criterion) {
    let mut text = FILLER.repeat(REPEATS);
    text.push_str("needleq");

    let haystack = StrView::from(text.as_str());
    let equal_copy = text.clone();

    let mut group = c.benchmark_group("search");

    group.bench_function("find_hit_at_end", |b| {
        b.iter(|| haystack.find(black_box("needle"), 0));
    });

    group.bench_function("find_miss", |b| {
        b.iter(|| haystack.find(black_box("needles"), 0));
    });

    group.bench_function("rfind_hit_at_start", |b| {
        // The only occurrence is the first unit, so the backward scan
        // walks the entire haystack.
        b.iter(|| haystack.rfind(black_box("lorem"), NPOS));
    });

    group.bench_function("find_first_of_hit_at_end", |b| {
        // The trailing 'q' is the only set member in the haystack.
        b.iter(|| haystack.find_first_of(black_box("qz"), 0));
    });

    group.bench_function("find_last_not_of_full_scan", |b| {
        b.iter(|| haystack.find_last_not_of(black_box("abcdefghijklmnopqrstuvwxyz "), NPOS));
    });

    group.bench_function("compare_equal", |b| {
        let other = StrView::from(equal_copy.as_str());

        b.iter(|| haystack.compare(black_box(other)));
    });

    group.bench_function("starts_with_long_prefix", |b| {
        let prefix = haystack.substr(0, haystack.len() - 1).expect("prefix of own length is in range");

        b.iter(|| haystack.starts_with(black_box(prefix)));
    });

    group.finish();
}
