//! Benchmark for the prism hot paths: direct extraction, composed
//! extraction, catalog codecs and traversal lifting.

use base64::engine::general_purpose::STANDARD;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use prismata::control::Either;
use prismata::optics::{
    Prism, Traversal, from_either, from_encoding, from_predicate, parse_int, regex_matcher,
};
use regex::Regex;
use std::hint::black_box;

// =============================================================================
// Core
// =============================================================================

fn benchmark_get_option(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get_option");

    let parse = parse_int();
    let number = "123456".to_string();
    group.bench_function("parse_int", |bencher| {
        bencher.iter(|| black_box(parse.get_option(black_box(&number))));
    });

    let positive = from_either::<String, i64>().compose(from_predicate(|n: &i64| *n > 0));
    let right: Either<String, i64> = Either::Right(42);
    group.bench_function("either_then_predicate", |bencher| {
        bencher.iter(|| black_box(positive.get_option(black_box(&right))));
    });

    let traced = parse_int().traced();
    group.bench_function("traced_without_subscriber", |bencher| {
        bencher.iter(|| black_box(traced.get_option(black_box(&number))));
    });

    group.finish();
}

fn benchmark_compose_depth(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose_depth");
    let source = "64".to_string();
    let even = || from_predicate(|n: &i64| n % 2 == 0);

    let one = parse_int().compose(even());
    group.bench_with_input(BenchmarkId::new("predicates", 1), &source, |bencher, source| {
        bencher.iter(|| black_box(one.get_option(source)));
    });

    let four = parse_int()
        .compose(even())
        .compose(even())
        .compose(even())
        .compose(even());
    group.bench_with_input(BenchmarkId::new("predicates", 4), &source, |bencher, source| {
        bencher.iter(|| black_box(four.get_option(source)));
    });

    group.finish();
}

// =============================================================================
// Catalog
// =============================================================================

fn benchmark_catalog(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("catalog");

    let base64 = from_encoding(STANDARD);
    for size in [16usize, 1024] {
        let encoded = base64.reverse_get(vec![0xa5; size]);
        group.bench_with_input(BenchmarkId::new("base64_decode", size), &encoded, |bencher, encoded| {
            bencher.iter(|| black_box(base64.get_option(encoded)));
        });
    }

    let matcher = regex_matcher(Regex::new(r"(\d+)\.(\d+)").expect("valid pattern"));
    let text = "version 12.34 released".to_string();
    group.bench_function("regex_round_trip", |bencher| {
        bencher.iter(|| {
            let found = matcher.get_option(black_box(&text));
            black_box(found.map(|found| matcher.reverse_get(found)))
        });
    });

    group.finish();
}

// =============================================================================
// Traversal
// =============================================================================

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");
    let traversal = parse_int().to_traversal();
    let source = "99".to_string();

    group.bench_function("modify_all", |bencher| {
        bencher.iter(|| black_box(traversal.modify_all(black_box(source.clone()), |n| n + 1)));
    });

    group.bench_function("traverse_option", |bencher| {
        bencher.iter(|| black_box(traversal.traverse(black_box(source.clone()), |n| n.checked_add(1))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_get_option,
    benchmark_compose_depth,
    benchmark_catalog,
    benchmark_traversal
);
criterion_main!(benches);
