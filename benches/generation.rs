use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use uuidkit::{FormatOptions, UuidGen, UuidKind, format_uuid, is_valid, namespace, parse_uuid};

fn bench_generation(c: &mut Criterion) {
    let uuid_gen = UuidGen::new();

    c.bench_function("generate_v4", |b| {
        b.iter(|| black_box(uuid_gen.v4().unwrap()));
    });

    c.bench_function("generate_v7", |b| {
        b.iter(|| black_box(uuid_gen.v7().unwrap()));
    });

    c.bench_function("generate_v5", |b| {
        b.iter(|| black_box(uuid_gen.v5(&namespace::DNS, black_box("www.example.com"))));
    });

    c.bench_function("generate_batch_100", |b| {
        b.iter(|| black_box(uuid_gen.generate_batch(&UuidKind::V4, 100).unwrap()));
    });
}

fn bench_inspection(c: &mut Criterion) {
    let id = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
    let braces = FormatOptions {
        uppercase: true,
        braces: true,
        ..FormatOptions::default()
    };

    c.bench_function("is_valid", |b| {
        b.iter(|| black_box(is_valid(black_box(id))));
    });

    c.bench_function("parse_uuid", |b| {
        b.iter(|| black_box(parse_uuid(black_box(id)).unwrap()));
    });

    c.bench_function("format_uuid", |b| {
        b.iter(|| black_box(format_uuid(black_box(id), &braces)));
    });
}

criterion_group!(benches, bench_generation, bench_inspection);
criterion_main!(benches);
