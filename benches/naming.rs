//! Performance benchmarks for native-platform
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use native_platform::{Architecture, Platform};

fn bench_detection(c: &mut Criterion) {
    c.bench_function("platform_from_os_name", |b| {
        b.iter(|| Platform::from_os_name(black_box("Windows Server 2022")));
    });

    c.bench_function("architecture_detect", |b| {
        b.iter(|| Architecture::detect(Platform::Linux, black_box("armv8l")));
    });
}

fn bench_current(c: &mut Criterion) {
    c.bench_function("platform_current_memoized", |b| {
        b.iter(Platform::current);
    });

    c.bench_function("architecture_current_memoized", |b| {
        b.iter(Architecture::current);
    });
}

fn bench_naming(c: &mut Criterion) {
    c.bench_function("shared_library_name_unix_rule", |b| {
        b.iter(|| Platform::Linux.shared_library_name(black_box("tools/render")));
    });

    c.bench_function("shared_library_name_extension_rule", |b| {
        b.iter(|| Platform::Windows.shared_library_name(black_box("tools/render.so")));
    });

    c.bench_function("executable_name", |b| {
        b.iter(|| Platform::Windows.executable_name(black_box("bin/fmt")));
    });
}

criterion_group!(benches, bench_detection, bench_current, bench_naming);
criterion_main!(benches);
