//! Performance benchmarks for bumpver
//!
//! These benchmarks measure the text edits on documents of realistic size:
//! - Lockfile patching as the number of `[[package]]` blocks grows
//! - Manifest lookup and rewrite on a manifest with many dependency tables
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench lockfile_patch
//! ```
//!
//! ## Expected Performance Characteristics
//!
//! Both edits are a single pass over the document plus one copy when a
//! splice happens, so time should scale linearly with document size.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use bumpver::edit::{locate_and_extract_version, patch_lockfile, rewrite_manifest};

// ============================================================================
// Helper Functions
// ============================================================================

/// Build a lockfile with `count` blocks, the target sitting in the middle
fn synthetic_lockfile(count: usize) -> String {
    let mut text = String::from("# This file is automatically @generated by Cargo.\nversion = 4\n");
    for i in 0..count {
        let name = if i == count / 2 {
            "target-crate".to_string()
        } else {
            format!("dep-{}", i)
        };
        text.push_str(&format!(
            "\n[[package]]\nname = \"{}\"\nversion = \"1.{}.0\"\nsource = \"registry+https://github.com/rust-lang/crates.io-index\"\ndependencies = [\n \"dep-{}\",\n]\n",
            name,
            i,
            i + 1
        ));
    }
    text
}

/// Build a manifest whose `[package]` section comes after many tables
fn synthetic_manifest(tables: usize) -> String {
    let mut text = String::new();
    for i in 0..tables {
        text.push_str(&format!(
            "[target.'cfg(feature = \"f{}\")'.dependencies]\nversion = \"0.{}.0\"\n\n",
            i, i
        ));
    }
    text.push_str("[package]\nname = \"target-crate\"\nversion = \"3.1.4\"\nedition = \"2024\"\n");
    text
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_lockfile_patch(c: &mut Criterion) {
    let mut group = c.benchmark_group("lockfile_patch");

    for count in [10, 500, 5_000].iter() {
        let lockfile = synthetic_lockfile(*count);
        group.throughput(Throughput::Bytes(lockfile.len() as u64));

        group.bench_with_input(BenchmarkId::new("match", count), count, |b, _| {
            b.iter(|| black_box(patch_lockfile(&lockfile, "target-crate", "9.9.9")));
        });

        group.bench_with_input(BenchmarkId::new("no_match", count), count, |b, _| {
            b.iter(|| black_box(patch_lockfile(&lockfile, "absent-crate", "9.9.9")));
        });
    }

    group.finish();
}

fn bench_manifest_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest_rewrite");

    for tables in [1, 100, 1_000].iter() {
        let manifest = synthetic_manifest(*tables);
        group.throughput(Throughput::Bytes(manifest.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(tables), tables, |b, _| {
            b.iter(|| {
                let found = locate_and_extract_version(&manifest).unwrap();
                black_box(rewrite_manifest(&manifest, &found.section, "3.1.5").unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lockfile_patch, bench_manifest_rewrite);
criterion_main!(benches);
