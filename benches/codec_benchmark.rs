//! URL codec and selection benchmarks.
//!
//! Run with: cargo bench --bench codec_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crudctl::model::{ItemId, Navigation, Operation};
use crudctl::state::{SelectionTracker, UrlStateCodec};

/// URL with `extra` opaque parameters followed by an edit operation.
fn url_with_params(extra: usize) -> String {
    let params: Vec<String> = (0..extra).map(|i| format!("f{i}=v{i}")).collect();
    format!("/crud/?{}&o=edit&item=42", params.join("&"))
}

fn benchmark_base_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("base_url");
    for extra in [0usize, 10, 100] {
        let url = url_with_params(extra);
        group.bench_with_input(BenchmarkId::from_parameter(extra), &url, |b, url| {
            b.iter(|| UrlStateCodec::parse(black_box(url)).base_url());
        });
    }
    group.finish();
}

fn benchmark_bulk_delete_url(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_delete_url");
    let codec = UrlStateCodec::parse(&url_with_params(10));
    for count in [10usize, 1_000] {
        let ids: Vec<ItemId> = (0..count)
            .filter_map(|i| ItemId::new(i.to_string()).ok())
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &ids, |b, ids| {
            b.iter(|| {
                let nav = Navigation::with_items(Operation::DeleteMultiple, black_box(ids.clone()));
                codec.url_for(&nav)
            });
        });
    }
    group.finish();
}

fn benchmark_select_all(c: &mut Criterion) {
    let rows: Vec<ItemId> = (0..10_000)
        .filter_map(|i| ItemId::new(i.to_string()).ok())
        .collect();
    c.bench_function("select_all_then_none_10k", |b| {
        let mut tracker = SelectionTracker::new(rows.clone());
        b.iter(|| {
            tracker.select_all();
            black_box(tracker.select_none())
        });
    });
}

criterion_group!(
    benches,
    benchmark_base_url,
    benchmark_bulk_delete_url,
    benchmark_select_all
);
criterion_main!(benches);
