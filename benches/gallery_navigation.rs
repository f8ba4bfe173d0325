// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery scanning and lightbox stepping.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_lightbox::config::SortOrder;
use iced_lightbox::gallery::{Gallery, GalleryEntry};
use iced_lightbox::lightbox::{Lightbox, Surface};
use std::hint::black_box;
use std::path::PathBuf;

struct NullSurface;

impl Surface for NullSurface {
    fn set_visible(&mut self, _visible: bool) {}
    fn set_scroll_locked(&mut self, _locked: bool) {}
    fn display(&mut self, _entry: &GalleryEntry) {}
}

fn synthetic_gallery(count: usize) -> Gallery {
    Gallery::from_entries(
        (0..count)
            .map(|i| {
                GalleryEntry::new(PathBuf::from(format!("img_{i:04}.jpg")), format!("img {i}"), None)
            })
            .collect(),
    )
}

/// Benchmark directory scanning over a populated temp directory.
fn bench_scan_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    for i in 0..100 {
        std::fs::write(temp_dir.path().join(format!("img_{i:04}.jpg")), b"x")
            .expect("failed to write fixture");
    }

    group.bench_function("scan_directory_100", |b| {
        b.iter(|| {
            let gallery = Gallery::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
                .expect("scan failed");
            black_box(gallery.len());
        });
    });

    group.finish();
}

/// Benchmark pure navigation stepping (next/previous with wrap-around).
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let gallery = synthetic_gallery(1000);
    let mut surface = NullSurface;
    let mut lightbox = Lightbox::new();
    lightbox.open(0, &gallery, &mut surface);

    group.bench_function("next", |b| {
        b.iter(|| {
            lightbox.next(&gallery, &mut surface);
            black_box(lightbox.current_index());
        });
    });

    group.bench_function("previous", |b| {
        b.iter(|| {
            lightbox.previous(&gallery, &mut surface);
            black_box(lightbox.current_index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scan_directory, bench_step);
criterion_main!(benches);
