// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use epiphyte_view_state::{HostCameraParams, extract_view_state};
use kurbo::Size;

/// Deterministic camera motion, one distinct pose per step.
fn camera(step: u64) -> HostCameraParams {
    let t = step as f64;
    HostCameraParams {
        latitude: 40.0 + (t % 100.0) * 0.001,
        longitude: -74.0 + (t % 360.0) * 0.01,
        heading: (t * 7.0) % 360.0,
        tilt: (t * 3.0) % 67.5,
        zoom: 3.0 + (t % 19.0) * 0.5,
    }
}

fn bench_view_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_state");
    let surface = Size::new(1920.0, 1080.0);

    // The full per-tick extraction, pose changing every iteration.
    group.bench_function("extract_view_state", |b| {
        let mut step = 0_u64;
        b.iter(|| {
            step += 1;
            black_box(extract_view_state(black_box(camera(step)), surface))
        });
    });

    // The adapter compares the extracted camera against the previous
    // frame's on every tick; both branches of that comparison matter.
    group.bench_function("change_detection_equal", |b| {
        let previous = extract_view_state(camera(1), surface);
        let current = extract_view_state(camera(1), surface);
        b.iter(|| black_box(black_box(previous) == black_box(current)));
    });

    group.bench_function("change_detection_moved", |b| {
        let previous = extract_view_state(camera(1), surface);
        let current = extract_view_state(camera(2), surface);
        b.iter(|| black_box(black_box(previous) == black_box(current)));
    });

    group.finish();
}

criterion_group!(benches, bench_view_state);
criterion_main!(benches);
