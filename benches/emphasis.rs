// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel cell emphasis.
//!
//! Measures the performance of:
//! - The pure percentage to scale/alpha mapping
//! - A full layout pass over a strip of cells

use criterion::{criterion_group, criterion_main, Criterion};
use scaling_carousel::cell::{
    CarouselCell, CellFrame, ContainerScroll, LayoutContext, ScalingCell, ScalingTunables,
    VisualState,
};
use std::hint::black_box;

const CELL_COUNT: usize = 200;
const CELL_WIDTH: f32 = 220.0;
const STRIDE: f32 = 244.0;

/// Benchmark the pure emphasis function.
fn bench_emphasis(c: &mut Criterion) {
    let tunables = ScalingTunables::default();

    c.bench_function("emphasis", |b| {
        b.iter(|| black_box(tunables.emphasis(black_box(0.42))));
    });
}

/// Benchmark one layout pass over a long strip.
fn bench_layout_pass(c: &mut Criterion) {
    let frames: Vec<CellFrame> = (0..CELL_COUNT)
        .map(|index| CellFrame::new(index as f32 * STRIDE, CELL_WIDTH))
        .collect();
    let mut cells = vec![ScalingCell::new(VisualState::default()); CELL_COUNT];
    let scroll = ContainerScroll::new(STRIDE * 17.5, 0.0);

    c.bench_function("layout_pass_200_cells", |b| {
        b.iter(|| {
            for (cell, frame) in cells.iter_mut().zip(&frames) {
                cell.on_layout(&LayoutContext::attached(*frame, black_box(scroll)));
            }
            black_box(&cells);
        });
    });
}

criterion_group!(benches, bench_emphasis, bench_layout_pass);
criterion_main!(benches);
