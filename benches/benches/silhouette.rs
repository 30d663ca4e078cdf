// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `jellysheet_silhouette` + `jellysheet_motion`.
//!
//! Outline generation runs once per gesture sample at interactive rates, so
//! these track the per-sample cost of the generator and of a full animator
//! tick.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};

use jellysheet_controller::{GesturePhase, GestureSample, SheetConfig, SheetController};
use jellysheet_motion::{Easing, SilhouetteAnimator};
use jellysheet_silhouette::{Deformation, SilhouetteParams, silhouette};

const SIZE: Size = Size::new(400.0, 300.0);

fn bench_generate(c: &mut Criterion) {
    let params = SilhouetteParams::default();
    let mut group = c.benchmark_group("silhouette/generate");

    group.bench_function("rest", |b| {
        b.iter(|| silhouette(black_box(SIZE), black_box(None), &params));
    });
    group.bench_function("press", |b| {
        let press = Some(Deformation::Press(Point::new(180.0, 30.0)));
        b.iter(|| silhouette(black_box(SIZE), black_box(press), &params));
    });
    group.bench_function("curve", |b| {
        let curve = Some(Deformation::Curve(35.0));
        b.iter(|| silhouette(black_box(SIZE), black_box(curve), &params));
    });

    group.finish();
}

fn bench_animator_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("silhouette/animator");

    group.bench_function("tick_midflight", |b| {
        let mut animator = SilhouetteAnimator::new(SilhouetteParams::default());
        animator.set(SIZE, None);
        animator.animate(
            SIZE,
            Deformation::Curve(75.0),
            Deformation::Curve(20.0),
            1.0,
            Easing::EaseOut,
            0.0,
        );
        let mut now = 0.0;
        b.iter(|| {
            // Stay mid-flight so every tick regenerates an interpolated outline.
            now = (now + 1.0e-6) % 0.9;
            animator.tick(black_box(now))
        });
    });

    group.finish();
}

fn bench_controller_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/drag_stream");

    group.bench_function("interaction_drag", |b| {
        let mut sheet = SheetController::with_seed(SheetConfig::default(), 1);
        sheet.set_container(Some(Size::new(400.0, 800.0)));
        let mut now = 0.0;
        b.iter(|| {
            sheet.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), now);
            for step in 1..=8 {
                let y = 520.0 + f64::from(step);
                sheet.handle_gesture(
                    GestureSample {
                        phase: GesturePhase::Changed,
                        translation: Vec2::new(0.0, y - 520.0),
                        velocity: Vec2::new(0.0, 60.0),
                        location: Point::new(200.0, y),
                    },
                    now,
                );
            }
            let outcome = sheet.handle_gesture(
                GestureSample {
                    phase: GesturePhase::Ended,
                    translation: Vec2::new(0.0, 8.0),
                    velocity: Vec2::new(0.0, 60.0),
                    location: Point::new(200.0, 528.0),
                },
                now,
            );
            now += 1.0;
            sheet.tick(black_box(now));
            outcome
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_animator_tick, bench_controller_drag);
criterion_main!(benches);
