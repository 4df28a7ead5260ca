// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_reel::domain::video::{format_duration, ThumbnailSet};
use iced_reel::infrastructure::SimulatedMediaElement;
use iced_reel::player::{Controller, PointerSample, TimelineBounds};
use std::hint::black_box;

fn notification_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_events");

    let mut controller = Controller::mount(SimulatedMediaElement::new(), ThumbnailSet::default());
    controller.media_mut().load(3600.0);
    controller.toggle_playback();
    controller.pump();

    group.bench_function("time_update_round_trip", |b| {
        b.iter(|| {
            controller.media_mut().advance(black_box(0.25));
            black_box(controller.pump());
        });
    });

    controller.set_timeline_bounds(TimelineBounds::new(0.0, 1280.0));
    group.bench_function("scrub_drag_100_moves", |b| {
        b.iter(|| {
            controller.pointer_down(PointerSample::pressed(0.0));
            for step in 0..100 {
                controller.pointer_move(PointerSample::pressed(step as f32 * 12.8));
            }
            controller.pointer_up(PointerSample::released(640.0));
            black_box(controller.pump());
        });
    });

    group.finish();
}

fn formatting_benchmark(c: &mut Criterion) {
    c.bench_function("format_duration", |b| {
        b.iter(|| black_box(format_duration(black_box(3725.4))));
    });
}

criterion_group!(benches, notification_benchmark, formatting_benchmark);
criterion_main!(benches);
