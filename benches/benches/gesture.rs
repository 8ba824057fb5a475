// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use plotview_gesture::{
    GestureInterpreter, PointerAction, PointerEvent, PointerId, PointerTracker,
};
use plotview_viewport::{AxisKind, AxisViewport, ViewportController, ViewportState};

const A: PointerId = PointerId(0);
const B: PointerId = PointerId(1);

/// One down, `moves` drags and an up.
fn pan_stream(moves: u32) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(moves as usize + 2);
    events.push(PointerEvent::down(A, Point::new(0.0, 0.0), 0));
    for i in 1..=moves {
        let x = f64::from(i) * 3.0;
        events.push(PointerEvent::moved(A, Point::new(x, 0.5 * x), u64::from(i) * 8));
    }
    let end = f64::from(moves) * 3.0;
    events.push(PointerEvent::up(
        A,
        Point::new(end, 0.5 * end),
        u64::from(moves + 1) * 8,
    ));
    events
}

/// Two pointers spreading apart over `moves` samples.
fn pinch_stream(moves: u32) -> Vec<PointerEvent> {
    let pair = |action, spread: f64, t| {
        PointerEvent::new(action, t)
            .with_pointer(A, Point::new(200.0 - spread, 100.0))
            .with_pointer(B, Point::new(200.0 + spread, 100.0))
    };
    let mut events = Vec::with_capacity(moves as usize + 3);
    events.push(PointerEvent::down(A, Point::new(150.0, 100.0), 0));
    events.push(pair(PointerAction::Down(B), 50.0, 1));
    for i in 1..=moves {
        events.push(pair(PointerAction::Move, 50.0 + f64::from(i), u64::from(i) * 8));
    }
    events.push(PointerEvent::new(PointerAction::Cancel, u64::from(moves + 1) * 8));
    events
}

fn run(events: &[PointerEvent]) -> usize {
    let mut tracker = PointerTracker::new();
    let mut gestures = GestureInterpreter::new();
    let mut axis = AxisViewport::new(AxisKind::Category, 0.0..800.0);
    let mut state = ViewportState::new();
    let mut emitted = 0;
    for event in events {
        let Some(sample) = tracker.track(event, 2.0) else {
            continue;
        };
        for gesture in gestures.on_sample(&sample) {
            emitted += 1;
            match gesture {
                plotview_gesture::GestureEvent::Pan { pixel_delta, .. } => {
                    ViewportController::apply_pan(&mut state, Some(&mut axis), pixel_delta.x, 2.0);
                }
                plotview_gesture::GestureEvent::Pinch {
                    scale_factor,
                    center,
                } => {
                    ViewportController::apply_pinch(
                        &mut state,
                        Some(&mut axis),
                        scale_factor,
                        center,
                    );
                }
                _ => {}
            }
        }
    }
    black_box(axis);
    emitted
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("plotview_gesture");
    group.sample_size(50);

    for &moves in &[64_u32, 1_024_u32] {
        group.bench_function(format!("pan(moves={moves})"), |b| {
            b.iter_batched(
                || pan_stream(moves),
                |events| black_box(run(&events)),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("pinch(moves={moves})"), |b| {
            b.iter_batched(
                || pinch_stream(moves),
                |events| black_box(run(&events)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gesture);
criterion_main!(benches);
