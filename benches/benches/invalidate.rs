// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::thread;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use plotview_invalidate::InvalidationCoordinator;

fn bench_invalidate(c: &mut Criterion) {
    let mut group = c.benchmark_group("plotview_invalidate");
    group.sample_size(50);

    group.bench_function("request_then_take", |b| {
        let coordinator = InvalidationCoordinator::<()>::new(|| {});
        b.iter(|| {
            coordinator.request_invalidate(false);
            coordinator.request_invalidate(true);
            black_box(coordinator.take_pending())
        });
    });

    for &threads in &[2_usize, 4_usize] {
        group.bench_function(format!("contended(threads={threads})"), |b| {
            let coordinator = InvalidationCoordinator::<()>::new(|| {});
            b.iter(|| {
                thread::scope(|scope| {
                    for _ in 0..threads {
                        let handle = coordinator.handle();
                        scope.spawn(move || {
                            for _ in 0..256 {
                                handle.request_invalidate(false);
                            }
                        });
                    }
                    for _ in 0..64 {
                        black_box(coordinator.take_pending());
                    }
                });
            });
        });
    }

    group.bench_function("render_slot_reuse", |b| {
        let coordinator = InvalidationCoordinator::<Vec<u8>>::new(|| {});
        b.iter(|| {
            coordinator
                .render_slot()
                .with_context(|| Vec::with_capacity(64), |ctx| {
                    ctx.clear();
                    ctx.push(1);
                    black_box(ctx.len())
                })
        });
    });

    group.finish();
}

criterion_group!(benches, bench_invalidate);
criterion_main!(benches);
