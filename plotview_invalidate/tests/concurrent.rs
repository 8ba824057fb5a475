// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Invalidation from several threads while a consumer drains.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use plotview_invalidate::{InvalidationCoordinator, InvalidationFlags};

#[test]
fn concurrent_requests_are_never_lost() {
    let scheduled = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&scheduled);
    let coordinator = InvalidationCoordinator::<()>::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    const THREADS: usize = 4;
    const PER_THREAD: usize = 250;

    let mut saw_data = false;
    thread::scope(|scope| {
        for i in 0..THREADS {
            let handle = coordinator.handle();
            scope.spawn(move || {
                for j in 0..PER_THREAD {
                    handle.request_invalidate(i == 0 && j == PER_THREAD - 1);
                }
            });
        }
        // Drain concurrently with the producers.
        for _ in 0..100 {
            saw_data |= coordinator.take_pending().update_data();
            thread::yield_now();
        }
    });
    saw_data |= coordinator.take_pending().update_data();

    assert_eq!(scheduled.load(Ordering::SeqCst), THREADS * PER_THREAD);
    assert!(saw_data, "the data request must survive draining");
    assert_eq!(coordinator.take_pending(), InvalidationFlags::empty());
}

#[test]
fn handle_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<plotview_invalidate::InvalidationHandle>();
}

#[test]
fn requests_and_debug_do_not_wait_for_a_paint() {
    let coordinator = InvalidationCoordinator::<u32>::new(|| {});
    let handle = coordinator.handle();
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();

    thread::scope(|scope| {
        let painter = &coordinator;
        scope.spawn(move || {
            painter.render_slot().with_context(
                || 0,
                |_| {
                    entered_tx.send(()).expect("main thread listening");
                    release_rx.recv().expect("main thread releases the paint");
                },
            );
        });

        entered_rx.recv().expect("paint started");
        let formatted = format!("{coordinator:?}");
        handle.request_invalidate(true);
        assert!(coordinator.is_pending());
        assert!(formatted.contains("in_use"));
        release_tx.send(()).expect("paint waiting");
    });

    assert!(coordinator.take_pending().update_data());
    assert!(coordinator.render_slot().is_initialized());
}
