// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Asks the host surface to run a paint pass later.
///
/// Called after every invalidation request, possibly from a background
/// thread and never while the invalidation lock is held. Implementations
/// should only post a request; the paint itself happens on the UI thread.
pub trait RepaintScheduler: Send + Sync {
    /// Requests a repaint.
    fn schedule_repaint(&self);
}

impl<F> RepaintScheduler for F
where
    F: Fn() + Send + Sync,
{
    fn schedule_repaint(&self) {
        self();
    }
}
