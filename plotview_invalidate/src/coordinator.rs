// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::flags::InvalidationFlags;
use crate::scheduler::RepaintScheduler;
use crate::slot::RenderSlot;

struct Shared {
    flags: Mutex<InvalidationFlags>,
    scheduler: Box<dyn RepaintScheduler>,
}

impl Shared {
    fn request(&self, update_data: bool) {
        {
            let mut flags = self.flags.lock();
            *flags |= InvalidationFlags::request(update_data);
            tracing::trace!(update_data, pending = ?*flags, "invalidate requested");
        }
        self.scheduler.schedule_repaint();
    }
}

/// Serializes invalidation requests against the paint pass.
///
/// Owns two independent critical sections: the pending [`InvalidationFlags`]
/// (shared with every [`InvalidationHandle`]) and a [`RenderSlot`] holding the
/// render context. Neither lock is held while the other is taken.
pub struct InvalidationCoordinator<C> {
    shared: Arc<Shared>,
    render: RenderSlot<C>,
}

impl<C> InvalidationCoordinator<C> {
    /// Creates a coordinator with clean flags and no render context.
    pub fn new(scheduler: impl RepaintScheduler + 'static) -> Self {
        Self {
            shared: Arc::new(Shared {
                flags: Mutex::new(InvalidationFlags::empty()),
                scheduler: Box::new(scheduler),
            }),
            render: RenderSlot::new(),
        }
    }

    /// Marks the model dirty, OR-merges `update_data`, then schedules a repaint.
    ///
    /// Callable from any thread through an [`InvalidationHandle`]. Requests
    /// made before the next paint coalesce into one recompute.
    pub fn request_invalidate(&self, update_data: bool) {
        self.shared.request(update_data);
    }

    /// Returns a cloneable handle for requesting invalidation from other threads.
    #[must_use]
    pub fn handle(&self) -> InvalidationHandle {
        InvalidationHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Reads and clears the pending flags in one step.
    pub fn take_pending(&self) -> InvalidationFlags {
        core::mem::take(&mut *self.shared.flags.lock())
    }

    /// Whether a recompute is pending, without consuming it.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.shared.flags.lock().needs_recompute()
    }

    /// The render-context slot.
    #[must_use]
    pub fn render_slot(&self) -> &RenderSlot<C> {
        &self.render
    }
}

impl<C> fmt::Debug for InvalidationCoordinator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = *self.shared.flags.lock();
        f.debug_struct("InvalidationCoordinator")
            .field("pending", &pending)
            .field("render", &self.render)
            .finish_non_exhaustive()
    }
}

/// A `Send + Sync` handle that can only request invalidation.
///
/// Background producers (a data feed, a model update task) hold one of these
/// instead of the view.
///
/// ```
/// use plotview_invalidate::InvalidationCoordinator;
///
/// let coordinator = InvalidationCoordinator::<()>::new(|| {});
/// let handle = coordinator.handle();
/// std::thread::spawn(move || handle.request_invalidate(true))
///     .join()
///     .unwrap();
/// assert!(coordinator.take_pending().update_data());
/// ```
#[derive(Clone)]
pub struct InvalidationHandle {
    shared: Arc<Shared>,
}

impl InvalidationHandle {
    /// See [`InvalidationCoordinator::request_invalidate`].
    pub fn request_invalidate(&self, update_data: bool) {
        self.shared.request(update_data);
    }
}

impl fmt::Debug for InvalidationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidationHandle").finish_non_exhaustive()
    }
}
