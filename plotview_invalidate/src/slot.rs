// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use parking_lot::Mutex;

/// Lazily constructed render context guarded by its own lock.
///
/// The context is created on first use inside the paint pass and kept for
/// subsequent frames. [`RenderSlot::reset`] drops it so the next paint builds
/// a fresh one, e.g. after the display density changed.
pub struct RenderSlot<C> {
    context: Mutex<Option<C>>,
}

impl<C> RenderSlot<C> {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            context: Mutex::new(None),
        }
    }

    /// Runs `f` with the context, constructing it with `init` first if needed.
    ///
    /// The render lock is held for the duration of `init` and `f`.
    ///
    /// ```
    /// use plotview_invalidate::RenderSlot;
    ///
    /// let slot = RenderSlot::new();
    /// let first = slot.with_context(|| String::from("ctx"), |ctx| ctx.len());
    /// let again = slot.with_context(|| unreachable!(), |ctx| ctx.len());
    /// assert_eq!((first, again), (3, 3));
    /// ```
    pub fn with_context<R>(&self, init: impl FnOnce() -> C, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.context.lock();
        let context = guard.get_or_insert_with(|| {
            tracing::debug!("creating render context");
            init()
        });
        f(context)
    }

    /// Whether a context has been constructed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.context.lock().is_some()
    }

    /// Drops the context, if any.
    pub fn reset(&self) {
        if self.context.lock().take().is_some() {
            tracing::debug!("render context reset");
        }
    }
}

impl<C> Default for RenderSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for RenderSlot<C> {
    /// Never waits on a paint in progress.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("RenderSlot");
        match self.context.try_lock() {
            Some(context) => debug.field("initialized", &context.is_some()),
            None => debug.field("in_use", &true),
        };
        debug.finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_built_once() {
        let slot = RenderSlot::new();
        let mut builds = 0;
        for _ in 0..3 {
            slot.with_context(
                || {
                    builds += 1;
                    0_u32
                },
                |ctx| *ctx += 1,
            );
        }
        assert_eq!(builds, 1);
        assert_eq!(slot.with_context(|| 0, |ctx| *ctx), 3);
    }

    #[test]
    fn debug_does_not_wait_for_the_context() {
        let slot = RenderSlot::new();
        let formatted = slot.with_context(|| 0_u32, |_| format!("{slot:?}"));
        assert!(formatted.contains("in_use"));
        assert!(format!("{slot:?}").contains("initialized: true"));
    }

    #[test]
    fn reset_rebuilds_on_next_use() {
        let slot = RenderSlot::new();
        slot.with_context(|| 1_u32, |_| ());
        assert!(slot.is_initialized());

        slot.reset();
        assert!(!slot.is_initialized());

        assert_eq!(slot.with_context(|| 2_u32, |ctx| *ctx), 2);
    }
}
