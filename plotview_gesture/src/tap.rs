// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap and double-tap recognition with spatial and temporal tolerance.
//!
//! A press becomes a *tap candidate* when it is released quickly, never left
//! its slop radius and never had a second pointer. A candidate is not reported
//! immediately: it stays pending for the double-tap window, and is either
//!
//! - confirmed as [`GestureEvent::SingleTap`] once the window expires
//!   (observed through [`TapRecognizer::poll`] or the next press), or
//! - turned into [`GestureEvent::DoubleTap`] when a second press lands inside
//!   both the time window and the double-tap slop.
//!
//! Time is supplied by the caller as milliseconds so the recognizer works
//! without a clock.

use kurbo::Point;

use crate::config::GestureConfig;
use crate::event::GestureEvent;

#[derive(Clone, Copy, Debug)]
struct Press {
    position: Point,
    logical: Point,
    pressed_ms: u64,
    /// Cleared by movement, extra pointers, or being the second half of a double tap.
    eligible: bool,
}

#[derive(Clone, Copy, Debug)]
struct PendingTap {
    position: Point,
    logical: Point,
    released_ms: u64,
}

/// Recognizes single and double taps from press/release timing.
#[derive(Clone, Debug, Default)]
pub struct TapRecognizer {
    press: Option<Press>,
    pending: Option<PendingTap>,
}

impl TapRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first pointer of a new interaction touching down.
    ///
    /// `position` is in device pixels (used against the slop), `logical` is
    /// what gets reported. If a tap was pending, this resolves it: a
    /// [`GestureEvent::DoubleTap`] when this press is close enough in time and
    /// space, otherwise a [`GestureEvent::SingleTap`] for the pending tap.
    pub fn on_press(
        &mut self,
        position: Point,
        logical: Point,
        now_ms: u64,
        config: &GestureConfig,
    ) -> Option<GestureEvent> {
        let mut press = Press {
            position,
            logical,
            pressed_ms: now_ms,
            eligible: true,
        };

        let resolved = self.pending.take().map(|pending| {
            let elapsed = now_ms.saturating_sub(pending.released_ms);
            let near = pending.position.distance(position) <= config.double_tap_slop;
            if elapsed < config.double_tap_timeout_ms && near {
                press.eligible = false;
                tracing::debug!(elapsed, "double tap");
                GestureEvent::DoubleTap(pending.logical)
            } else {
                tracing::debug!(elapsed, near, "single tap confirmed by next press");
                GestureEvent::SingleTap(pending.logical)
            }
        });

        self.press = Some(press);
        resolved
    }

    /// Marks the current press as no longer a tap (it moved or gained a pointer).
    pub fn disqualify(&mut self) {
        if let Some(press) = &mut self.press {
            press.eligible = false;
        }
    }

    /// Records the last pointer lifting; an eligible press becomes a pending tap.
    pub fn on_release(&mut self, now_ms: u64, config: &GestureConfig) {
        let Some(press) = self.press.take() else {
            return;
        };
        let held = now_ms.saturating_sub(press.pressed_ms);
        if press.eligible && held <= config.tap_timeout_ms {
            self.pending = Some(PendingTap {
                position: press.position,
                logical: press.logical,
                released_ms: now_ms,
            });
        }
    }

    /// Confirms a pending tap as [`GestureEvent::SingleTap`] once its
    /// double-tap window has elapsed.
    pub fn poll(&mut self, now_ms: u64, config: &GestureConfig) -> Option<GestureEvent> {
        let pending = self.pending?;
        if now_ms.saturating_sub(pending.released_ms) < config.double_tap_timeout_ms {
            return None;
        }
        self.pending = None;
        tracing::debug!("single tap confirmed by timeout");
        Some(GestureEvent::SingleTap(pending.logical))
    }

    /// Returns `true` while a tap waits for its double-tap window to expire.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the current press and any pending tap.
    pub fn cancel(&mut self) {
        self.press = None;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(taps: &mut TapRecognizer, x: f64, now: u64) -> Option<GestureEvent> {
        let p = Point::new(x, 0.0);
        taps.on_press(p, p, now, &GestureConfig::default())
    }

    fn release(taps: &mut TapRecognizer, now: u64) {
        taps.on_release(now, &GestureConfig::default());
    }

    #[test]
    fn tap_is_confirmed_only_after_double_tap_window() {
        let mut taps = TapRecognizer::new();
        let config = GestureConfig::default();
        assert_eq!(press(&mut taps, 10.0, 0), None);
        release(&mut taps, 50);

        assert!(taps.has_pending());
        assert_eq!(taps.poll(50 + 299, &config), None);
        assert_eq!(
            taps.poll(50 + 300, &config),
            Some(GestureEvent::SingleTap(Point::new(10.0, 0.0)))
        );
        assert!(!taps.has_pending());
        assert_eq!(taps.poll(10_000, &config), None);
    }

    #[test]
    fn second_press_in_window_is_double_tap() {
        let mut taps = TapRecognizer::new();
        press(&mut taps, 10.0, 0);
        release(&mut taps, 50);

        assert_eq!(
            press(&mut taps, 30.0, 150),
            Some(GestureEvent::DoubleTap(Point::new(10.0, 0.0)))
        );
        // The second half of a double tap never becomes a tap itself.
        release(&mut taps, 200);
        assert!(!taps.has_pending());
    }

    #[test]
    fn far_second_press_confirms_first_tap() {
        let mut taps = TapRecognizer::new();
        press(&mut taps, 0.0, 0);
        release(&mut taps, 50);

        assert_eq!(
            press(&mut taps, 500.0, 100),
            Some(GestureEvent::SingleTap(Point::new(0.0, 0.0)))
        );
        release(&mut taps, 150);
        assert!(taps.has_pending());
    }

    #[test]
    fn late_second_press_confirms_first_tap() {
        let mut taps = TapRecognizer::new();
        press(&mut taps, 0.0, 0);
        release(&mut taps, 50);

        assert_eq!(
            press(&mut taps, 0.0, 50 + 300),
            Some(GestureEvent::SingleTap(Point::new(0.0, 0.0)))
        );
    }

    #[test]
    fn long_press_is_not_a_tap() {
        let mut taps = TapRecognizer::new();
        press(&mut taps, 0.0, 0);
        release(&mut taps, 501);
        assert!(!taps.has_pending());
    }

    #[test]
    fn disqualified_press_is_not_a_tap() {
        let mut taps = TapRecognizer::new();
        press(&mut taps, 0.0, 0);
        taps.disqualify();
        release(&mut taps, 20);
        assert!(!taps.has_pending());
    }

    #[test]
    fn cancel_drops_pending_tap() {
        let mut taps = TapRecognizer::new();
        press(&mut taps, 0.0, 0);
        release(&mut taps, 20);
        taps.cancel();
        assert_eq!(taps.poll(10_000, &GestureConfig::default()), None);
    }
}
