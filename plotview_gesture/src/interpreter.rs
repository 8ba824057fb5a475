// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.

use kurbo::Point;

use crate::config::{ConfigError, GestureConfig};
use crate::drag::DragState;
use crate::event::{GestureEvent, GestureEvents};
use crate::pointer::{PointerAction, TouchSample, logical_delta, logical_point};
use crate::tap::TapRecognizer;

/// Where the interpreter is within the current touch interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// One pointer is down and has not left its slop radius.
    Pressed,
    /// One pointer is dragging.
    Panning,
    /// Two or more pointers are down.
    Pinching,
}

/// Classifies [`TouchSample`] streams into [`GestureEvent`]s.
///
/// One continuous gesture is tracked at a time. Pan and pinch share a single
/// started/completed pair: the first pan or pinch delta of a down→up
/// interaction is preceded by [`GestureEvent::InteractionStarted`], and the
/// release of the last pointer emits [`GestureEvent::InteractionCompleted`],
/// no matter how often the interaction switches between one and two pointers.
#[derive(Clone, Debug)]
pub struct GestureInterpreter {
    config: GestureConfig,
    phase: GesturePhase,
    started: bool,
    drag: DragState,
    taps: TapRecognizer,
    /// Last reported logical position, used when a cancel carries no pointers.
    last_point: Point,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureInterpreter {
    /// Creates an interpreter with [`GestureConfig::default`] thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid(GestureConfig::default())
    }

    /// Creates an interpreter with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`GestureConfig::validate`].
    pub fn with_config(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
            started: false,
            drag: DragState::default(),
            taps: TapRecognizer::new(),
            last_point: Point::ZERO,
        }
    }

    /// The thresholds in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` between [`GestureEvent::InteractionStarted`] and
    /// [`GestureEvent::InteractionCompleted`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.started
    }

    /// Returns `true` while a tap waits to be confirmed or upgraded to a double tap.
    #[must_use]
    pub fn has_pending_tap(&self) -> bool {
        self.taps.has_pending()
    }

    /// Feeds one sample and returns the gestures it completes, in order.
    pub fn on_sample(&mut self, sample: &TouchSample) -> GestureEvents {
        let mut events = GestureEvents::new();
        match sample.action {
            PointerAction::Down(_) => self.on_down(sample, &mut events),
            PointerAction::Move => self.on_move(sample, &mut events),
            PointerAction::Up(_) => self.on_up(sample, &mut events),
            PointerAction::Cancel => self.on_cancel(&mut events),
        }
        events
    }

    /// Confirms a pending tap whose double-tap window has expired.
    ///
    /// Hosts call this from a timer; `now_ms` shares the time base of the
    /// sample timestamps.
    pub fn poll(&mut self, now_ms: u64) -> Option<GestureEvent> {
        self.taps.poll(now_ms, &self.config)
    }

    /// Abandons any gesture in progress without emitting events.
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.started = false;
        self.drag.end();
        self.taps.cancel();
    }

    fn on_down(&mut self, sample: &TouchSample, events: &mut GestureEvents) {
        let Some(point) = sample.action_point() else {
            return;
        };

        if sample.pointer_count() == 1 {
            if self.started {
                // The previous interaction never saw its final Up.
                self.complete(events);
            }
            let logical = logical_point(point, sample.scale);
            self.last_point = logical;
            self.drag.start(point);
            self.phase = GesturePhase::Pressed;
            events.extend(
                self.taps
                    .on_press(point, logical, sample.time_ms, &self.config),
            );
        } else {
            // An extra pointer only re-baselines; the next move reports the pinch.
            self.taps.disqualify();
            self.phase = GesturePhase::Pinching;
        }
    }

    fn on_move(&mut self, sample: &TouchSample, events: &mut GestureEvents) {
        match (sample.current.as_slice(), sample.previous.as_slice()) {
            ([], _) => {}
            ([current], [previous, ..]) => {
                let (current, previous) = (*current, *previous);
                if matches!(self.phase, GesturePhase::Idle | GesturePhase::Pressed) {
                    if !self.drag.is_pressed() {
                        // Moves without a preceding down start from where they are.
                        self.drag.start(previous);
                        self.phase = GesturePhase::Pressed;
                    }
                    if !self.drag.latch_slop(current, self.config.touch_slop) {
                        return;
                    }
                    tracing::trace!(offset = ?self.drag.total_offset(current), "pan left slop");
                    self.taps.disqualify();
                }
                self.phase = GesturePhase::Panning;

                let logical = logical_point(current, sample.scale);
                self.begin(logical, events);
                self.last_point = logical;
                let pixel_delta = current - previous;
                events.push(GestureEvent::Pan {
                    delta: logical_delta(pixel_delta, sample.scale),
                    pixel_delta,
                });
            }
            ([c0, c1, ..], [p0, p1, ..]) => {
                self.taps.disqualify();
                self.phase = GesturePhase::Pinching;

                let previous_distance = p0.distance(*p1);
                if !(previous_distance.is_finite() && previous_distance > 0.0) {
                    return;
                }
                let scale_factor = c0.distance(*c1) / previous_distance;
                let center = logical_point(c0.midpoint(*c1), sample.scale);
                self.begin(center, events);
                self.last_point = center;
                events.push(GestureEvent::Pinch {
                    scale_factor,
                    center,
                });
            }
            _ => {}
        }
    }

    fn on_up(&mut self, sample: &TouchSample, events: &mut GestureEvents) {
        let remaining = sample.remaining_points();
        match remaining.as_slice() {
            [] => {
                if let Some(point) = sample.action_point() {
                    self.last_point = logical_point(point, sample.scale);
                }
                self.taps.on_release(sample.time_ms, &self.config);
                if self.started {
                    self.complete(events);
                }
                self.drag.end();
                self.phase = GesturePhase::Idle;
            }
            [survivor] => {
                if self.started {
                    // Pinch continues as a pan without a fresh slop check.
                    self.phase = GesturePhase::Panning;
                } else {
                    self.drag.start(*survivor);
                    self.phase = GesturePhase::Pressed;
                }
            }
            _ => self.phase = GesturePhase::Pinching,
        }
    }

    fn on_cancel(&mut self, events: &mut GestureEvents) {
        self.taps.cancel();
        if self.started {
            self.complete(events);
        }
        self.drag.end();
        self.phase = GesturePhase::Idle;
    }

    fn begin(&mut self, point: Point, events: &mut GestureEvents) {
        if !self.started {
            self.started = true;
            tracing::debug!(?point, phase = ?self.phase, "interaction started");
            events.push(GestureEvent::InteractionStarted(point));
        }
    }

    fn complete(&mut self, events: &mut GestureEvents) {
        self.started = false;
        tracing::debug!(point = ?self.last_point, "interaction completed");
        events.push(GestureEvent::InteractionCompleted(self.last_point));
    }
}
