// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size};
use plotview_gesture::pointer::logical_point;
use plotview_gesture::{
    ConfigError, GestureEvent, GestureInterpreter, PointerAction, PointerEvent, PointerTracker,
};
use plotview_invalidate::{InvalidationCoordinator, InvalidationHandle, RepaintScheduler};
use plotview_viewport::{Axis, AxisKind, ViewportController, ViewportState, select_axis};

use crate::config::ViewConfig;
use crate::controller::{DefaultTouchController, TouchController};
use crate::model::{DisplayMetrics, PlotModel, RenderBackend};
use crate::paint::{PaintOutcome, SkipReason};

/// A touch-enabled plot view.
///
/// Owns the model and render backend, interprets touch input into pan, pinch
/// and tap gestures applied to one axis of the model, and paints on demand.
/// Gesture handling and [`PlotView::draw`] run on the UI thread; other
/// threads request repaints through an [`InvalidationHandle`].
pub struct PlotView<M, B: RenderBackend> {
    config: ViewConfig,
    model: Option<M>,
    backend: Option<B>,
    controller: Box<dyn TouchController>,
    metrics: DisplayMetrics,
    tracker: PointerTracker,
    gestures: GestureInterpreter,
    gestures_enabled: bool,
    /// Logical position of the first pointer while a touch is in progress.
    last_touch: Option<Point>,
    /// Set between a raw touch's start and completion.
    raw_touch_open: bool,
    viewport: ViewportState,
    coordinator: InvalidationCoordinator<B::Context>,
}

impl<M, B> PlotView<M, B>
where
    M: PlotModel<Context = B::Context>,
    B: RenderBackend,
{
    /// Creates an empty view with the default configuration.
    ///
    /// `scheduler` is called whenever the view needs to be painted again.
    pub fn new(scheduler: impl RepaintScheduler + 'static) -> Self {
        Self::assemble(ViewConfig::default(), GestureInterpreter::new(), scheduler)
    }

    /// Creates an empty view with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a gesture threshold is invalid.
    pub fn with_config(
        config: ViewConfig,
        scheduler: impl RepaintScheduler + 'static,
    ) -> Result<Self, ConfigError> {
        let gestures = GestureInterpreter::with_config(config.gesture)?;
        Ok(Self::assemble(config, gestures, scheduler))
    }

    fn assemble(
        config: ViewConfig,
        gestures: GestureInterpreter,
        scheduler: impl RepaintScheduler + 'static,
    ) -> Self {
        Self {
            config,
            model: None,
            backend: None,
            controller: Box::new(DefaultTouchController),
            metrics: DisplayMetrics::default(),
            tracker: PointerTracker::new(),
            gestures,
            gestures_enabled: false,
            last_touch: None,
            raw_touch_open: false,
            viewport: ViewportState::new(),
            coordinator: InvalidationCoordinator::new(scheduler),
        }
    }

    /// The view's configuration.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The attached model, if any.
    #[must_use]
    pub fn model(&self) -> Option<&M> {
        self.model.as_ref()
    }

    /// The attached model, mutably.
    ///
    /// Call [`PlotView::invalidate`] after changing it.
    pub fn model_mut(&mut self) -> Option<&mut M> {
        self.model.as_mut()
    }

    /// Replaces the model and requests a full recompute. Returns the previous model.
    ///
    /// Decides whether touch input is interpreted as gestures, per
    /// [`ViewConfig::gestures`](crate::ViewConfig::gestures). The viewport
    /// state is kept: a double-tap reset still restores the scale captured
    /// from the previous model until [`PlotView::reset_viewport`] is called.
    pub fn set_model(&mut self, model: Option<M>) -> Option<M> {
        let previous = core::mem::replace(&mut self.model, model);
        let kind = self.config.axis_kind;
        let has_axis = axis_of(&mut self.model, kind).is_some();
        self.set_gestures_enabled(self.config.gestures_enabled(has_axis));
        tracing::debug!(
            has_model = self.model.is_some(),
            has_axis,
            gestures = self.gestures_enabled,
            "model attached"
        );
        self.invalidate(true);
        previous
    }

    /// Replaces the render backend. Returns the previous backend.
    ///
    /// The render context is rebuilt by the new backend on the next paint.
    pub fn set_backend(&mut self, backend: Option<B>) -> Option<B> {
        let previous = core::mem::replace(&mut self.backend, backend);
        self.coordinator.render_slot().reset();
        self.invalidate(false);
        previous
    }

    /// Replaces the controller receiving taps, interaction boundaries and raw touches.
    pub fn set_controller(&mut self, controller: impl TouchController + 'static) {
        self.controller = Box::new(controller);
    }

    /// Current display metrics.
    #[must_use]
    pub fn display_metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    /// Records the surface's density. A change rebuilds the render context on the next paint.
    pub fn set_display_metrics(&mut self, metrics: DisplayMetrics) {
        if self.metrics == metrics {
            return;
        }
        tracing::debug!(
            density = metrics.density,
            scaled_density = metrics.scaled_density,
            "display metrics changed"
        );
        self.metrics = metrics;
        self.coordinator.render_slot().reset();
        self.invalidate(false);
    }

    /// Whether touch input is currently interpreted as gestures.
    #[must_use]
    pub fn gestures_enabled(&self) -> bool {
        self.gestures_enabled
    }

    /// Zoom/pan bookkeeping of the gesture axis.
    #[must_use]
    pub fn viewport_state(&self) -> &ViewportState {
        &self.viewport
    }

    /// Forgets the captured initial scale and zoom state.
    ///
    /// The next gesture captures the scale of the current model's axis.
    pub fn reset_viewport(&mut self) {
        self.viewport.reset();
    }

    /// Handles one platform touch event. Returns whether it was handled.
    ///
    /// With gestures enabled the event always counts as handled; otherwise the
    /// controller decides.
    ///
    /// Without gestures the controller sees one started/completed pair per
    /// touch: only the first pointer's `Down` starts it, and it completes when
    /// the last pointer lifts or the platform cancels the touch. Extra pointers
    /// going down or up are not forwarded and report unhandled, as is any
    /// event of a touch that started before raw routing was in effect.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        let scale = self.metrics.density;
        let Some(sample) = self.tracker.track(event, scale) else {
            return false;
        };
        self.last_touch = if sample.remaining_pointers() > 0 {
            sample.logical_current().first().copied()
        } else {
            None
        };

        if !self.gestures_enabled {
            let point = sample
                .action_point()
                .map_or(Point::ZERO, |p| logical_point(p, scale));
            return match sample.action {
                PointerAction::Down(_) if sample.pointer_count() == 1 => {
                    self.raw_touch_open = true;
                    self.controller.on_touch_started(point)
                }
                PointerAction::Move if self.raw_touch_open => self
                    .controller
                    .on_touch_delta(&sample.logical_current(), &sample.logical_previous()),
                PointerAction::Up(_) | PointerAction::Cancel
                    if self.raw_touch_open && sample.remaining_pointers() == 0 =>
                {
                    self.raw_touch_open = false;
                    self.controller.on_touch_completed(point)
                }
                PointerAction::Down(_)
                | PointerAction::Move
                | PointerAction::Up(_)
                | PointerAction::Cancel => false,
            };
        }

        let mut changed = false;
        for gesture in self.gestures.on_sample(&sample) {
            changed |= self.apply(gesture, scale);
        }
        if changed {
            self.invalidate(false);
        }
        true
    }

    /// Advances gesture timers, confirming a pending single tap once its
    /// double-tap window has passed. Returns whether a gesture was emitted.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.gestures_enabled {
            return false;
        }
        let Some(event) = self.gestures.poll(now_ms) else {
            return false;
        };
        if self.apply(event, self.metrics.density) {
            self.invalidate(false);
        }
        true
    }

    /// Requests a recompute before the next paint, re-binding data if
    /// `update_data`, and schedules a repaint.
    pub fn invalidate(&self, update_data: bool) {
        self.coordinator.request_invalidate(update_data);
    }

    /// A handle for requesting invalidation from other threads.
    #[must_use]
    pub fn invalidation_handle(&self) -> InvalidationHandle {
        self.coordinator.handle()
    }

    /// Whether an invalidation is waiting for the next paint.
    #[must_use]
    pub fn is_invalidated(&self) -> bool {
        self.coordinator.is_pending()
    }

    /// Paints the model into `target`, whose size is given in device pixels.
    ///
    /// Pending invalidation is consumed first and the model recomputed outside
    /// any lock; the render context is then built on first use and the model
    /// paints under the render lock with its size in logical pixels.
    pub fn draw(&mut self, target: &mut B::Target, size: Size) -> PaintOutcome {
        let Some(model) = self.model.as_mut() else {
            tracing::debug!("paint skipped: no model");
            return PaintOutcome::Skipped(SkipReason::NoModel);
        };
        let Some(backend) = self.backend.as_ref() else {
            tracing::debug!("paint skipped: no backend");
            return PaintOutcome::Skipped(SkipReason::NoBackend);
        };

        let pending = self.coordinator.take_pending();
        let recomputed = pending.needs_recompute();
        if recomputed {
            model.recompute(pending.update_data());
        }

        let metrics = self.metrics;
        let logical = logical_point(Point::new(size.width, size.height), metrics.density);
        tracing::trace!(recomputed, width = logical.x, height = logical.y, "paint");
        self.coordinator.render_slot().with_context(
            || backend.create_context(&metrics),
            |context| {
                backend.bind(context, target);
                model.paint(context, logical.x, logical.y);
            },
        );
        PaintOutcome::Painted { recomputed }
    }

    /// Switches input handling, completing any touch the controller saw start.
    fn set_gestures_enabled(&mut self, enabled: bool) {
        if self.gestures_enabled == enabled {
            return;
        }
        let last_touch = self.last_touch.take();
        let gesture_interrupted = ViewportController::notify_gesture_completed(&mut self.viewport);
        let raw_interrupted = !self.gestures_enabled && self.raw_touch_open;
        self.raw_touch_open = false;
        if gesture_interrupted || raw_interrupted {
            tracing::debug!("touch interrupted by input mode change");
            self.controller.on_touch_completed(last_touch.unwrap_or(Point::ZERO));
        }
        self.gestures_enabled = enabled;
        self.tracker.reset();
        self.gestures.reset();
    }

    /// Applies one gesture. Returns whether the axis changed.
    fn apply(&mut self, event: GestureEvent, scale: f64) -> bool {
        let kind = self.config.axis_kind;
        match event {
            GestureEvent::InteractionStarted(point) => {
                if ViewportController::notify_gesture_started(&mut self.viewport) {
                    self.controller.on_touch_started(point);
                }
                false
            }
            GestureEvent::Pan { pixel_delta, .. } => ViewportController::apply_pan(
                &mut self.viewport,
                axis_of(&mut self.model, kind),
                pixel_delta.x,
                scale,
            ),
            GestureEvent::Pinch {
                scale_factor,
                center,
            } => ViewportController::apply_pinch(
                &mut self.viewport,
                axis_of(&mut self.model, kind),
                scale_factor,
                center,
            ),
            GestureEvent::InteractionCompleted(point) => {
                if ViewportController::notify_gesture_completed(&mut self.viewport) {
                    self.controller.on_touch_completed(point);
                }
                false
            }
            GestureEvent::SingleTap(point) => {
                self.controller.on_touch_started(point);
                self.controller.on_touch_completed(point);
                false
            }
            GestureEvent::DoubleTap(_) => ViewportController::apply_double_tap(
                &mut self.viewport,
                axis_of(&mut self.model, kind),
            ),
        }
    }
}

fn axis_of<M: PlotModel>(model: &mut Option<M>, kind: AxisKind) -> Option<&mut dyn Axis> {
    model
        .as_mut()
        .and_then(|model| select_axis(model.axes_mut(), kind))
}

impl<M, B: RenderBackend> fmt::Debug for PlotView<M, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotView")
            .field("config", &self.config)
            .field("has_model", &self.model.is_some())
            .field("has_backend", &self.backend.is_some())
            .field("metrics", &self.metrics)
            .field("gestures_enabled", &self.gestures_enabled)
            .field("phase", &self.gestures.phase())
            .field("viewport", &self.viewport)
            .field("coordinator", &self.coordinator)
            .finish_non_exhaustive()
    }
}
