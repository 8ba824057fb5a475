// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying gestures to an axis.

use kurbo::Point;

use crate::axis::Axis;

/// Zoom applied by a double tap, relative to the initial scale.
pub const DOUBLE_TAP_ZOOM_FACTOR: f64 = 2.5;

/// Per-axis zoom/pan bookkeeping owned by the widget.
///
/// `initial_scale` is captured lazily from the axis at the first gesture (the
/// axis may have no meaningful scale before the model is laid out) and is
/// never overwritten afterwards. Only [`ViewportState::reset`] clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    initial_scale: Option<f64>,
    is_zoomed: bool,
    is_panning: bool,
}

impl ViewportState {
    /// Creates a state with no captured scale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The axis scale captured at the first gesture, if any.
    #[must_use]
    pub fn initial_scale(&self) -> Option<f64> {
        self.initial_scale
    }

    /// Whether the axis is considered zoomed away from its initial scale.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.is_zoomed
    }

    /// Whether a pan/pinch interaction is in progress and has not completed.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.is_panning
    }

    /// Forgets everything, including the captured initial scale.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn capture_initial_scale(&mut self, axis: &dyn Axis) -> f64 {
        *self.initial_scale.get_or_insert_with(|| {
            let scale = axis.scale();
            tracing::debug!(scale, "captured initial axis scale");
            scale
        })
    }
}

/// Applies semantic gestures to one axis.
///
/// The controller holds no state of its own: it mutates the
/// [`ViewportState`] and [`Axis`] it is handed. Every `apply_*` function
/// returns `true` when the axis changed and the view should be redrawn
/// (without re-binding data). A missing axis makes every operation a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewportController;

impl ViewportController {
    /// Pans the axis by a device-pixel delta.
    ///
    /// The delta is converted with `pixel_dx / scale`; an unmeasured scale
    /// (`0`, negative or non-finite) pans by nothing.
    pub fn apply_pan(
        state: &mut ViewportState,
        axis: Option<&mut dyn Axis>,
        pixel_dx: f64,
        scale: f64,
    ) -> bool {
        let Some(axis) = axis else {
            return false;
        };
        state.capture_initial_scale(&*axis);
        let amount = if scale.is_finite() && scale > 0.0 {
            pixel_dx / scale
        } else {
            0.0
        };
        if amount == 0.0 || !amount.is_finite() {
            return false;
        }
        tracing::trace!(amount, "pan axis");
        axis.pan(amount);
        true
    }

    /// Zooms the axis about its center by `scale_factor`.
    ///
    /// Captures the initial scale first if this is the first gesture, and
    /// marks the viewport as zoomed. `center` is the pinch midpoint, reported
    /// for tracing only: the axis always zooms about its own center.
    pub fn apply_pinch(
        state: &mut ViewportState,
        axis: Option<&mut dyn Axis>,
        scale_factor: f64,
        center: Point,
    ) -> bool {
        let Some(axis) = axis else {
            return false;
        };
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return false;
        }
        state.capture_initial_scale(&*axis);
        state.is_zoomed = true;
        tracing::trace!(scale_factor, ?center, "pinch axis");
        axis.zoom_at_center(scale_factor);
        true
    }

    /// Toggles between the initial scale and [`DOUBLE_TAP_ZOOM_FACTOR`] times it.
    ///
    /// The toggle is defined relative to the captured initial scale, not to
    /// whatever scale earlier pinches left behind, so it always lands on one
    /// of exactly two scales.
    pub fn apply_double_tap(state: &mut ViewportState, axis: Option<&mut dyn Axis>) -> bool {
        let Some(axis) = axis else {
            return false;
        };
        let initial = state.capture_initial_scale(&*axis);
        if state.is_zoomed {
            tracing::debug!(initial, "double tap resets zoom");
            axis.zoom(initial);
            state.is_zoomed = false;
        } else {
            let target = initial * DOUBLE_TAP_ZOOM_FACTOR;
            tracing::debug!(target, "double tap zooms in");
            axis.zoom(target);
            state.is_zoomed = true;
        }
        true
    }

    /// Marks an interaction as started.
    ///
    /// Returns `true` only for the first call of an interaction, which is when
    /// an external controller should be told.
    pub fn notify_gesture_started(state: &mut ViewportState) -> bool {
        if state.is_panning {
            return false;
        }
        state.is_panning = true;
        true
    }

    /// Marks an interaction as completed.
    ///
    /// Returns `true` only if an interaction was in progress.
    pub fn notify_gesture_completed(state: &mut ViewportState) -> bool {
        if !state.is_panning {
            return false;
        }
        state.is_panning = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisKind;
    use crate::axis_viewport::AxisViewport;

    fn category_axis(scale: f64) -> AxisViewport {
        let mut axis = AxisViewport::new(AxisKind::Category, 0.0..800.0);
        axis.zoom(scale);
        axis
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pan_divides_by_device_scale() {
        let mut state = ViewportState::new();
        let mut axis = category_axis(1.0);
        let before = axis.offset();

        assert!(ViewportController::apply_pan(
            &mut state,
            Some(&mut axis),
            20.0,
            2.0
        ));
        assert!(close(axis.offset(), before + 10.0));
    }

    #[test]
    fn pan_with_unmeasured_scale_is_zero() {
        let mut state = ViewportState::new();
        let mut axis = category_axis(1.0);
        let before = axis.offset();

        assert!(!ViewportController::apply_pan(
            &mut state,
            Some(&mut axis),
            20.0,
            0.0
        ));
        assert_eq!(axis.offset(), before);
        assert!(!axis.offset().is_nan());
    }

    #[test]
    fn operations_without_axis_are_noops() {
        let mut state = ViewportState::new();
        assert!(!ViewportController::apply_pan(&mut state, None, 5.0, 1.0));
        assert!(!ViewportController::apply_pinch(
            &mut state,
            None,
            2.0,
            Point::ZERO
        ));
        assert!(!ViewportController::apply_double_tap(&mut state, None));
        assert_eq!(state, ViewportState::new());
    }

    #[test]
    fn first_pinch_captures_scale_before_zooming() {
        let mut state = ViewportState::new();
        let mut axis = category_axis(3.0);

        ViewportController::apply_pinch(&mut state, Some(&mut axis), 1.5, Point::ZERO);

        assert_eq!(state.initial_scale(), Some(3.0));
        assert!(state.is_zoomed());
        assert!(close(axis.scale(), 4.5));

        // Later pinches never overwrite the captured scale.
        ViewportController::apply_pinch(&mut state, Some(&mut axis), 2.0, Point::ZERO);
        assert_eq!(state.initial_scale(), Some(3.0));
    }

    #[test]
    fn double_tap_pair_returns_to_initial_scale() {
        let mut state = ViewportState::new();
        let mut axis = category_axis(2.0);

        ViewportController::apply_double_tap(&mut state, Some(&mut axis));
        assert!(close(axis.scale(), 5.0));
        assert!(state.is_zoomed());

        ViewportController::apply_double_tap(&mut state, Some(&mut axis));
        assert!(close(axis.scale(), 2.0));
        assert!(!state.is_zoomed());
    }

    #[test]
    fn double_tap_zoom_ignores_pinch_drift() {
        let mut state = ViewportState::new();
        let mut axis = category_axis(2.0);

        // Pinch in, then double tap back to initial, then drift again.
        ViewportController::apply_pinch(&mut state, Some(&mut axis), 1.7, Point::ZERO);
        ViewportController::apply_double_tap(&mut state, Some(&mut axis));
        assert!(close(axis.scale(), 2.0));

        ViewportController::apply_pan(&mut state, Some(&mut axis), 40.0, 1.0);
        ViewportController::apply_double_tap(&mut state, Some(&mut axis));
        assert!(close(axis.scale(), 5.0));
    }

    #[test]
    fn zoomed_double_tap_always_resets_to_initial() {
        let mut state = ViewportState::new();
        let mut axis = category_axis(2.0);

        ViewportController::apply_pinch(&mut state, Some(&mut axis), 3.3, Point::ZERO);
        ViewportController::apply_pinch(&mut state, Some(&mut axis), 0.9, Point::ZERO);
        ViewportController::apply_double_tap(&mut state, Some(&mut axis));

        assert!(close(axis.scale(), 2.0));
    }

    #[test]
    fn invalid_pinch_factor_is_ignored() {
        let mut state = ViewportState::new();
        let mut axis = category_axis(2.0);

        assert!(!ViewportController::apply_pinch(
            &mut state,
            Some(&mut axis),
            f64::NAN,
            Point::ZERO
        ));
        assert!(!state.is_zoomed());
    }

    #[test]
    fn start_and_complete_notify_once() {
        let mut state = ViewportState::new();

        assert!(ViewportController::notify_gesture_started(&mut state));
        assert!(!ViewportController::notify_gesture_started(&mut state));
        assert!(state.is_panning());

        assert!(ViewportController::notify_gesture_completed(&mut state));
        assert!(!ViewportController::notify_gesture_completed(&mut state));
        assert!(!state.is_panning());
    }

    #[test]
    fn reset_clears_captured_scale() {
        let mut state = ViewportState::new();
        let mut axis = category_axis(2.0);
        ViewportController::apply_double_tap(&mut state, Some(&mut axis));

        state.reset();

        assert_eq!(state.initial_scale(), None);
        assert!(!state.is_zoomed());
    }
}
