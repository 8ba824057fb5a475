// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::axis::{Axis, AxisKind};

/// A 1D axis transform with uniform scale and pan, usable as a gesture target.
///
/// `AxisViewport` maps world values onto a span of logical pixels:
/// `view = view_span.start + offset + scale * world`. It implements [`Axis`],
/// so plot models without their own axis math can use it directly.
#[derive(Clone, Debug)]
pub struct AxisViewport {
    kind: AxisKind,
    view_span: Range<f64>,
    scale: f64,
    offset: f64,
}

impl AxisViewport {
    /// Creates an axis over the given view span (logical pixels).
    ///
    /// Initial scale is `1.0` and initial offset is zero.
    #[must_use]
    pub fn new(kind: AxisKind, view_span: Range<f64>) -> Self {
        Self {
            kind,
            view_span,
            scale: 1.0,
            offset: 0.0,
        }
    }

    /// Returns the current view span.
    #[must_use]
    pub fn view_span(&self) -> Range<f64> {
        self.view_span.clone()
    }

    /// Current pan offset in logical pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Converts a world value into a logical pixel position.
    #[must_use]
    pub fn world_to_view(&self, x: f64) -> f64 {
        self.view_span.start + self.offset + self.scale * x
    }

    /// Converts a logical pixel position into a world value.
    #[must_use]
    pub fn view_to_world(&self, x: f64) -> f64 {
        (x - self.view_span.start - self.offset) / self.scale
    }

    fn view_center(&self) -> f64 {
        (self.view_span.start + self.view_span.end) * 0.5
    }

    /// Sets the scale, keeping the world value under `anchor` fixed.
    fn rescale_about(&mut self, anchor: f64, scale: f64) {
        let world_at_anchor = self.view_to_world(anchor);
        self.scale = scale;
        self.offset = anchor - self.view_span.start - scale * world_at_anchor;
    }
}

impl Axis for AxisViewport {
    fn kind(&self) -> AxisKind {
        self.kind
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn pan(&mut self, delta: f64) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        self.offset += delta;
    }

    fn zoom_at_center(&mut self, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        self.rescale_about(self.view_center(), self.scale * factor);
    }

    fn zoom(&mut self, scale: f64) {
        if !(scale.is_finite() && scale > 0.0) {
            return;
        }
        self.rescale_about(self.view_center(), scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn world_view_roundtrip() {
        let mut axis = AxisViewport::new(AxisKind::Category, 0.0..800.0);
        axis.zoom(2.0);
        axis.pan(10.0);

        let view = axis.world_to_view(123.456);
        assert!(close(axis.view_to_world(view), 123.456));
    }

    #[test]
    fn zoom_at_center_keeps_center_fixed() {
        let mut axis = AxisViewport::new(AxisKind::Category, 0.0..800.0);
        let before = axis.view_to_world(400.0);

        axis.zoom_at_center(3.0);

        assert!(close(axis.scale(), 3.0));
        assert!(close(axis.view_to_world(400.0), before));
    }

    #[test]
    fn absolute_zoom_keeps_center_fixed() {
        let mut axis = AxisViewport::new(AxisKind::Category, 100.0..300.0);
        axis.pan(37.0);
        let before = axis.view_to_world(200.0);

        axis.zoom(0.25);

        assert!(close(axis.scale(), 0.25));
        assert!(close(axis.view_to_world(200.0), before));
    }

    #[test]
    fn invalid_zoom_factors_are_ignored() {
        let mut axis = AxisViewport::new(AxisKind::Category, 0.0..800.0);
        axis.zoom_at_center(0.0);
        axis.zoom_at_center(-2.0);
        axis.zoom_at_center(f64::NAN);
        axis.zoom(f64::INFINITY);
        assert!(close(axis.scale(), 1.0));
    }

    #[test]
    fn pan_moves_content_with_the_finger() {
        let mut axis = AxisViewport::new(AxisKind::Category, 0.0..800.0);
        let before = axis.world_to_view(10.0);
        axis.pan(25.0);
        assert!(close(axis.world_to_view(10.0), before + 25.0));
    }
}
