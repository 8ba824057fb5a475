// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborators supplied by the host: the plot model and the render backend.

use plotview_viewport::Axis;

/// Device density information for the surface the view is attached to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Device pixels per logical pixel. `0` means the surface is not measured yet.
    pub density: f64,
    /// Scale applied to text, usually `density` times the user's font scale.
    pub scaled_density: f64,
}

impl DisplayMetrics {
    /// Metrics for a surface with the given density and no font scaling.
    #[must_use]
    pub fn new(density: f64) -> Self {
        Self {
            density,
            scaled_density: density,
        }
    }
}

impl Default for DisplayMetrics {
    /// An unmeasured surface.
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// The chart being displayed.
///
/// The view only needs three things from a model: access to its axes so
/// gestures can pan and zoom one of them, a way to recompute derived state
/// before painting, and the paint itself.
pub trait PlotModel {
    /// Render context the model paints into.
    type Context;

    /// All axes of the model, in a stable order.
    fn axes_mut(&mut self) -> impl Iterator<Item = &mut dyn Axis>;

    /// Recomputes layout and derived state; re-binds data if `update_data`.
    fn recompute(&mut self, update_data: bool);

    /// Paints into `context` with the given size in logical pixels.
    fn paint(&mut self, context: &mut Self::Context, width: f64, height: f64);
}

/// Creates render contexts and binds them to frame targets.
pub trait RenderBackend {
    /// Long-lived context, created once per set of display metrics.
    type Context;
    /// Per-frame drawing target handed to [`PlotView::draw`](crate::PlotView::draw).
    type Target;

    /// Builds a context for the given metrics.
    fn create_context(&self, metrics: &DisplayMetrics) -> Self::Context;

    /// Points `context` at this frame's target before the model paints.
    fn bind(&self, context: &mut Self::Context, target: &mut Self::Target);
}
