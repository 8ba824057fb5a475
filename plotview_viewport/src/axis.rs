// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis seam between gesture handling and a plot model.

/// Category of a plot axis, used to pick which axis gestures manipulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AxisKind {
    /// Discrete categories (bar and column charts).
    #[default]
    Category,
    /// Continuous linear values.
    Linear,
    /// Continuous values on a logarithmic scale.
    Logarithmic,
    /// Dates and times.
    DateTime,
}

/// An axis that gestures can pan and zoom.
///
/// `scale` is the axis transform factor: logical pixels per world unit.
/// Implementations are owned by the plot model; gesture handling only holds
/// them for the duration of one operation.
pub trait Axis {
    /// Which kind of axis this is.
    fn kind(&self) -> AxisKind;

    /// Current scale, in logical pixels per world unit.
    fn scale(&self) -> f64;

    /// Pans by `delta` logical pixels. Positive values move content towards the end of the axis.
    fn pan(&mut self, delta: f64);

    /// Multiplies the scale by `factor`, keeping the center of the axis fixed.
    fn zoom_at_center(&mut self, factor: f64);

    /// Sets the scale to `scale`, keeping the center of the axis fixed.
    fn zoom(&mut self, scale: f64);
}

/// Returns the first axis of the given kind, if any.
///
/// ```
/// use plotview_viewport::{Axis, AxisKind, AxisViewport, select_axis};
///
/// let mut axes = [
///     AxisViewport::new(AxisKind::Linear, 0.0..400.0),
///     AxisViewport::new(AxisKind::Category, 0.0..800.0),
/// ];
/// let axis = select_axis(axes.iter_mut().map(|a| a as &mut dyn Axis), AxisKind::Category);
/// assert_eq!(axis.map(|a| a.kind()), Some(AxisKind::Category));
/// ```
pub fn select_axis<'a, I>(axes: I, kind: AxisKind) -> Option<&'a mut dyn Axis>
where
    I: IntoIterator<Item = &'a mut dyn Axis>,
{
    axes.into_iter().find(|axis| axis.kind() == kind)
}
