// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=plotview_viewport --heading-base-level=0

//! Plotview Viewport: gesture-driven pan and zoom of a plot axis.
//!
//! This crate owns the zoom/pan state machine for the one axis that touch
//! gestures manipulate:
//!
//! - [`Axis`] is the seam to the plot model: a handful of operations
//!   (`pan`, `zoom_at_center`, `zoom`, `scale`) that a model's axis implements.
//! - [`select_axis`] picks the first axis of a configured [`AxisKind`]; when
//!   there is none, every viewport operation is a no-op.
//! - [`ViewportState`] remembers the scale captured at the first gesture,
//!   whether the axis is zoomed, and whether an interaction is in progress.
//! - [`ViewportController`] applies pans, pinches and double taps to an axis
//!   and reports whether a redraw is needed.
//! - [`AxisViewport`] is a headless 1D axis transform implementing [`Axis`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use plotview_viewport::{Axis, AxisKind, AxisViewport, ViewportController, ViewportState};
//!
//! let mut axis = AxisViewport::new(AxisKind::Category, 0.0..800.0);
//! let mut state = ViewportState::new();
//!
//! // A pinch captures the scale it started from.
//! ViewportController::apply_pinch(&mut state, Some(&mut axis), 1.5, Point::new(400.0, 0.0));
//! assert_eq!(state.initial_scale(), Some(1.0));
//! assert!(state.is_zoomed());
//!
//! // A double tap while zoomed goes back to exactly that scale.
//! ViewportController::apply_double_tap(&mut state, Some(&mut axis));
//! assert_eq!(axis.scale(), 1.0);
//! ```
//!
//! ## Design notes
//!
//! - The initial scale is captured at first use and never refreshed. If the
//!   model is later re-bound to data with a different natural scale, a
//!   double-tap reset still restores the old value until the state is
//!   [reset](ViewportState::reset).
//! - Double tap toggles between exactly two scales, `initial` and
//!   `initial * DOUBLE_TAP_ZOOM_FACTOR`, regardless of pinch drift.
//!
//! This crate is `no_std`.

#![no_std]

mod axis;
mod axis_viewport;
mod controller;

pub use axis::{Axis, AxisKind, select_axis};
pub use axis_viewport::AxisViewport;
pub use controller::{DOUBLE_TAP_ZOOM_FACTOR, ViewportController, ViewportState};
